use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OcrmdError, Result};

/// Extensions accepted as images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tiff", "webp"];

/// An image found directly inside the source folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    pub name: String,
    /// Lowercased, without the leading dot.
    pub extension: String,
}

impl ImageFile {
    fn from_path(path: PathBuf) -> Option<Self> {
        if !is_supported_image(&path) {
            return None;
        }
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        let name = path.file_name()?.to_string_lossy().into_owned();

        Some(Self {
            path,
            name,
            extension,
        })
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// List the image files directly inside `folder`, sorted by file name.
///
/// Subdirectories are not visited. A symlink counts when its target is a
/// regular file; the link's own path is reported.
pub fn discover_images(folder: &Path) -> Result<Vec<ImageFile>> {
    if !folder.is_dir() {
        return Err(OcrmdError::DirectoryNotFound(folder.to_path_buf()));
    }

    let mut images = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(image) = ImageFile::from_path(path) {
            images.push(image);
        }
    }

    images.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    tracing::debug!(
        folder = %folder.display(),
        count = images.len(),
        "Discovered image files"
    );

    Ok(images)
}
