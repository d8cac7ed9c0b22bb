use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::discovery::ImageFile;
use crate::error::{OcrmdError, Result};
use crate::extraction::ExtractionResult;

pub const REPORT_TITLE: &str = "# OCR結果";
pub const NO_TEXT_PLACEHOLDER: &str = "*テキストが検出されませんでした*";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A rendered Markdown document, kept as separate sections until written.
///
/// The first section is the header; every following one belongs to one image,
/// in the order they were pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    sections: Vec<String>,
}

impl Report {
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn render(&self) -> String {
        self.sections.join("\n")
    }

    /// Write the document as UTF-8, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render()).map_err(|source| OcrmdError::WriteReport {
            path: path.to_path_buf(),
            source,
        })
    }
}

pub struct ReportBuilder {
    sections: Vec<String>,
}

impl ReportBuilder {
    pub fn new(folder: &Path, generated_at: NaiveDateTime, image_count: usize) -> Self {
        let header = format!(
            "{REPORT_TITLE}\n\nフォルダ: {}\n作成日時: {}\n処理画像数: {image_count}\n\n---\n",
            folder.display(),
            generated_at.format(TIMESTAMP_FORMAT),
        );

        let mut sections = Vec::with_capacity(image_count + 1);
        sections.push(header);
        Self { sections }
    }

    /// Append the section for one image. `index` is 1-based.
    pub fn push_image(&mut self, index: usize, image: &ImageFile, result: &ExtractionResult) {
        let body = result.report_body();
        let section = if body.is_empty() {
            format!("## 画像 {index}: {}\n\n{NO_TEXT_PLACEHOLDER}\n", image.name)
        } else {
            let fence = fence_for(&body);
            format!("## 画像 {index}: {}\n\n{fence}\n{body}\n{fence}\n", image.name)
        };
        self.sections.push(section);
    }

    pub fn finish(self) -> Report {
        Report {
            sections: self.sections,
        }
    }
}

/// Backtick fence long enough that nothing inside `body` can close it.
fn fence_for(body: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in body.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat(longest.max(2) + 1)
}
