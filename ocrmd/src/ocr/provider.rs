use std::path::{Path, PathBuf};

use leptess::LepTess;
use tracing::{info, warn};

use super::LanguageHint;
use crate::config::OcrConfig;
use crate::error::{OcrmdError, Result};

/// Image-to-text capability used by the extraction step.
pub trait OcrEngine {
    /// Recognize text in an encoded image using the given language models.
    fn recognize(&mut self, image: &[u8], hint: &LanguageHint) -> Result<String>;
}

enum TesseractBackend {
    Ready {
        tesseract: LepTess,
        languages: LanguageHint,
    },
    Unavailable {
        reason: String,
        languages: LanguageHint,
    },
}

impl TesseractBackend {
    fn languages(&self) -> &LanguageHint {
        match self {
            TesseractBackend::Ready { languages, .. } => languages,
            TesseractBackend::Unavailable { languages, .. } => languages,
        }
    }
}

/// Local OCR through leptess.
///
/// Initialization never fails outright: a missing library or traineddata file
/// leaves the engine unavailable and every `recognize` call returns
/// `OcrmdError::OcrUnavailable`, which the pipeline records per image.
pub struct TesseractEngine {
    backend: TesseractBackend,
    tessdata_dir: Option<PathBuf>,
}

fn create_tesseract(
    tessdata_dir: Option<&Path>,
    languages: &LanguageHint,
) -> std::result::Result<LepTess, String> {
    let data_path = match tessdata_dir {
        Some(dir) => Some(
            dir.to_str()
                .ok_or_else(|| format!("tessdata path is not UTF-8: {}", dir.display()))?,
        ),
        None => None,
    };
    LepTess::new(data_path, &languages.to_string()).map_err(|e| e.to_string())
}

fn init_backend(tessdata_dir: Option<&Path>, languages: &LanguageHint) -> TesseractBackend {
    match create_tesseract(tessdata_dir, languages) {
        Ok(tesseract) => {
            info!(languages = %languages, primary = languages.primary(), "Tesseract OCR initialized");
            TesseractBackend::Ready {
                tesseract,
                languages: languages.clone(),
            }
        }
        Err(e) => {
            let reason = format!("Tesseract not available for '{languages}': {e}");
            warn!("{}", reason);
            TesseractBackend::Unavailable {
                reason,
                languages: languages.clone(),
            }
        }
    }
}

impl TesseractEngine {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            backend: init_backend(config.tessdata_dir.as_deref(), &config.languages),
            tessdata_dir: config.tessdata_dir.clone(),
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, TesseractBackend::Unavailable { .. })
    }

    pub fn languages(&self) -> &LanguageHint {
        self.backend.languages()
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&mut self, image: &[u8], hint: &LanguageHint) -> Result<String> {
        if self.backend.languages() != hint {
            self.backend = init_backend(self.tessdata_dir.as_deref(), hint);
        }

        match &mut self.backend {
            TesseractBackend::Ready { tesseract, .. } => {
                tesseract
                    .set_image_from_mem(image)
                    .map_err(|e| OcrmdError::Ocr(format!("Failed to set image: {e}")))?;
                let text = tesseract
                    .get_utf8_text()
                    .map_err(|e| OcrmdError::Ocr(format!("Failed to extract text: {e}")))?;

                Ok(text.trim().to_string())
            }
            TesseractBackend::Unavailable { reason, .. } => {
                Err(OcrmdError::OcrUnavailable(reason.clone()))
            }
        }
    }
}
