use std::borrow::Cow;
use std::fs;

use crate::discovery::ImageFile;
use crate::error::Result;
use crate::ocr::{decode_for_ocr, LanguageHint, OcrEngine};

/// Prefix placed in front of a failure message in the report.
pub const ERROR_MARKER: &str = "エラー";

/// Outcome of running OCR on one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    /// Recognized text, trimmed. May be empty.
    Text(String),
    /// Why the image could not be read or recognized.
    Error(String),
}

impl ExtractionResult {
    /// Text that goes into the report section for this image.
    pub fn report_body(&self) -> Cow<'_, str> {
        match self {
            ExtractionResult::Text(text) => Cow::Borrowed(text),
            ExtractionResult::Error(message) => Cow::Owned(format!("{ERROR_MARKER}: {message}")),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ExtractionResult::Error(_))
    }
}

/// Run OCR on a single image file.
///
/// Failures to read, decode, or recognize the file are returned as
/// `ExtractionResult::Error` so one bad image never stops the batch.
pub fn extract_text(
    engine: &mut dyn OcrEngine,
    image: &ImageFile,
    hint: &LanguageHint,
) -> ExtractionResult {
    match recognize_file(engine, image, hint) {
        Ok(text) => ExtractionResult::Text(text.trim().to_string()),
        Err(e) => {
            tracing::warn!(file = %image.path.display(), error = %e, "OCR failed");
            ExtractionResult::Error(e.to_string())
        }
    }
}

fn recognize_file(
    engine: &mut dyn OcrEngine,
    image: &ImageFile,
    hint: &LanguageHint,
) -> Result<String> {
    let bytes = fs::read(&image.path)?;
    let png = decode_for_ocr(&bytes)?;
    engine.recognize(&png, hint)
}
