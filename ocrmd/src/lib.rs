pub mod config;
pub mod discovery;
pub mod error;
pub mod extraction;
pub mod ocr;
pub mod pipeline;
pub mod report;

pub use discovery::{discover_images, ImageFile};
pub use error::{OcrmdError, Result};
pub use extraction::{extract_text, ExtractionResult};
pub use ocr::{LanguageHint, OcrEngine, TesseractEngine};
pub use pipeline::{run, RunOutcome, OUTPUT_FILE_NAME};
pub use report::{Report, ReportBuilder};
