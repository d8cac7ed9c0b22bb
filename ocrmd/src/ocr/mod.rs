//! OCR (Optical Character Recognition) Module
//!
//! Turns image bytes into text for the report pipeline.
//!
//! # Architecture
//!
//! - `OcrEngine` trait defines the interface the pipeline calls
//! - `TesseractEngine` implements local OCR via leptess
//! - `LanguageHint` names the Tesseract models applied to each image
//! - `decode_for_ocr` decodes any supported container and re-encodes it as PNG
//!
//! The engine is passed in by the caller, so tests swap in a fake that returns
//! canned text or a forced failure.
//!
//! # Configuration
//!
//! Controlled via `OcrConfig` (see `config.rs`):
//! - `languages`: `+` or comma separated Tesseract codes, default `jpn+eng`
//! - `tessdata_dir`: location of the traineddata files
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut engine = TesseractEngine::new(&config.ocr);
//! let png = decode_for_ocr(&bytes)?;
//! let text = engine.recognize(&png, &config.ocr.languages)?;
//! ```

mod decode;
mod language;
mod provider;

pub use decode::decode_for_ocr;
pub use language::LanguageHint;
pub use provider::{OcrEngine, TesseractEngine};
