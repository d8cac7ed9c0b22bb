#![allow(dead_code)]

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageFormat};
use ocrmd::{LanguageHint, OcrEngine, OcrmdError};

/// Scripted stand-in for Tesseract: answers calls in order.
///
/// `Some(text)` is returned as recognized text, `None` as an OCR failure.
pub struct ScriptedEngine {
    replies: VecDeque<Option<String>>,
    pub calls: usize,
}

impl ScriptedEngine {
    pub fn new(replies: &[Option<&str>]) -> Self {
        Self {
            replies: replies.iter().map(|r| r.map(String::from)).collect(),
            calls: 0,
        }
    }
}

impl OcrEngine for ScriptedEngine {
    fn recognize(&mut self, _image: &[u8], _hint: &LanguageHint) -> ocrmd::Result<String> {
        self.calls += 1;
        match self.replies.pop_front() {
            Some(Some(text)) => Ok(text),
            Some(None) => Err(OcrmdError::Ocr("simulated recognition failure".to_string())),
            None => panic!("ScriptedEngine ran out of replies after {} calls", self.calls),
        }
    }
}

/// Write a small blank image of the format implied by `name`'s extension.
pub fn write_image(dir: &Path, name: &str) {
    let format = ImageFormat::from_path(name).unwrap_or(ImageFormat::Png);
    DynamicImage::new_rgb8(32, 16)
        .save_with_format(dir.join(name), format)
        .unwrap_or_else(|e| panic!("Failed to write image fixture '{name}': {e}"));
}

pub fn write_text(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents)
        .unwrap_or_else(|e| panic!("Failed to write fixture '{name}': {e}"));
}

/// Every report line except the timestamp.
pub fn without_timestamp(report: &str) -> Vec<&str> {
    report
        .lines()
        .filter(|line| !line.starts_with("作成日時: "))
        .collect()
}
