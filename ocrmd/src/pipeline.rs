use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::discovery::discover_images;
use crate::error::Result;
use crate::extraction::extract_text;
use crate::ocr::{LanguageHint, OcrEngine};
use crate::report::ReportBuilder;

/// Name of the report written into the source folder.
pub const OUTPUT_FILE_NAME: &str = "ocr_results.md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The folder had no images; nothing was written.
    NoImages,
    Written { output: PathBuf, image_count: usize },
}

/// OCR every image in `folder` and write `ocr_results.md` next to them.
///
/// Progress lines go to `out`. Per-image failures end up in the report; only
/// a missing folder or an I/O failure on `out` or the report file is returned
/// as an error.
pub fn run(
    folder: &Path,
    engine: &mut dyn OcrEngine,
    hint: &LanguageHint,
    out: &mut dyn Write,
) -> Result<RunOutcome> {
    let images = discover_images(folder)?;

    if images.is_empty() {
        writeln!(out, "画像ファイルが見つかりませんでした。")?;
        return Ok(RunOutcome::NoImages);
    }

    writeln!(out, "{}個の画像ファイルが見つかりました。", images.len())?;

    let mut builder = ReportBuilder::new(folder, Local::now().naive_local(), images.len());
    let mut failures = 0usize;
    for (i, image) in images.iter().enumerate() {
        writeln!(out, "処理中: {}", image.name)?;
        let result = extract_text(engine, image, hint);
        if result.is_error() {
            failures += 1;
        }
        builder.push_image(i + 1, image, &result);
    }
    let report = builder.finish();

    let output = folder.join(OUTPUT_FILE_NAME);
    report.write_to(&output)?;

    tracing::info!(
        output = %output.display(),
        images = images.len(),
        failures,
        "Report written"
    );
    writeln!(out, "OCR結果を保存しました: {}", output.display())?;

    Ok(RunOutcome::Written {
        output,
        image_count: images.len(),
    })
}
