use std::io::Cursor;

use image::{GenericImageView, ImageFormat, ImageReader};

use crate::error::Result;

/// Decode image bytes of any supported format and re-encode them as PNG.
///
/// Leptonica's own readers vary by build (WebP and GIF are often missing), so
/// every file goes through the `image` crate first. Pixels are left untouched.
///
/// # Arguments
/// * `bytes` - Raw file contents (JPEG, PNG, BMP, GIF, TIFF, WebP)
///
/// # Returns
/// PNG bytes ready for the OCR engine
pub fn decode_for_ocr(bytes: &[u8]) -> Result<Vec<u8>> {
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    let (width, height) = img.dimensions();
    tracing::debug!(width, height, "Decoded image for OCR");

    let mut output = Vec::new();
    img.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;

    Ok(output)
}
