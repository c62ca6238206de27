//! Loading card photographs from disk
//!
//! Thin wrapper over the `image` crate that decodes any of its supported
//! formats (JPEG, PNG, GIF, WebP, TIFF, BMP, and friends) and converts the
//! result to the RGB8 [`CardImage`] the samplers work on.

use crate::card::CardImage;
use crate::error::{ExtractionError, Result};
use std::path::Path;

/// Load a card photograph and convert it to RGB8
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Errors
///
/// Returns [`ExtractionError::ImageLoad`] if:
/// - File cannot be opened
/// - Decoding fails (unsupported or corrupt data)
pub fn load_card(path: &Path) -> Result<CardImage> {
    use image::ImageReader;

    let reader = ImageReader::open(path).map_err(|e| {
        ExtractionError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let img = reader.decode().map_err(|e| {
        ExtractionError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    CardImage::from_raw(rgb.into_raw(), width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file() {
        let err = load_card(Path::new("/nonexistent/card.png")).unwrap_err();
        assert!(matches!(err, ExtractionError::ImageLoad { .. }));
    }

    #[test]
    fn test_load_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.png");
        image::RgbImage::from_pixel(3, 2, image::Rgb([120, 45, 200]))
            .save(&path)
            .unwrap();

        let card = load_card(&path).unwrap();
        assert_eq!(card.width(), 3);
        assert_eq!(card.height(), 2);
        assert_eq!(card.pixel(2, 1), Some([120, 45, 200]));
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.png");
        std::fs::write(&path, b"not an image").unwrap();

        let err = load_card(&path).unwrap_err();
        assert!(matches!(err, ExtractionError::ImageLoad { .. }));
    }
}
