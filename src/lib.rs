//! # Card Colors
//!
//! A Rust crate for extracting representative colors from photographed
//! color reference cards (yarn cards, floss charts) into a structured
//! color database.
//!
//! Two acquisition modes feed a shared normalization pipeline:
//! - Grid sampling: average a small centered window in every cell of a
//!   regular lattice laid over the card
//! - Manual picking: click each swatch in a display window, with save,
//!   cancel, and reset under keyboard control
//!
//! Each sampled color is kept as an uppercase hex code plus a CIELAB
//! triple rounded to one decimal, so downstream tools can match colors
//! perceptually.
//!
//! ## Example
//!
//! ```rust,no_run
//! use card_colors::{extract_grid, CodePolicy, GridConfig};
//! use std::path::Path;
//!
//! let db = extract_grid(
//!     Path::new("card.jpg"),
//!     &GridConfig::default(),
//!     &CodePolicy::sequential(100),
//! )?;
//! println!("Extracted {} colors", db.records().len());
//! # Ok::<(), card_colors::ExtractionError>(())
//! ```

use std::path::Path;

use tracing::info;

pub mod card;
pub mod color;
pub mod config;
pub mod constants;
pub mod database;
pub mod display;
pub mod error;
pub mod image_loader;
pub mod sampling;

pub use card::CardImage;
pub use color::{ColorNormalizer, DeviceLabTransform, NormalizedColor, SrgbLabTransform};
pub use config::{ExtractionConfig, GridConfig, PickerConfig};
pub use database::{
    assemble, write_database, AssembledDatabase, CodeCountMismatch, CodePolicy, ColorRecord,
};
pub use error::{ExtractionError, Result};
pub use image_loader::load_card;
pub use sampling::{GridSampler, PickerEvent, PickerSession, RawSample, SamplePosition};

/// Extract one color per grid cell from a card photograph
///
/// Loads the image, samples the lattice described by `grid`, and assembles
/// the database with codes from `policy`.
///
/// # Errors
///
/// Returns `ExtractionError` if:
/// - Image cannot be loaded or decoded
/// - Grid geometry leaves any cell with an empty sampling window
pub fn extract_grid(
    image_path: &Path,
    grid: &GridConfig,
    policy: &CodePolicy,
) -> Result<AssembledDatabase> {
    let image = load_card(image_path)?;
    info!(
        "Loaded {}x{} card image from {}",
        image.width(),
        image.height(),
        image_path.display()
    );

    let samples = GridSampler::new(grid.rows, grid.cols).sample(&image)?;
    Ok(assemble(&samples, &ColorNormalizer::new(), policy))
}

/// Extract colors by clicking swatches in a display window
///
/// Loads the image, opens a card window, and runs a picking session until
/// the user saves or cancels. Blocks the calling thread for the whole
/// session.
///
/// # Errors
///
/// Returns `ExtractionError` if:
/// - Image cannot be loaded or decoded
/// - No display window can be created (headless environment)
/// - The session ends without a save
pub fn extract_manual(
    image_path: &Path,
    picker: &PickerConfig,
    policy: &CodePolicy,
) -> Result<AssembledDatabase> {
    let image = load_card(image_path)?;
    info!(
        "Loaded {}x{} card image from {}",
        image.width(),
        image.height(),
        image_path.display()
    );

    let samples = display::run_picker(&image, picker.click_half_width)?;
    Ok(assemble(&samples, &ColorNormalizer::new(), policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_extraction_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.png");
        image::RgbImage::from_pixel(40, 40, image::Rgb([128, 64, 32]))
            .save(&path)
            .unwrap();

        let db = extract_grid(
            &path,
            &GridConfig { rows: 2, cols: 2 },
            &CodePolicy::sequential(100),
        )
        .unwrap();

        assert_eq!(db.records().len(), 4);
        assert_eq!(db.records()[0].code, "100");
        assert_eq!(db.records()[3].code, "103");
        assert_eq!(db.records()[0].hex, "#804020");
    }
}
