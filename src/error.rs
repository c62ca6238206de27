//! Error types for the card_colors library

use thiserror::Error;

/// Result type alias for card_colors operations
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Error types for color card extraction
///
/// Every failure mode in this pipeline is local and deterministic, so none of
/// these are retried; they propagate straight to the caller.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Grid cell produced a degenerate sampling window
    ///
    /// Raised when the clipped window for a cell is empty (x1 >= x2 or
    /// y1 >= y2), which happens when the requested geometry leaves cells
    /// narrower than the sampling window can support. Aborts the whole run.
    #[error(
        "Invalid grid geometry: cell ({row}, {col}) has an empty sampling window \
         (cell size {cell_width}x{cell_height} px)"
    )]
    InvalidGeometry {
        row: u32,
        col: u32,
        cell_width: u32,
        cell_height: u32,
    },

    /// User cancelled the interactive picking session
    ///
    /// Not a crash: it means "no output produced", and is reported separately
    /// from real failures so callers can exit quietly.
    #[error("Picking session cancelled; no colors saved")]
    PickerCancelled,

    /// Display window could not be created or updated
    #[error("Display unavailable: {message}")]
    Display {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Output database could not be serialized or written
    #[error("Failed to write color database: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ExtractionError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a display error with context
    pub fn display<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Display {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a serialization error with context
    pub fn serialization<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get user-friendly error description for CLI display
    pub fn user_message(&self) -> String {
        match self {
            ExtractionError::ImageLoad { .. } => {
                "Could not load the image. Check the path and file format and try again."
                    .to_string()
            }
            ExtractionError::InvalidGeometry {
                row,
                col,
                cell_width,
                cell_height,
            } => {
                format!(
                    "Grid cell ({}, {}) is only {}x{} px, too small to sample. \
                     Use fewer rows/columns or a larger image.",
                    row, col, cell_width, cell_height
                )
            }
            ExtractionError::PickerCancelled => "Cancelled. No colors were saved.".to_string(),
            ExtractionError::Display { .. } => {
                "Could not open a display window. Manual mode needs an interactive \
                 session; use --mode grid on headless machines."
                    .to_string()
            }
            ExtractionError::Serialization { .. } => {
                "Could not write the output file. Check the output path is writable."
                    .to_string()
            }
        }
    }
}
