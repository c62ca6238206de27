//! Configuration structures for the extraction pipeline.
//!
//! Tunable parameters for both acquisition modes, serializable to JSON so
//! a card layout can be described once and reused across photographs.
//!
//! ```no_run
//! use card_colors::ExtractionConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ExtractionConfig::from_json_file(Path::new("card.json"))?;
//!
//! // Or use defaults
//! let config = ExtractionConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{grid, picker};

/// Complete configuration for one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Grid sampling parameters
    #[serde(default)]
    pub grid: GridConfig,

    /// Interactive picker parameters
    #[serde(default)]
    pub picker: PickerConfig,
}

/// Geometry of the sampling lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of swatch rows on the card
    pub rows: u32,

    /// Number of swatch columns on the card
    pub cols: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: grid::DEFAULT_ROWS,
            cols: grid::DEFAULT_COLS,
        }
    }
}

/// Interactive picker parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Half-width in pixels of the square window averaged around a click
    pub click_half_width: u32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            click_half_width: picker::CLICK_HALF_WIDTH,
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractionConfig::default();
        assert_eq!(config.grid.rows, 10);
        assert_eq!(config.grid.cols, 10);
        assert_eq!(config.picker.click_half_width, 10);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = ExtractionConfig {
            grid: GridConfig { rows: 6, cols: 12 },
            picker: PickerConfig {
                click_half_width: 4,
            },
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.json");
        config.to_json_file(&path).unwrap();

        let loaded = ExtractionConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: ExtractionConfig =
            serde_json::from_str(r#"{"grid": {"rows": 4, "cols": 8}}"#).unwrap();
        assert_eq!(config.grid.rows, 4);
        assert_eq!(config.picker.click_half_width, 10);
    }
}
