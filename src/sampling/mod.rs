//! Color acquisition from a card image
//!
//! Two samplers produce the same output type from different inputs:
//!
//! - [`grid::GridSampler`] walks a regular lattice over the card
//! - [`picker::PickerSession`] accumulates user clicks one event at a time
//!
//! Both emit ordered [`RawSample`] sequences; everything downstream
//! (normalization, database assembly) is sampler-agnostic.

pub mod grid;
pub mod picker;

pub use grid::GridSampler;
pub use picker::{PickerEvent, PickerSession};

/// Where a sample was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplePosition {
    /// Grid cell, row-major
    Cell { row: u32, col: u32 },
    /// Clicked pixel
    Point { x: u32, y: u32 },
}

/// One representative color: real-valued per-channel means over a window
///
/// Identity is sequence order; positions are carried for logging and
/// never influence downstream processing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    /// Cell or click the window was centered on
    pub position: SamplePosition,
    /// Mean red in [0, 255]
    pub red: f64,
    /// Mean green in [0, 255]
    pub green: f64,
    /// Mean blue in [0, 255]
    pub blue: f64,
}

impl RawSample {
    /// Channel means as an array, in RGB order
    pub fn channels(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}
