//! In-memory representation of a decoded color card photograph
//!
//! [`CardImage`] is an immutable RGB8 pixel buffer. Both samplers read from
//! it; nothing in the pipeline writes to it. Marker overlays for the
//! interactive picker are composited into a separate display buffer
//! (see [`crate::display`]), never into the card itself.

use crate::error::{ExtractionError, Result};

/// A decoded color card image: row-major RGB8, 3 bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl CardImage {
    /// Build a card image from a raw interleaved RGB buffer
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::ImageLoad`] if either dimension is zero or
    /// the buffer length does not match `width * height * 3`.
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ExtractionError::ImageLoad {
                message: format!("image has a zero dimension ({}x{})", width, height),
                source: None,
            });
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(ExtractionError::ImageLoad {
                message: format!(
                    "pixel buffer is {} bytes, expected {} for {}x{} RGB",
                    data.len(),
                    expected,
                    width,
                    height
                ),
                source: None,
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a uniform single-color card, mainly for tests and benchmarks
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * 3);
        for _ in 0..pixels {
            data.extend_from_slice(&rgb);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the RGB triple at (x, y) if inside bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Per-channel mean over the half-open window `[x1, x2) x [y1, y2)`
    ///
    /// The window is intersected with the image bounds; `None` means the
    /// intersection is empty, which callers treat as degenerate geometry.
    /// Channel means are real-valued, matching the averages the samplers
    /// feed into normalization.
    pub fn mean_rgb(&self, x1: u32, y1: u32, x2: u32, y2: u32) -> Option<[f64; 3]> {
        let x2 = x2.min(self.width);
        let y2 = y2.min(self.height);
        if x1 >= x2 || y1 >= y2 {
            return None;
        }

        let mut sums = [0u64; 3];
        for y in y1..y2 {
            let row = (y as usize * self.width as usize + x1 as usize) * 3;
            let row_end = row + (x2 - x1) as usize * 3;
            for px in self.data[row..row_end].chunks_exact(3) {
                sums[0] += u64::from(px[0]);
                sums[1] += u64::from(px[1]);
                sums[2] += u64::from(px[2]);
            }
        }

        let count = u64::from(x2 - x1) * u64::from(y2 - y1);
        Some([
            sums[0] as f64 / count as f64,
            sums[1] as f64 / count as f64,
            sums[2] as f64 / count as f64,
        ])
    }

    /// Pack the image into 0RGB u32 words for display
    pub fn to_display_buffer(&self) -> Vec<u32> {
        self.data
            .chunks_exact(3)
            .map(|px| (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]))
            .collect()
    }
}
