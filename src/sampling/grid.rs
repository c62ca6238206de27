//! Automatic grid sampling
//!
//! Divides the card into a regular lattice and averages a small window at
//! the center of each cell, so that slight misalignment between the lattice
//! and the printed swatches does not bleed neighboring colors into a sample.
//!
//! ## Algorithm
//!
//! For an image of `width x height` and a grid of `rows x cols`:
//!
//! 1. `cell_width = width / cols`, `cell_height = height / rows`
//!    (integer division; remainder pixels at the right/bottom edges are
//!    never sampled)
//! 2. window half-width `s = min(cell_width, cell_height) / 4`
//! 3. per cell, row-major: center `(cx, cy)` by integer math, average the
//!    clipped window `[cx-s, cx+s) x [cy-s, cy+s)` per channel
//!
//! Cells too small to hold a window (under 4 px on a side, so `s`
//! truncates to 0) make the window empty; that fails the whole run rather
//! than emitting a partial or padded result.

use tracing::debug;

use crate::card::CardImage;
use crate::constants::grid::WINDOW_DIVISOR;
use crate::error::{ExtractionError, Result};
use crate::sampling::{RawSample, SamplePosition};

/// Samples one representative color per cell of a regular grid
///
/// Pure function of the image and the geometry; the sampler holds no
/// state between runs.
#[derive(Debug, Clone, Copy)]
pub struct GridSampler {
    rows: u32,
    cols: u32,
}

impl GridSampler {
    /// Create a sampler for a `rows x cols` lattice
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Sample every cell of the grid, row-major
    ///
    /// # Arguments
    ///
    /// * `image` - Card image to sample
    ///
    /// # Returns
    ///
    /// Exactly `rows * cols` samples in row-major order
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::InvalidGeometry`] when any cell's clipped
    /// window is empty: zero rows or columns, or cells narrower than the
    /// window divisor allows. The first offending cell is reported and no
    /// samples are returned.
    pub fn sample(&self, image: &CardImage) -> Result<Vec<RawSample>> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ExtractionError::InvalidGeometry {
                row: 0,
                col: 0,
                cell_width: 0,
                cell_height: 0,
            });
        }

        let cell_width = image.width() / self.cols;
        let cell_height = image.height() / self.rows;
        let half = cell_width.min(cell_height) / WINDOW_DIVISOR;

        debug!(
            "Sampling {}x{} grid over {}x{} image ({}x{} px cells, window half-width {})",
            self.rows,
            self.cols,
            image.width(),
            image.height(),
            cell_width,
            cell_height,
            half
        );

        let mut samples = Vec::with_capacity(self.rows as usize * self.cols as usize);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cx = col * cell_width + cell_width / 2;
                let cy = row * cell_height + cell_height / 2;
                let x1 = cx.saturating_sub(half);
                let y1 = cy.saturating_sub(half);
                let x2 = (cx + half).min(image.width());
                let y2 = (cy + half).min(image.height());

                let mean = image.mean_rgb(x1, y1, x2, y2).ok_or(
                    ExtractionError::InvalidGeometry {
                        row,
                        col,
                        cell_width,
                        cell_height,
                    },
                )?;

                samples.push(RawSample {
                    position: SamplePosition::Cell { row, col },
                    red: mean[0],
                    green: mean[1],
                    blue: mean[2],
                });
            }
        }

        Ok(samples)
    }
}
