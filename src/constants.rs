//! Named constants for sampling geometry and color normalization
//!
//! Collects the tunable values of the extraction pipeline in one place.
//! Grid geometry defaults live here but are always passed through
//! [`crate::config::GridConfig`] rather than read directly by the sampler,
//! so tests can cover arbitrary geometries.

/// Grid sampling defaults
pub mod grid {
    /// Default number of grid rows when the caller gives no geometry
    pub const DEFAULT_ROWS: u32 = 10;

    /// Default number of grid columns when the caller gives no geometry
    pub const DEFAULT_COLS: u32 = 10;

    /// Divisor applied to the smaller cell dimension to size the sampling
    /// window half-width (`s = min(cell_w, cell_h) / 4`)
    pub const WINDOW_DIVISOR: u32 = 4;
}

/// Interactive picker parameters
pub mod picker {
    /// Half-width in pixels of the square window averaged around a click
    pub const CLICK_HALF_WIDTH: u32 = 10;

    /// Radius in pixels of the marker drawn at each sampled point
    pub const MARKER_RADIUS: u32 = 5;

    /// Marker color as (r, g, b)
    pub const MARKER_RGB: (u8, u8, u8) = (0, 255, 0);

    /// Frame rate cap for the display poll loop
    pub const TARGET_FPS: usize = 60;
}

/// Rescaling of the colorspace collaborator's raw output
///
/// The conversion routine reports Lab in an 8-bit channel convention:
/// lightness scaled onto [0, 255] and both chroma axes offset by +128.
/// These constants map that convention back onto the perceptual-standard
/// ranges (L in [0, 100], a/b signed around 0).
pub mod lab {
    /// Multiplier taking raw lightness onto the [0, 100] scale
    pub const L_SCALE: f32 = 100.0 / 255.0;

    /// Offset subtracted from both raw chroma channels
    pub const AB_OFFSET: f32 = 128.0;
}
