//! Device RGB to CIELAB conversion
//!
//! The sampler output is device RGB. Conversion to Lab goes through the
//! [`DeviceLabTransform`] trait so the color model behind it can be swapped
//! (for example to a profiled transform) without touching the normalization
//! pipeline. The default implementation interprets device RGB as sRGB and
//! converts via `palette`.
//!
//! Transforms report Lab in the 8-bit encoding used by byte-per-channel Lab
//! images: L scaled to [0, 255], a and b offset by +128. The normalizer
//! rescales that encoding to conventional CIELAB ranges.

use palette::{FromColor, Lab, Srgb};

use crate::constants::lab::{AB_OFFSET, L_SCALE};

/// Conversion from device RGB to 8-bit-encoded Lab
///
/// Implementations must return `[l, a, b]` where `l` is L* scaled to
/// [0, 255] and `a`, `b` carry a +128 offset.
pub trait DeviceLabTransform {
    /// Convert one RGB triple (0-255 per channel) to 8-bit-encoded Lab
    fn device_rgb_to_lab(&self, rgb: [u8; 3]) -> [f32; 3];
}

/// Default transform: device RGB treated as sRGB under D65
#[derive(Debug, Clone, Copy)]
pub struct SrgbLabTransform;

impl SrgbLabTransform {
    /// Create the default sRGB transform
    pub fn new() -> Self {
        Self
    }
}

impl Default for SrgbLabTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceLabTransform for SrgbLabTransform {
    fn device_rgb_to_lab(&self, rgb: [u8; 3]) -> [f32; 3] {
        let srgb = Srgb::new(
            rgb[0] as f32 / 255.0,
            rgb[1] as f32 / 255.0,
            rgb[2] as f32 / 255.0,
        );
        let lab = Lab::from_color(srgb);
        [lab.l / L_SCALE, lab.a + AB_OFFSET, lab.b + AB_OFFSET]
    }
}

/// Format an RGB triple as an uppercase hex color string
///
/// # Arguments
///
/// * `rgb` - RGB values in range [0, 255]
///
/// # Returns
///
/// Hex color string (e.g., "#FF0000")
pub fn hex_code(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}
