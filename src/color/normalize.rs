//! Normalization of sampled colors into database form
//!
//! Raw samples arrive as real-valued per-channel RGB means. The normalizer
//! turns one mean into the pair of representations the database stores:
//!
//! - an uppercase hex code, from truncated 8-bit channels
//! - a CIELAB triple rounded to one decimal, with L in [0, 100] and
//!   signed a/b axes
//!
//! Channel means are truncated (not rounded) to integers first, so hex and
//! Lab always describe the same 8-bit color.

use crate::color::conversion::{hex_code, DeviceLabTransform, SrgbLabTransform};
use crate::constants::lab::{AB_OFFSET, L_SCALE};

/// A sampled color in every representation the database needs
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedColor {
    /// Truncated 8-bit channels the other fields are derived from
    pub rgb: [u8; 3],
    /// Uppercase hex code, e.g. "#1A8F3C"
    pub hex: String,
    /// CIELAB as [L, a, b], rounded to one decimal
    pub lab: [f32; 3],
}

/// Converts raw channel means into [`NormalizedColor`] values
///
/// Generic over the [`DeviceLabTransform`] so callers can substitute a
/// different color model; the truncation and rescaling around the
/// transform stay fixed.
pub struct ColorNormalizer<T: DeviceLabTransform = SrgbLabTransform> {
    transform: T,
}

impl ColorNormalizer<SrgbLabTransform> {
    /// Create a normalizer backed by the default sRGB transform
    pub fn new() -> Self {
        Self {
            transform: SrgbLabTransform::new(),
        }
    }
}

impl Default for ColorNormalizer<SrgbLabTransform> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeviceLabTransform> ColorNormalizer<T> {
    /// Create a normalizer backed by a specific Lab transform
    pub fn with_transform(transform: T) -> Self {
        Self { transform }
    }

    /// Normalize one per-channel RGB mean
    ///
    /// # Arguments
    ///
    /// * `mean_rgb` - Per-channel means in range [0, 255]
    ///
    /// # Returns
    ///
    /// The truncated RGB triple together with its hex code and rescaled
    /// Lab coordinates
    pub fn normalize(&self, mean_rgb: [f64; 3]) -> NormalizedColor {
        // Truncation toward zero, matching integer conversion of the means
        let rgb = [mean_rgb[0] as u8, mean_rgb[1] as u8, mean_rgb[2] as u8];
        let hex = hex_code(rgb);

        let [l8, a8, b8] = self.transform.device_rgb_to_lab(rgb);
        let lab = [
            round_tenth(l8 * L_SCALE),
            round_tenth(a8 - AB_OFFSET),
            round_tenth(b8 - AB_OFFSET),
        ];

        NormalizedColor { rgb, hex, lab }
    }
}

/// Round to one decimal place
fn round_tenth(v: f32) -> f32 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pure_red() {
        let normalizer = ColorNormalizer::new();
        let color = normalizer.normalize([255.0, 0.0, 0.0]);

        assert_eq!(color.rgb, [255, 0, 0]);
        assert_eq!(color.hex, "#FF0000");
        // sRGB red in CIELAB: L* ~53.2, a* ~80.1, b* ~67.2
        assert!((color.lab[0] - 53.2).abs() < 0.3);
        assert!((color.lab[1] - 80.1).abs() < 0.3);
        assert!((color.lab[2] - 67.2).abs() < 0.3);
    }

    #[test]
    fn test_means_are_truncated_not_rounded() {
        let normalizer = ColorNormalizer::new();
        let color = normalizer.normalize([254.9, 0.4, 128.999]);

        assert_eq!(color.rgb, [254, 0, 128]);
        assert_eq!(color.hex, "#FE0080");
    }

    #[test]
    fn test_lab_has_one_decimal() {
        let normalizer = ColorNormalizer::new();
        for mean in [[13.0, 200.0, 77.0], [250.0, 250.0, 3.0], [90.5, 90.5, 90.5]] {
            let color = normalizer.normalize(mean);
            for v in color.lab {
                let tenths = v * 10.0;
                assert!(
                    (tenths - tenths.round()).abs() < 1e-3,
                    "{} is not a one-decimal value",
                    v
                );
            }
        }
    }

    #[test]
    fn test_rescaling_around_custom_transform() {
        struct FixedTransform;
        impl DeviceLabTransform for FixedTransform {
            fn device_rgb_to_lab(&self, _rgb: [u8; 3]) -> [f32; 3] {
                // 8-bit encoding of L* = 50, a* = 2, b* = -2
                [127.5, 130.0, 126.0]
            }
        }

        let normalizer = ColorNormalizer::with_transform(FixedTransform);
        let color = normalizer.normalize([10.0, 10.0, 10.0]);

        assert_eq!(color.lab, [50.0, 2.0, -2.0]);
    }

    #[test]
    fn test_white_normalizes_to_neutral() {
        let normalizer = ColorNormalizer::new();
        let color = normalizer.normalize([255.0, 255.0, 255.0]);

        assert_eq!(color.hex, "#FFFFFF");
        assert!((color.lab[0] - 100.0).abs() < 0.5);
        assert!(color.lab[1].abs() < 0.5);
        assert!(color.lab[2].abs() < 0.5);
    }
}
