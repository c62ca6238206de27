//! Color conversion and normalization module
//!
//! This module turns raw per-channel RGB means into the representations
//! stored in the color database: hex codes and one-decimal CIELAB triples.

pub mod conversion;
pub mod normalize;

pub use conversion::{hex_code, DeviceLabTransform, SrgbLabTransform};
pub use normalize::{ColorNormalizer, NormalizedColor};
