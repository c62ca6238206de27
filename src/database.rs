//! Color database assembly and JSON output
//!
//! Takes the ordered samples from either sampler, normalizes each one, and
//! attaches identifier codes according to a [`CodePolicy`]. The result is a
//! flat array of [`ColorRecord`] values whose field names match the
//! downstream database importer, written as tab-indented JSON.
//!
//! Codes are labels, not keys: duplicates pass through verbatim and nothing
//! here deduplicates or reorders records.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::color::{ColorNormalizer, DeviceLabTransform};
use crate::error::{ExtractionError, Result};
use crate::sampling::RawSample;

/// One entry of the color database, shaped for the downstream importer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    /// Identifier code; uniqueness is the caller's business
    pub code: String,
    /// Placeholder name, "Color <code>", meant to be edited by hand
    pub name: String,
    /// Uppercase hex, "#RRGGBB"
    pub hex: String,
    /// CIELAB lightness in [0, 100], one decimal
    pub lab_l: f32,
    /// CIELAB a axis, one decimal
    pub lab_a: f32,
    /// CIELAB b axis, one decimal
    pub lab_b: f32,
}

/// How records get their identifier codes
///
/// Resolution per sample index, first rule that applies wins:
///
/// 1. `codes[index]` verbatim, when provided and long enough
/// 2. `start_code + index`, stringified, when `start_code` is set
/// 3. the index itself, stringified
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodePolicy {
    /// Base for sequential numbering
    pub start_code: Option<i64>,
    /// Explicit per-sample codes, used as-is
    pub codes: Option<Vec<String>>,
}

impl CodePolicy {
    /// Sequential numbering from `start`
    pub fn sequential(start: i64) -> Self {
        Self {
            start_code: Some(start),
            ..Self::default()
        }
    }

    /// Explicit code list, falling back to numbering from `start` when the
    /// list runs out
    pub fn explicit(codes: Vec<String>, start: i64) -> Self {
        Self {
            start_code: Some(start),
            codes: Some(codes),
        }
    }

    fn code_for(&self, index: usize) -> String {
        if let Some(code) = self.codes.as_ref().and_then(|codes| codes.get(index)) {
            return code.clone();
        }
        match self.start_code {
            Some(start) => (start + index as i64).to_string(),
            None => index.to_string(),
        }
    }

    fn mismatch_against(&self, sample_count: usize) -> Option<CodeCountMismatch> {
        let provided = self.codes.as_ref()?.len();
        (provided != sample_count).then_some(CodeCountMismatch {
            provided,
            expected: sample_count,
        })
    }
}

/// Non-fatal disagreement between the explicit code list and the sample count
///
/// Assembly still succeeds; out-of-range indices fall back to sequential
/// numbering and surplus codes go unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeCountMismatch {
    /// Codes the caller supplied
    pub provided: usize,
    /// Samples that needed one
    pub expected: usize,
}

/// The assembled database plus any non-fatal conditions met on the way
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledDatabase {
    records: Vec<ColorRecord>,
    code_count_mismatch: Option<CodeCountMismatch>,
}

impl AssembledDatabase {
    /// Records in sample order
    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    /// Consume the database, keeping only the records
    pub fn into_records(self) -> Vec<ColorRecord> {
        self.records
    }

    /// The code-count warning raised during assembly, if any
    pub fn code_count_mismatch(&self) -> Option<CodeCountMismatch> {
        self.code_count_mismatch
    }
}

/// Normalize `samples` and attach codes per `policy`, preserving order
///
/// A code list whose length disagrees with the sample count is reported via
/// [`AssembledDatabase::code_count_mismatch`] and a warning, never an error.
pub fn assemble<T: DeviceLabTransform>(
    samples: &[RawSample],
    normalizer: &ColorNormalizer<T>,
    policy: &CodePolicy,
) -> AssembledDatabase {
    let code_count_mismatch = policy.mismatch_against(samples.len());
    if let Some(mismatch) = code_count_mismatch {
        warn!(
            "Code count mismatch: {} codes provided for {} colors; missing codes fall back to sequential numbering",
            mismatch.provided, mismatch.expected
        );
    }

    let records = samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let color = normalizer.normalize(sample.channels());
            let code = policy.code_for(index);
            ColorRecord {
                name: format!("Color {}", code),
                code,
                hex: color.hex,
                lab_l: color.lab[0],
                lab_a: color.lab[1],
                lab_b: color.lab[2],
            }
        })
        .collect();

    AssembledDatabase {
        records,
        code_count_mismatch,
    }
}

/// Write records as a tab-indented JSON array
///
/// The document is fully serialized in memory first, so a failed write
/// never leaves a truncated database behind an existing path.
///
/// # Errors
///
/// Returns [`ExtractionError::Serialization`] when encoding fails or the
/// file cannot be written.
pub fn write_database(records: &[ColorRecord], path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .map_err(|e| ExtractionError::serialization("Failed to encode color records", e))?;

    std::fs::write(path, &buf).map_err(|e| {
        ExtractionError::serialization(format!("Failed to write {}", path.display()), e)
    })?;

    info!("Wrote {} colors to {}", records.len(), path.display());
    Ok(())
}
