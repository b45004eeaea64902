use serde::{Deserialize, Serialize};

use idfold_core::error::{FoldError, FoldErrorCode};
use idfold_core::fold::fold_hex;
use idfold_core::preset::{compact, UuidWidth};

use crate::version::{FOLD_ALGORITHM_V, REPORT_V};

/// What to do with each input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldSpec {
    /// Treat the line as a UUID and apply a preset.
    Uuid(UuidWidth),
    /// Treat the line as raw hex and fold it to this many hex characters.
    Hex(usize),
}

impl FoldSpec {
    pub fn apply(&self, input: &str) -> Result<String, FoldError> {
        match *self {
            FoldSpec::Uuid(width) => compact(input, width),
            FoldSpec::Hex(len) => fold_hex(input, len),
        }
    }

    /// Short label used in reports, e.g. `uuid16` or `fold12`.
    pub fn label(&self) -> String {
        match self {
            FoldSpec::Uuid(width) => format!("uuid{}", width.hex_len()),
            FoldSpec::Hex(len) => format!("fold{len}"),
        }
    }
}

/// Machine-readable failure attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordError {
    pub code: FoldErrorCode,
    pub message: String,
}

impl From<&FoldError> for RecordError {
    fn from(e: &FoldError) -> Self {
        Self {
            code: e.code(),
            message: e.to_string(),
        }
    }
}

/// Outcome for one input. Exactly one of `output` / `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactionRecord {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RecordError>,
}

impl CompactionRecord {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Compact a single input, capturing failure in the record.
pub fn compact_one(input: &str, spec: FoldSpec) -> CompactionRecord {
    match spec.apply(input) {
        Ok(output) => CompactionRecord {
            input: input.to_string(),
            output: Some(output),
            error: None,
        },
        Err(e) => CompactionRecord {
            input: input.to_string(),
            output: None,
            error: Some(RecordError::from(&e)),
        },
    }
}

/// Compact every non-blank line of `text`, in order.
///
/// Lines are trimmed; blank lines are skipped. A failing line never aborts the
/// batch.
pub fn compact_lines(text: &str, spec: FoldSpec) -> Vec<CompactionRecord> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| compact_one(l, spec))
        .collect()
}

/// Serializable envelope for a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub v: u8,
    /// Fold algorithm version.
    pub alg: u8,
    pub mode: String,
    pub failed: usize,
    pub records: Vec<CompactionRecord>,
}

impl BatchReport {
    pub fn new(spec: FoldSpec, records: Vec<CompactionRecord>) -> Self {
        let failed = records.iter().filter(|r| !r.is_ok()).count();
        Self {
            v: REPORT_V,
            alg: FOLD_ALGORITHM_V,
            mode: spec.label(),
            failed,
            records,
        }
    }
}
