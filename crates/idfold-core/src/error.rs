use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable, machine-readable codes for compaction failures.
///
/// These are intended for programmatic handling (batch records, CI), while the
/// `Display` form of [`FoldError`] stays human-oriented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoldErrorCode {
    InvalidHex,
    InvalidLength,
    NotADivisor,
    InvalidUuid,
}

impl FoldErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            FoldErrorCode::InvalidHex => "invalid_hex",
            FoldErrorCode::InvalidLength => "invalid_length",
            FoldErrorCode::NotADivisor => "not_a_divisor",
            FoldErrorCode::InvalidUuid => "invalid_uuid",
        }
    }
}

impl std::fmt::Display for FoldErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Why a compaction request was rejected.
///
/// Lengths are hex character counts for the string API and byte counts for
/// [`crate::fold::fold_bytes`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoldError {
    #[error("invalid hex character {ch:?} at index {index}")]
    InvalidHex { ch: char, index: usize },

    #[error("input/output must have an even number of characters (input {input_len}, output {output_len})")]
    InvalidLength { input_len: usize, output_len: usize },

    #[error("output length {output_len} must be a proper divisor of input length {input_len}")]
    NotADivisor { input_len: usize, output_len: usize },

    #[error("invalid uuid: expected 32 hex characters after removing '-', got {len}")]
    InvalidUuid { len: usize },
}

impl FoldError {
    pub fn code(&self) -> FoldErrorCode {
        match self {
            FoldError::InvalidHex { .. } => FoldErrorCode::InvalidHex,
            FoldError::InvalidLength { .. } => FoldErrorCode::InvalidLength,
            FoldError::NotADivisor { .. } => FoldErrorCode::NotADivisor,
            FoldError::InvalidUuid { .. } => FoldErrorCode::InvalidUuid,
        }
    }
}

pub type Result<T> = std::result::Result<T, FoldError>;
