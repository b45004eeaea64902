//! Version constants carried in serialized reports.

/// Fold algorithm version.
///
/// Bump only if the byte layout of folded output changes; every published
/// vector is pinned to `1`.
pub const FOLD_ALGORITHM_V: u8 = 1;

/// Batch report wire format version (the `v` field).
pub const REPORT_V: u8 = 1;
