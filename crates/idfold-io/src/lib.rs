//! `idfold-io` is the single supported public entrypoint for deterministic
//! identifier compaction: XOR-folding hex strings (typically UUIDs) into
//! shorter hex strings.
//!
//! This crate intentionally contains **no** config, logging, or transport glue.
//! Those belong to callers. `idfold-io` focuses on:
//! - the fold and UUID presets
//! - stable error codes
//! - batch compaction into serializable records

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `idfold_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may change
// without notice.

// Re-export the engine.
#[doc(hidden)]
pub mod core {
    pub use idfold_core::error::{FoldError, FoldErrorCode};
    pub use idfold_core::fold::{fold_bytes, fold_hex};
    pub use idfold_core::preset::{
        compact, compact16, compact8, compact_uuid, normalize_uuid, short_id, UuidWidth,
        UUID_HEX_LEN,
    };
    pub use idfold_core::random::rand_letters;
}

/// Batch compaction over newline-separated input.
pub mod batch;

/// JSON serialization for batch reports.
pub mod json;

/// Version constants for report consumers.
pub mod version;

/// Convenience prelude for consumers.
///
/// This is the **only supported** import surface for external users.
pub mod prelude {
    pub use crate::batch::{BatchReport, CompactionRecord, FoldSpec, RecordError};
    pub use crate::core::{
        compact, compact16, compact8, compact_uuid, fold_bytes, fold_hex, rand_letters,
        short_id, FoldError, FoldErrorCode, UuidWidth,
    };
}
