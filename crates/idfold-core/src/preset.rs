//! UUID compaction presets.
//!
//! A UUID is 128 bits = 16 bytes = 32 hex characters once the `-` separators are
//! removed. The presets fold it with [`fold_hex`] into 16 or 8 hex characters.

use std::str::FromStr;

use uuid::Uuid;

use crate::error::{FoldError, Result};
use crate::fold::{fold_hex, xor_blocks};

/// Hex length of a UUID with separators removed.
pub const UUID_HEX_LEN: usize = 32;

/// Output width of a UUID preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UuidWidth {
    /// 16 hex characters: two 8-byte halves XORed together.
    #[default]
    Hex16,
    /// 8 hex characters: four 4-byte quarters XORed together.
    ///
    /// Collisions become likely at volume; check before relying on uniqueness.
    Hex8,
}

impl UuidWidth {
    pub const fn hex_len(self) -> usize {
        match self {
            UuidWidth::Hex16 => 16,
            UuidWidth::Hex8 => 8,
        }
    }
}

impl std::fmt::Display for UuidWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex_len())
    }
}

impl FromStr for UuidWidth {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "16" => Ok(UuidWidth::Hex16),
            "8" => Ok(UuidWidth::Hex8),
            other => Err(format!("unsupported uuid width {other:?} (expected 16 or 8)")),
        }
    }
}

/// Remove every `-` and require exactly 32 remaining characters.
///
/// Hex validity is not checked here; [`fold_hex`] reports bad characters.
pub fn normalize_uuid(uuid: &str) -> Result<String> {
    let normalized: String = uuid.chars().filter(|&c| c != '-').collect();
    if normalized.len() != UUID_HEX_LEN {
        return Err(FoldError::InvalidUuid {
            len: normalized.len(),
        });
    }
    Ok(normalized)
}

/// Compact a textual UUID to `width` hex characters.
pub fn compact(uuid: &str, width: UuidWidth) -> Result<String> {
    let normalized = normalize_uuid(uuid)?;
    fold_hex(&normalized, width.hex_len())
}

/// Compact a UUID to 16 hex characters.
pub fn compact16(uuid: &str) -> Result<String> {
    compact(uuid, UuidWidth::Hex16)
}

/// Compact a UUID to 8 hex characters.
pub fn compact8(uuid: &str) -> Result<String> {
    compact(uuid, UuidWidth::Hex8)
}

/// Compact an already parsed UUID.
pub fn compact_uuid(uuid: &Uuid, width: UuidWidth) -> String {
    hex::encode(xor_blocks(uuid.as_bytes(), width.hex_len() / 2))
}

/// Mint a fresh short identifier from a random (v4) UUID.
pub fn short_id(width: UuidWidth) -> String {
    compact_uuid(&Uuid::new_v4(), width)
}
