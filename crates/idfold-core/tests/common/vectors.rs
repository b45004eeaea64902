#![allow(dead_code)]

pub const UUID: &str = "91837cf5-ac35-4b6c-a67a-0845eabb3091";
/// Same 16 bytes as `UUID` with the two 8-byte halves swapped.
pub const UUID_HALVES_SWAPPED: &str = "a67a0845-eabb-3091-9183-7cf5ac354b6c";
/// Halves swapped and the low bit of bytes 7 and 15 flipped together.
pub const UUID_HALVES_SWAPPED_BIT_FLIP: &str = "a67a0845-eabb-3090-9183-7cf5ac354b6d";
/// 33 hex characters after stripping separators.
pub const UUID_TOO_LONG: &str = "91837cf5-ac35-4b6c-a67a-0845eabb30911";

pub const HEX24: &str = "5f28eb526ffc3d5051ad2fd5";
