use crate::error::{FoldError, Result};

/// XOR-fold `input` (hex) down to `output_hex_len` hex characters.
///
/// The decoded bytes are split into `len / output_hex_len` consecutive blocks of
/// `output_hex_len / 2` bytes each, and the blocks are XORed together byte-wise:
///
/// `out[i] = b[i] ^ b[i + n] ^ b[i + 2n] ^ ...`
///
/// Rules:
/// - both lengths must be even
/// - `output_hex_len` must divide the input length and be strictly shorter
///   (at least two blocks are folded)
/// - the result is lowercase hex, exactly `output_hex_len` characters
///
/// Folding is linear and not invertible: distinct inputs collide, more often the
/// shorter the output. Do not use it where collision resistance matters.
pub fn fold_hex(input: &str, output_hex_len: usize) -> Result<String> {
    let input_len = input.len();

    if input_len % 2 != 0 || output_hex_len % 2 != 0 {
        return Err(FoldError::InvalidLength {
            input_len,
            output_len: output_hex_len,
        });
    }

    // `output_hex_len == 1` is already rejected by the parity check above.
    if output_hex_len == 0
        || output_hex_len == 1
        || output_hex_len == input_len
        || input_len % output_hex_len != 0
        || input_len / output_hex_len < 2
    {
        return Err(FoldError::NotADivisor {
            input_len,
            output_len: output_hex_len,
        });
    }

    let bytes = decode(input)?;
    Ok(hex::encode(xor_blocks(&bytes, output_hex_len / 2)))
}

/// Byte-level counterpart of [`fold_hex`]: fold `bytes` into `output_len` bytes.
///
/// Errors report lengths in bytes.
pub fn fold_bytes(bytes: &[u8], output_len: usize) -> Result<Vec<u8>> {
    let input_len = bytes.len();
    if output_len == 0 || input_len % output_len != 0 || input_len / output_len < 2 {
        return Err(FoldError::NotADivisor {
            input_len,
            output_len,
        });
    }
    Ok(xor_blocks(bytes, output_len))
}

/// Caller guarantees `n > 0` and `n` divides `bytes.len()`.
pub(crate) fn xor_blocks(bytes: &[u8], n: usize) -> Vec<u8> {
    let mut out = vec![0u8; n];
    for block in bytes.chunks_exact(n) {
        for (acc, b) in out.iter_mut().zip(block) {
            *acc ^= b;
        }
    }
    out
}

fn decode(input: &str) -> Result<Vec<u8>> {
    hex::decode(input).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => FoldError::InvalidHex { ch: c, index },
        // Parity is checked by the caller before decoding.
        _ => FoldError::InvalidLength {
            input_len: input.len(),
            output_len: 0,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_blocks_single_block_is_identity() {
        assert_eq!(xor_blocks(&[0xab, 0xcd], 2), vec![0xab, 0xcd]);
    }

    #[test]
    fn uppercase_input_folds_to_lowercase_output() {
        assert_eq!(fold_hex("5F28EB526FFC3D5051AD2FD5", 12).unwrap(), "6278baff4029");
    }

    #[test]
    fn empty_input_is_not_foldable() {
        assert_eq!(
            fold_hex("", 2),
            Err(FoldError::NotADivisor { input_len: 0, output_len: 2 })
        );
    }
}
