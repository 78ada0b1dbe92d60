//! Symbol-to-byte decoding.

use crate::codec::alphabet::symbol_value;
use crate::error::DecodeError;

/// Returns the length in bytes of the decode output for `symbol_count`
/// input symbols: `symbol_count * 5 / 8` (truncating).
///
/// Exact for every string `encode` produces; used for buffer pre-sizing.
#[inline]
#[must_use]
pub fn decoded_len(symbol_count: usize) -> usize {
    symbol_count * 5 / 8
}

/// Decodes a Crockford Base32 string into a new byte buffer.
///
/// Decoding is permissive where encoding is canonical: either case is
/// accepted, as are the common transcription substitutes (`O` for `0`,
/// `I`/`L` for `1`, `U` for `V`). The empty string decodes to an empty
/// buffer.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidCharacter`] if any character, after
/// normalization, is not one of the 32 symbols.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(decoded_len(text.len()));
    decode_into(text, &mut out)?;
    Ok(out)
}

/// Decodes a Crockford Base32 string, appending bytes to `out`.
///
/// Same semantics as [`decode`], for callers reusing a buffer. On error
/// `out` may hold bytes decoded before the invalid character.
///
/// Trailing bits that do not fill a whole byte are shifted into a full
/// byte and emitted only if non-zero; an all-zero tail is treated as the
/// encoder's padding and dropped. Strings produced by `encode` always
/// round-trip; a foreign string whose implied final byte is genuinely
/// `0x00` loses that byte.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidCharacter`] if any character, after
/// normalization, is not one of the 32 symbols.
pub fn decode_into(text: &str, out: &mut Vec<u8>) -> Result<(), DecodeError> {
    // At most 7 carried bits plus one 5-bit symbol, so 12 bits peak.
    let mut bit_buf: u16 = 0;
    let mut num_bits: u32 = 0;

    for (position, character) in text.chars().enumerate() {
        let value = symbol_value(character)
            .ok_or(DecodeError::InvalidCharacter { character, position })?;
        bit_buf = (bit_buf << 5) | u16::from(value);
        num_bits += 5;
        if num_bits >= 8 {
            out.push((bit_buf >> (num_bits - 8)) as u8);
            num_bits -= 8;
            bit_buf &= (1 << num_bits) - 1;
        }
    }

    if num_bits > 0 {
        let tail = ((bit_buf << (8 - num_bits)) & 0xFF) as u8;
        if tail != 0 {
            out.push(tail);
        }
    }

    Ok(())
}
