//! The 32-symbol alphabet and per-character value lookup.
//!
//! Symbols are the digits `0`-`9` followed by the uppercase letters with
//! `I`, `L`, `O`, `U` removed. A symbol's position in the table is its
//! 5-bit value (0-31).

use lazy_static::lazy_static;

/// The encoding alphabet, indexed by 5-bit symbol value.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// The letters excluded from the alphabet because they are easily confused
/// with other characters when handwritten or read aloud.
const SKIPPED: [u8; 4] = [b'I', b'L', b'O', b'U'];

/// Normalizes a character before value lookup.
///
/// Accepts the transcription mistakes the alphabet was designed around:
/// either case, `O` for `0`, `I`/`L` for `1`, and `U` for `V`.
pub(crate) fn normalize(c: char) -> char {
    match c {
        'O' | 'o' => '0',
        'I' | 'i' | 'L' | 'l' => '1',
        'U' | 'u' => 'V',
        other => other.to_ascii_uppercase(),
    }
}

/// Computes the 5-bit value of a normalized character.
///
/// Digits map directly; an uppercase letter maps to the index it would have
/// had in the full table, reconstructed by subtracting the number of skipped
/// letters alphabetically below it.
fn value_of(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'A'..='Z' => {
            let b = c as u8;
            if SKIPPED.contains(&b) {
                return None;
            }
            let skipped_below = SKIPPED.iter().filter(|&&s| s < b).count() as u8;
            Some(b - b'A' + 10 - skipped_below)
        }
        _ => None,
    }
}

lazy_static! {
    /// Byte-indexed decode table: normalized symbol value, or -1 for
    /// characters outside the alphabet and its recognized substitutions.
    static ref DECODE_TABLE: [i8; 256] = {
        let mut table = [-1i8; 256];
        for b in 0u8..=127 {
            if let Some(value) = value_of(normalize(b as char)) {
                table[b as usize] = value as i8;
            }
        }
        table
    };
}

/// Returns the 5-bit value of a character after normalization, or `None`
/// if it is not a valid symbol.
#[inline]
pub(crate) fn symbol_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    let value = DECODE_TABLE[c as usize];
    if value < 0 { None } else { Some(value as u8) }
}
