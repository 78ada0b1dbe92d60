//! Content-derived key identifiers.
//!
//! A key id is a truncated SHA-256 digest of arbitrary input bytes,
//! displayed to users as exactly 32 Base32 symbols (160 bits divides
//! evenly into 5-bit groups, so the text form carries no padding).

use sha2::{Digest, Sha256};

use crate::codec::{decode, encode};
use crate::error::ParseError;

/// A 20-byte content-derived identifier.
pub type KeyId = [u8; 20];

/// Number of symbols in the text form of a [`KeyId`].
pub const KEY_ID_SYMBOLS: usize = 32;

/// Derives a key id from input bytes: the first 20 bytes of SHA-256.
#[must_use]
pub fn derived_key_id(input: &[u8]) -> KeyId {
    let hash = Sha256::digest(input);
    let mut id = [0u8; 20];
    id.copy_from_slice(&hash[..20]);
    id
}

/// Formats a key id as its 32-symbol text form.
#[must_use]
pub fn format_key_id(id: &KeyId) -> String {
    encode(id)
}

/// Parses a key id from its text form.
///
/// Accepts anything the decoder accepts (case, ambiguous-letter
/// substitutions), but the decoded payload must be exactly 20 bytes.
///
/// # Errors
///
/// Returns [`ParseError::Encoding`] on an invalid character and
/// [`ParseError::UnexpectedLength`] on a payload that is not 20 bytes.
pub fn parse_key_id(text: &str) -> Result<KeyId, ParseError> {
    let bytes = decode(text)?;
    let found = bytes.len();
    let id: KeyId = bytes
        .try_into()
        .map_err(|_| ParseError::UnexpectedLength {
            context: "key id",
            expected: 20,
            found,
        })?;
    Ok(id)
}
