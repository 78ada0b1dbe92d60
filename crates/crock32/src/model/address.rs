//! Tagged address payloads and their text form.
//!
//! Addresses are a closed set of mutually exclusive payload shapes keyed by
//! a one-byte discriminant. The text form is the tag byte followed by the
//! payload, run through the Base32 codec, so a typed-in address inherits the
//! codec's transcription tolerance.

use crate::codec::{decode_into, decoded_len, encode};
use crate::error::ParseError;

/// Discriminant for address payload shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PayloadKind {
    PublicKey = 1,
    ScriptHash = 2,
}

impl PayloadKind {
    /// Creates a `PayloadKind` from its wire tag.
    #[must_use]
    pub fn from_u8(v: u8) -> Option<PayloadKind> {
        match v {
            1 => Some(PayloadKind::PublicKey),
            2 => Some(PayloadKind::ScriptHash),
            _ => None,
        }
    }

    /// Returns the payload length in bytes for this kind.
    #[must_use]
    pub fn payload_len(self) -> usize {
        match self {
            PayloadKind::PublicKey => 32,
            PayloadKind::ScriptHash => 20,
        }
    }
}

/// An address: one payload shape from the closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    /// A raw 32-byte public key.
    PublicKey { key: [u8; 32] },
    /// A 20-byte script hash.
    ScriptHash { hash: [u8; 20] },
}

impl Address {
    /// Returns the discriminant of this address.
    #[must_use]
    pub fn kind(&self) -> PayloadKind {
        match self {
            Address::PublicKey { .. } => PayloadKind::PublicKey,
            Address::ScriptHash { .. } => PayloadKind::ScriptHash,
        }
    }

    /// Formats the address as its canonical text form.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut bytes = Vec::with_capacity(1 + self.kind().payload_len());
        bytes.push(self.kind() as u8);
        match self {
            Address::PublicKey { key } => bytes.extend_from_slice(key),
            Address::ScriptHash { hash } => bytes.extend_from_slice(hash),
        }
        encode(&bytes)
    }

    /// Parses an address from its text form.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Encoding`] on an invalid character,
    /// [`ParseError::Empty`] if the text decodes to no bytes,
    /// [`ParseError::UnknownTag`] on an unrecognized discriminant, and
    /// [`ParseError::UnexpectedLength`] if the payload length does not
    /// match the tagged kind.
    pub fn from_text(text: &str) -> Result<Address, ParseError> {
        let mut bytes = Vec::with_capacity(decoded_len(text.len()));
        decode_into(text, &mut bytes)?;

        let (&tag, payload) = bytes.split_first().ok_or(ParseError::Empty)?;
        let kind = PayloadKind::from_u8(tag).ok_or(ParseError::UnknownTag { tag })?;
        if payload.len() != kind.payload_len() {
            return Err(ParseError::UnexpectedLength {
                context: "address",
                expected: kind.payload_len(),
                found: payload.len(),
            });
        }

        Ok(match kind {
            PayloadKind::PublicKey => {
                let mut key = [0u8; 32];
                key.copy_from_slice(payload);
                Address::PublicKey { key }
            }
            PayloadKind::ScriptHash => {
                let mut hash = [0u8; 20];
                hash.copy_from_slice(payload);
                Address::ScriptHash { hash }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trip() {
        let addresses = [
            Address::PublicKey { key: [0x42; 32] },
            Address::PublicKey { key: [0x00; 32] },
            Address::ScriptHash { hash: [0xAB; 20] },
        ];
        for address in addresses {
            let text = address.to_text();
            assert_eq!(Address::from_text(&text).unwrap(), address, "failed for {text}");
        }
    }

    #[test]
    fn parse_tolerates_case() {
        let address = Address::ScriptHash { hash: [0x5C; 20] };
        let text = address.to_text().to_ascii_lowercase();
        assert_eq!(Address::from_text(&text).unwrap(), address);
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            Address::PublicKey { key: [0; 32] }.kind(),
            PayloadKind::PublicKey
        );
        assert_eq!(
            Address::ScriptHash { hash: [0; 20] }.kind(),
            PayloadKind::ScriptHash
        );
    }

    #[test]
    fn payload_kind_from_u8() {
        assert_eq!(PayloadKind::from_u8(1), Some(PayloadKind::PublicKey));
        assert_eq!(PayloadKind::from_u8(2), Some(PayloadKind::ScriptHash));
        assert_eq!(PayloadKind::from_u8(0), None);
        assert_eq!(PayloadKind::from_u8(3), None);
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        let text = crate::codec::encode(&[0xEE, 0x01, 0x02]);
        assert!(matches!(
            Address::from_text(&text).unwrap_err(),
            ParseError::UnknownTag { tag: 0xEE }
        ));
    }

    #[test]
    fn parse_rejects_wrong_payload_length() {
        let text = crate::codec::encode(&[0x02, 0x01, 0x02, 0x03]);
        assert!(matches!(
            Address::from_text(&text).unwrap_err(),
            ParseError::UnexpectedLength {
                context: "address",
                expected: 20,
                found: 3
            }
        ));
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(matches!(
            Address::from_text("").unwrap_err(),
            ParseError::Empty
        ));
    }

    #[test]
    fn parse_rejects_invalid_character() {
        assert!(matches!(
            Address::from_text("9@").unwrap_err(),
            ParseError::Encoding(_)
        ));
    }
}
