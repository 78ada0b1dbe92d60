//! Error types for decoding and value-type parsing.

use thiserror::Error;

/// Error during Base32 decoding.
///
/// Decoding has exactly one failure mode: a character that is not a valid
/// symbol even after case folding and ambiguous-letter substitution.
/// Encoding is total and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid character {character:?} at symbol {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// Error during parsing of a text-formatted value type (key id, address).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Encoding(#[from] DecodeError),

    #[error("{context} payload is {found} bytes, expected {expected}")]
    UnexpectedLength {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("unknown payload tag: {tag}")]
    UnknownTag { tag: u8 },

    #[error("empty payload")]
    Empty,
}
