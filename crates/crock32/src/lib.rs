//! Crockford-variant Base32 codec for human-transcribable identifiers.
//!
//! This crate turns arbitrary binary data (keys, hashes, identifiers) into
//! compact, case-insensitive strings and back. The alphabet deliberately
//! omits the visually ambiguous letters `I`, `L`, `O`, `U`, and the decoder
//! tolerates the mistakes people actually make when transcribing codes:
//! either case, `O` for `0`, `I`/`L` for `1`, `U` for `V`.
//!
//! # Quick Start
//!
//! ```rust
//! use crock32::{encode, decode};
//!
//! let text = encode(b"Hello, World");
//! assert_eq!(text, "91JPRV3F5GG5EVVJDHJ0");
//!
//! // Decoding is forgiving about case and ambiguous letters.
//! let bytes = decode("91jprv3f5gg5evvjdhjO").unwrap();
//! assert_eq!(bytes, b"Hello, World");
//! ```
//!
//! # Modules
//!
//! - [`codec`]: the pure transforms (`encode`, `decode`, `decode_into`)
//!   and size-prediction helpers
//! - [`model`]: value types built on the codec (key ids, deadlines,
//!   tagged addresses)
//! - [`error`]: error types
//!
//! # Guarantees
//!
//! - `decode(encode(b)) == b` for every byte sequence `b`.
//! - `encode` is total and deterministic; its output uses only the
//!   canonical uppercase alphabet and has length
//!   [`encoded_len`]`(b.len())` exactly.
//! - `decode` fails only on characters outside the alphabet and its
//!   recognized substitutions; many distinct strings decode to the same
//!   bytes, and `encode` always re-emits the canonical form.
//! - Both directions are pure and keep no state between calls, so the
//!   codec needs no synchronization.

pub mod codec;
pub mod error;
pub mod model;

// Re-export commonly used items at crate root
pub use codec::{decode, decode_into, decoded_len, encode, encoded_len, ALPHABET};
pub use error::{DecodeError, ParseError};
pub use model::{
    derived_key_id, format_key_id, parse_key_id, Address, Deadline, KeyId, PayloadKind,
    KEY_ID_SYMBOLS,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
