//! The Crockford Base32 codec: pure transforms between bytes and symbols.
//!
//! Both directions are single-shot, in-memory, and allocation-transient:
//! each call owns its own bit accumulator and output buffer, so the codec
//! is safe to use from any number of threads without locking.

pub mod alphabet;
pub mod decode;
pub mod encode;

pub use alphabet::ALPHABET;
pub use decode::{decode, decode_into, decoded_len};
pub use encode::{encode, encoded_len};
