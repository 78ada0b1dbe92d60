//! Value types built on the codec: identifiers, deadlines, addresses.

pub mod address;
pub mod deadline;
pub mod id;

pub use address::{Address, PayloadKind};
pub use deadline::Deadline;
pub use id::{derived_key_id, format_key_id, parse_key_id, KeyId, KEY_ID_SYMBOLS};
