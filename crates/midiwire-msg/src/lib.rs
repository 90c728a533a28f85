//! MIDI 1.0 message codec.
//!
//! Converts between structured message specs and wire-exact bytes. Encoder and
//! decoder share one static message table, so every message type is handled in
//! both directions.
//!
//! # Features
//!
//! - **Message table**: status bytes, payload layouts and field widths
//! - **Encoder**: validated, all-or-nothing serialization
//! - **Decoder**: one message per call, zero-velocity note-on normalized to note-off
//! - **JSON message specs**: loosely typed objects checked against the table (feature: `json`)
//!
//! # Example
//!
//! ```
//! use midiwire_msg::{decode, encode, MessageSpec};
//!
//! let bytes = encode(&MessageSpec::pitchbend(1, 5888))?;
//! assert_eq!(bytes, [0xE1, 0x00, 0x2E]);
//! assert_eq!(decode(&bytes)?, MessageSpec::pitchbend(1, 5888));
//! # Ok::<(), midiwire_msg::Error>(())
//! ```

pub mod error;
pub use error::{Error, FieldError, Result};

pub mod table;
pub use table::{MessageDef, MessageKind, MESSAGE_TABLE};

mod spec;
pub use spec::{FieldValues, MessageSpec};

mod decode;
mod encode;
pub use decode::{decode, decode_prefix};
pub use encode::{encode, encode_into};

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "json")]
pub use json::{decode_json, encode_json};

pub(crate) mod utils;
pub use utils::{join_14bit, split_14bit};
