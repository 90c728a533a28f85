//! # midiwire - MIDI message codec and port selection
//!
//! ## Architecture
//!
//! midiwire is an umbrella crate that coordinates:
//! - **midiwire-msg** - Message table, encoder, decoder, JSON message specs
//! - **midiwire-ports** - Fuzzy attribute matching over enumerated MIDI ports
//!
//! Transport, device enumeration and scheduling are left to the caller: the
//! codec turns one message spec into bytes (or back), the matcher turns one
//! query into a predicate.
//!
//! ## Quick Start
//!
//! ```
//! use midiwire::prelude::*;
//!
//! let bytes = encode(&MessageSpec::control(2, 74, 116))?;
//! assert_eq!(bytes, [0xB2, 0x4A, 0x74]);
//! assert_eq!(decode(&[0x90, 0x3C, 0x00])?, MessageSpec::note_off(0, 60, 0));
//!
//! let listing = PortListing::new(
//!     vec![PortDescriptor::new().with("manufacturer", "KORG INC.").with("name", "SLIDER/KNOB")],
//!     vec![],
//! );
//! let port = listing.find_first(PortType::Input, &PortQuery::new().with("manufacturer", "korg"))?;
//! assert_eq!(port.name(), Some("SLIDER/KNOB"));
//! # Ok::<(), midiwire::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - `json`
//! - `json` - Loosely typed message specs checked against the message table

/// Re-export of midiwire-msg for direct access
pub use midiwire_msg as msg;
/// Re-export of midiwire-ports for direct access
pub use midiwire_ports as ports;

pub use midiwire_msg::{
    decode, decode_prefix, encode, encode_into, FieldError, MessageDef, MessageKind, MessageSpec,
    MESSAGE_TABLE,
};
#[cfg(feature = "json")]
pub use midiwire_msg::{decode_json, encode_json};

pub use midiwire_ports::{
    build_matcher, find_ports, PortDescriptor, PortListing, PortMatcher, PortQuery, PortType,
    WILDCARD,
};

pub mod error;
pub use error::{Error, Result};

pub mod prelude {
    pub use crate::{
        build_matcher, decode, encode, Error, MessageKind, MessageSpec, PortDescriptor,
        PortListing, PortQuery, PortType, Result,
    };
}
