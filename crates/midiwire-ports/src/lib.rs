//! MIDI port selection.
//!
//! Picks ports out of an already-enumerated device list by fuzzy attribute
//! matching. Enumeration itself (and any driver access) belongs to the caller.
//!
//! # Example
//!
//! ```
//! use midiwire_ports::{build_matcher, PortDescriptor, PortQuery};
//!
//! let port = PortDescriptor::new()
//!     .with("manufacturer", "KORG INC.")
//!     .with("name", "SLIDER/KNOB");
//!
//! assert!(build_matcher(&PortQuery::new().with("manufacturer", "korg")).matches(&port));
//! assert!(!build_matcher(&PortQuery::new().with("manufacturer", "AKAI")).matches(&port));
//! assert!(build_matcher(&PortQuery::new().with("name", "*")).matches(&port));
//! ```

pub mod error;
pub use error::{Error, Result};

mod descriptor;
pub use descriptor::{PortDescriptor, PortType};

mod query;
pub use query::PortQuery;

mod matcher;
pub use matcher::{build_matcher, find_ports, PortMatcher, WILDCARD};

mod listing;
pub use listing::PortListing;
