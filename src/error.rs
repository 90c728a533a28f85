//! Centralized error type for the midiwire umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Message: {0}")]
    Msg(#[from] midiwire_msg::Error),

    #[error("Ports: {0}")]
    Ports(#[from] midiwire_ports::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
