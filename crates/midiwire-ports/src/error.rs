//! Error types for port selection.

use thiserror::Error;

use crate::descriptor::PortType;
use crate::query::PortQuery;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No {port_type} port matches {query}")]
    NoMatchingPort { port_type: PortType, query: PortQuery },
}

pub type Result<T> = std::result::Result<T, Error>;
