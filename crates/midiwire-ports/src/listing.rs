//! Port lookup over enumerated input and output ports.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::descriptor::{PortDescriptor, PortType};
use crate::error::{Error, Result};
use crate::matcher::find_ports;
use crate::query::PortQuery;

/// Snapshot of the ports an enumerator reported, split by direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortListing {
    #[serde(default)]
    pub inputs: Vec<PortDescriptor>,
    #[serde(default)]
    pub outputs: Vec<PortDescriptor>,
}

impl PortListing {
    pub fn new(inputs: Vec<PortDescriptor>, outputs: Vec<PortDescriptor>) -> Self {
        Self { inputs, outputs }
    }

    pub fn ports(&self, port_type: PortType) -> &[PortDescriptor] {
        match port_type {
            PortType::Input => &self.inputs,
            PortType::Output => &self.outputs,
        }
    }

    /// Every port of `port_type` matching `query`, in enumeration order.
    pub fn find(&self, port_type: PortType, query: &PortQuery) -> Vec<&PortDescriptor> {
        let found = find_ports(self.ports(port_type), query);
        debug!(
            "{} of {} {} ports match {}",
            found.len(),
            self.ports(port_type).len(),
            port_type,
            query
        );
        found
    }

    /// First port of `port_type` matching `query`.
    pub fn find_first(&self, port_type: PortType, query: &PortQuery) -> Result<&PortDescriptor> {
        self.find(port_type, query)
            .into_iter()
            .next()
            .ok_or_else(|| Error::NoMatchingPort {
                port_type,
                query: query.clone(),
            })
    }
}
