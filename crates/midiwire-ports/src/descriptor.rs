//! Port descriptors as supplied by a device enumerator.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortType {
    Input,
    Output,
}

impl fmt::Display for PortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortType::Input => f.write_str("input"),
            PortType::Output => f.write_str("output"),
        }
    }
}

/// String attributes of one MIDI port, e.g. `manufacturer` and `name`.
///
/// The matcher only reads descriptors; building them is up to whatever
/// enumerates the ports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortDescriptor {
    attributes: BTreeMap<String, String>,
}

impl PortDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(attribute, value);
        self
    }

    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(attribute.into(), value.into());
    }

    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.get("manufacturer")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PortDescriptor {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
