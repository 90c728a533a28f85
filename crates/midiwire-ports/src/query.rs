//! Partial-attribute port queries.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Attribute → pattern pairs, all of which must hold for a port to match.
///
/// ```
/// use midiwire_ports::PortQuery;
///
/// let query = PortQuery::new().with("manufacturer", "korg").with("name", "*");
/// assert_eq!(query.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortQuery {
    patterns: BTreeMap<String, String>,
}

impl PortQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, attribute: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.patterns.insert(attribute.into(), pattern.into());
        self
    }

    pub fn pattern(&self, attribute: &str) -> Option<&str> {
        self.patterns.get(attribute).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.patterns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PortQuery {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            patterns: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for PortQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (attribute, pattern)) in self.patterns.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{attribute}: {pattern:?}")?;
        }
        f.write_str("}")
    }
}
