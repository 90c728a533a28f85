//! Case-insensitive substring matching of port attributes.

use crate::descriptor::PortDescriptor;
use crate::query::PortQuery;

/// Pattern that matches any value, including a missing attribute.
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Condition {
    Any,
    /// Lower-cased needle.
    Contains(String),
}

/// Predicate compiled from a [`PortQuery`].
///
/// Every query attribute must hold. Patterns are lower-cased once here, port
/// values on each test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortMatcher {
    conditions: Vec<(String, Condition)>,
}

impl PortMatcher {
    pub fn new(query: &PortQuery) -> Self {
        let conditions = query
            .iter()
            .map(|(attribute, pattern)| {
                let condition = if pattern == WILDCARD {
                    Condition::Any
                } else {
                    Condition::Contains(pattern.to_lowercase())
                };
                (attribute.to_string(), condition)
            })
            .collect();
        Self { conditions }
    }

    pub fn matches(&self, port: &PortDescriptor) -> bool {
        self.conditions
            .iter()
            .all(|(attribute, condition)| match condition {
                Condition::Any => true,
                Condition::Contains(needle) => port
                    .get(attribute)
                    .is_some_and(|value| value.to_lowercase().contains(needle.as_str())),
            })
    }

    /// Borrowing closure form, for `Iterator::filter` and friends.
    pub fn as_predicate(&self) -> impl Fn(&PortDescriptor) -> bool + '_ {
        move |port| self.matches(port)
    }
}

pub fn build_matcher(query: &PortQuery) -> PortMatcher {
    PortMatcher::new(query)
}

/// All ports matching `query`, in enumeration order.
pub fn find_ports<'a, I>(ports: I, query: &PortQuery) -> Vec<&'a PortDescriptor>
where
    I: IntoIterator<Item = &'a PortDescriptor>,
{
    let matcher = build_matcher(query);
    ports.into_iter().filter(|port| matcher.matches(port)).collect()
}
