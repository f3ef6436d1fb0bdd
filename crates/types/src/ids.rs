//! Newtype wrapper for record identities.
//!
//! Exports are keyed per record so that independent records can run
//! concurrently while a single record can never run twice at once. The
//! newtype keeps record keys from being confused with other strings.

use std::fmt;
use std::sync::Arc;

/// The identity of an exportable record, as tracked by the orchestrator's
/// in-flight map.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct RecordId(Arc<str>);

impl RecordId {
    /// Creates a new RecordId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this record ID
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn record_id_creation() {
        let id1 = RecordId::new("certificate:CERT-001");
        let id2 = RecordId::from("certificate:CERT-001");
        assert_eq!(id1, id2);
        assert_eq!(id1.as_str(), "certificate:CERT-001");
    }

    #[test]
    fn usable_as_map_key() {
        let mut inflight = HashMap::new();
        inflight.insert(RecordId::new("a"), 1);
        inflight.insert(RecordId::new("b"), 2);
        assert_eq!(inflight.get(&RecordId::new("a")), Some(&1));
    }
}
