//! Logical identity of a data stream

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stream identifier, either numeric or textual
///
/// Serialized untagged, so a JSON number is a numeric id and a JSON string
/// is a string id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreamId {
    /// Numeric id
    Numeric(i64),
    /// String id
    String(String),
}

impl StreamId {
    /// Whether this is a numeric id
    pub fn is_numeric(&self) -> bool {
        matches!(self, StreamId::Numeric(_))
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamId::Numeric(id) => write!(f, "{}", id),
            StreamId::String(id) => f.write_str(id),
        }
    }
}

impl From<i64> for StreamId {
    fn from(id: i64) -> Self {
        StreamId::Numeric(id)
    }
}

impl From<&str> for StreamId {
    fn from(id: &str) -> Self {
        StreamId::String(id.to_string())
    }
}

impl From<String> for StreamId {
    fn from(id: String) -> Self {
        StreamId::String(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_and_display() {
        let numeric = StreamId::from(42i64);
        assert!(numeric.is_numeric());
        assert_eq!(numeric.to_string(), "42");

        let named = StreamId::from("trades");
        assert!(!named.is_numeric());
        assert_eq!(named, StreamId::from(String::from("trades")));
        assert_eq!(named.to_string(), "trades");
    }

    #[test]
    fn test_untagged_serde() {
        let numeric: StreamId = serde_json::from_str("7").unwrap();
        assert!(numeric.is_numeric());

        let named: StreamId = serde_json::from_str("\"7\"").unwrap();
        assert!(!named.is_numeric());
    }
}
