//! Declared sort order of a column or stream

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sortedness of a stream's index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortedValue {
    /// Not known
    #[default]
    Unknown,
    /// Explicitly unsorted
    Unsorted,
    /// Ascending
    Ascending,
    /// Descending
    Descending,
}

impl SortedValue {
    /// Every sorted value
    pub const ALL: [SortedValue; 4] = [
        SortedValue::Unknown,
        SortedValue::Unsorted,
        SortedValue::Ascending,
        SortedValue::Descending,
    ];
}

impl fmt::Display for SortedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortedValue::Unknown => "UNKNOWN",
            SortedValue::Unsorted => "UNSORTED",
            SortedValue::Ascending => "ASCENDING",
            SortedValue::Descending => "DESCENDING",
        };
        f.write_str(name)
    }
}
