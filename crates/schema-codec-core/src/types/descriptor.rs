//! In-memory stream descriptor

use serde::{Deserialize, Serialize};

use crate::types::field::Field;
use crate::types::index::IndexDescriptor;
use crate::types::sorted::SortedValue;
use crate::types::stream_id::StreamId;

/// Schema of a logical data stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Stream identity
    pub id: StreamId,
    /// Index description, uninitialized when absent
    #[serde(default)]
    pub index: IndexDescriptor,
    /// Declared sort order
    #[serde(default)]
    pub sorted: SortedValue,
    /// Columns, index fields first
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl StreamDescriptor {
    /// Descriptor with no fields, an uninitialized index and unknown sort order
    pub fn new(id: impl Into<StreamId>) -> Self {
        Self {
            id: id.into(),
            index: IndexDescriptor::default(),
            sorted: SortedValue::Unknown,
            fields: Vec::new(),
        }
    }

    /// Set the index description
    pub fn with_index(mut self, index: IndexDescriptor) -> Self {
        self.index = index;
        self
    }

    /// Set the declared sort order
    pub fn with_sorted(mut self, sorted: SortedValue) -> Self {
        self.sorted = sorted;
        self
    }

    /// Append a field
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Look up a field by name
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Index fields, taken from the front of the field list
    pub fn index_fields(&self) -> &[Field] {
        let count = (self.index.field_count() as usize).min(self.fields.len());
        &self.fields[..count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{scalar_field, DataType, IndexKind};

    fn quotes() -> StreamDescriptor {
        let mut desc = StreamDescriptor::new("quotes").with_index(IndexDescriptor::timestamp());
        desc.add_field(scalar_field("time", DataType::NANOSECONDS_UTC64));
        desc.add_field(scalar_field("bid", DataType::FLOAT64));
        desc.add_field(scalar_field("bid", DataType::INT64));
        desc
    }

    #[test]
    fn test_find_field() {
        let desc = quotes();
        let bid = desc.find_field("bid").unwrap();
        assert_eq!(bid.type_desc.data_type, DataType::FLOAT64);
        assert!(desc.find_field("ask").is_none());
        assert!(desc.find_field("").is_none());
    }

    #[test]
    fn test_index_fields_clamped() {
        let desc = quotes();
        assert_eq!(desc.index_fields().len(), 1);
        assert_eq!(desc.index_fields()[0].name, "time");

        let short = StreamDescriptor::new(1i64).with_index(IndexDescriptor::new(3, IndexKind::String));
        assert!(short.index_fields().is_empty());
    }
}
