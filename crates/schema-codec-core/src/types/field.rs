//! In-memory column field

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::data_type::{DataType, Dimension, TypeDescriptor};

/// A named, typed column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    /// Column name, empty for an anonymous field
    #[serde(default)]
    pub name: String,
    /// Column type
    pub type_desc: TypeDescriptor,
}

impl Field {
    /// Build a field
    pub fn new(name: impl Into<String>, data_type: DataType, dimension: Dimension) -> Self {
        Self {
            name: name.into(),
            type_desc: TypeDescriptor::new(data_type, dimension),
        }
    }

    /// Whether the field has no name
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

/// Scalar field of the given type
pub fn scalar_field(name: impl Into<String>, data_type: DataType) -> Field {
    Field::new(name, data_type, Dimension::Dim0)
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FD<name={}, type={}>", self.name, self.type_desc)
    }
}
