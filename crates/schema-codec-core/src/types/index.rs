//! Index descriptor wrapper
//!
//! Owns a wire [`proto::IndexDescriptor`] and gives it typed accessors.
//! Two descriptors compare equal when their kinds match; the field count is
//! deliberately left out of equality.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize, Serializer};

use crate::codec::index::{char_to_kind, kind_to_char, kind_to_display_name};
use crate::proto;
use crate::types::error::{CodecError, Result};

/// Index kind, as carried on the wire
pub type IndexKind = proto::index_descriptor::Type;

/// Descriptor of the index column(s) of a stream
#[derive(Debug, Clone, Copy, Eq, Deserialize)]
#[serde(try_from = "IndexDescriptorParts")]
pub struct IndexDescriptor {
    data: proto::IndexDescriptor,
}

impl IndexDescriptor {
    /// Build from a field count and kind
    pub fn new(field_count: u32, kind: IndexKind) -> Self {
        let mut data = proto::IndexDescriptor::default();
        data.set_kind(kind);
        data.field_count = field_count;
        Self { data }
    }

    /// Adopt an existing wire value as-is
    pub fn from_proto(data: proto::IndexDescriptor) -> Self {
        Self { data }
    }

    /// Single timestamp index column
    pub fn timestamp() -> Self {
        Self::new(1, IndexKind::Timestamp)
    }

    /// Implicit row number index
    pub fn row_count() -> Self {
        Self::new(0, IndexKind::Rowcount)
    }

    /// Single string index column
    pub fn string() -> Self {
        Self::new(1, IndexKind::String)
    }

    /// No index
    pub fn empty() -> Self {
        Self::new(0, IndexKind::Empty)
    }

    /// True only for a zero field count with the unknown kind
    pub fn uninitialized(&self) -> bool {
        self.data.field_count == 0 && self.data.kind == IndexKind::Unknown as i32
    }

    /// Wrapped wire value
    pub fn proto(&self) -> &proto::IndexDescriptor {
        &self.data
    }

    /// Give up the wrapped wire value
    pub fn into_proto(self) -> proto::IndexDescriptor {
        self.data
    }

    /// Number of index fields
    pub fn field_count(&self) -> u32 {
        self.data.field_count
    }

    /// Index kind; a code this build does not know reads as `Unknown`
    pub fn kind(&self) -> IndexKind {
        self.data.kind()
    }

    /// Kind code exactly as stored
    pub fn raw_kind(&self) -> i32 {
        self.data.kind
    }

    /// Rebind the kind in place
    pub fn set_type(&mut self, kind: IndexKind) {
        self.data.set_kind(kind);
    }

    /// Single character code of the kind
    pub fn type_char(&self) -> Result<char> {
        kind_to_char(self.data.kind)
    }

    /// Human readable kind name
    pub fn display_name(&self) -> Result<&'static str> {
        kind_to_display_name(self.data.kind)
    }
}

impl Default for IndexDescriptor {
    fn default() -> Self {
        Self::new(0, IndexKind::Unknown)
    }
}

impl PartialEq for IndexDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.data.kind == other.data.kind
    }
}

impl Hash for IndexDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.kind.hash(state);
    }
}

impl From<proto::IndexDescriptor> for IndexDescriptor {
    fn from(data: proto::IndexDescriptor) -> Self {
        Self::from_proto(data)
    }
}

impl fmt::Display for IndexDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_name() {
            Ok(name) => write!(f, "{}(fields={})", name, self.field_count()),
            Err(_) => write!(f, "Invalid({})(fields={})", self.raw_kind(), self.field_count()),
        }
    }
}

/// Serialized form: the kind character plus the field count
#[derive(Serialize, Deserialize)]
struct IndexDescriptorParts {
    kind: char,
    #[serde(default)]
    field_count: u32,
}

impl TryFrom<IndexDescriptorParts> for IndexDescriptor {
    type Error = CodecError;

    fn try_from(parts: IndexDescriptorParts) -> Result<Self> {
        Ok(Self::new(parts.field_count, char_to_kind(parts.kind)?))
    }
}

impl Serialize for IndexDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let kind = self.type_char().map_err(serde::ser::Error::custom)?;
        IndexDescriptorParts {
            kind,
            field_count: self.field_count(),
        }
        .serialize(serializer)
    }
}
