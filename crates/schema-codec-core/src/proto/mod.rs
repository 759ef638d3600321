//! Wire descriptor messages
//!
//! Protobuf containers for the persisted/transmitted form of a schema. Enum
//! fields are kept as raw `i32` the way prost stores them, so values written
//! by a newer producer survive decoding untouched and the codec decides how
//! to interpret them.

/// Full type of a column on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct TypeDescriptor {
    /// Scalar kind, see [`type_descriptor::ValueType`].
    #[prost(enumeration = "type_descriptor::ValueType", tag = "1")]
    pub value_type: i32,
    /// Storage width, see [`type_descriptor::SizeBits`].
    #[prost(enumeration = "type_descriptor::SizeBits", tag = "2")]
    pub size_bits: i32,
    /// Rank of the column element.
    #[prost(uint32, tag = "3")]
    pub dimension: u32,
}

/// Nested enum types in `TypeDescriptor`.
pub mod type_descriptor {
    /// Scalar kind codes.
    ///
    /// `Symbol` and `Pickle` are reserved on the wire and have no in-memory
    /// counterpart.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum ValueType {
        /// Not set or not recognised
        UnknownValueType = 0,
        /// Unsigned integer
        Uint = 1,
        /// Signed integer
        Int = 2,
        /// IEEE float
        Float = 3,
        /// Boolean
        Bool = 4,
        /// Nanoseconds since the UTC epoch
        NanosecondsUtc = 5,
        /// Reserved
        Symbol = 6,
        /// Fixed width ASCII string
        AsciiFixed = 7,
        /// Fixed width UTF-8 string
        Utf8Fixed = 8,
        /// Opaque bytes
        Bytes = 9,
        /// Reserved
        Pickle = 10,
        /// Dynamic UTF-8 string
        Utf8Dynamic = 11,
        /// Dynamic ASCII string
        AsciiDynamic = 12,
        /// Null-only column
        Empty = 13,
        /// Nullable boolean
        BoolObject = 14,
    }

    /// Storage width codes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum SizeBits {
        /// Not set or not recognised
        UnknownSizeBits = 0,
        /// 8 bits
        S8 = 1,
        /// 16 bits
        S16 = 2,
        /// 32 bits
        S32 = 3,
        /// 64 bits
        S64 = 4,
    }
}

/// Descriptor of the index column(s) of a stream.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct IndexDescriptor {
    /// Index kind, see [`index_descriptor::Type`].
    #[prost(enumeration = "index_descriptor::Type", tag = "1")]
    pub kind: i32,
    /// Number of index fields at the front of the field list.
    #[prost(uint32, tag = "2")]
    pub field_count: u32,
}

/// Nested enum types in `IndexDescriptor`.
pub mod index_descriptor {
    /// Index kinds. The codes are the ASCII values of the kind characters.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Type {
        /// Not set
        Unknown = 0,
        /// No index column
        Empty = 69,
        /// Implicit row number index
        Rowcount = 82,
        /// String keyed index
        String = 83,
        /// Timestamp index
        Timestamp = 84,
    }
}

/// Declared sort order of a stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SortedValue {
    /// Not known
    Unknown = 0,
    /// Explicitly unsorted
    Unsorted = 1,
    /// Ascending
    Ascending = 2,
    /// Descending
    Descending = 3,
}

/// Schema of a logical data stream.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StreamDescriptor {
    /// Stream identity, exactly one variant present on a valid descriptor.
    #[prost(oneof = "stream_descriptor::Id", tags = "1, 2")]
    pub id: ::core::option::Option<stream_descriptor::Id>,
    /// Index description.
    #[prost(message, optional, tag = "3")]
    pub index: ::core::option::Option<IndexDescriptor>,
    /// Declared sort order, see [`SortedValue`].
    #[prost(enumeration = "SortedValue", tag = "4")]
    pub sorted: i32,
    /// Column fields, index fields first.
    #[prost(message, repeated, tag = "5")]
    pub fields: ::prost::alloc::vec::Vec<stream_descriptor::FieldDescriptor>,
}

/// Nested message and oneof types in `StreamDescriptor`.
pub mod stream_descriptor {
    /// A single named, typed column.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct FieldDescriptor {
        /// Column type.
        #[prost(message, optional, tag = "1")]
        pub type_desc: ::core::option::Option<super::TypeDescriptor>,
        /// Column name, empty for anonymous fields.
        #[prost(string, tag = "2")]
        pub name: ::prost::alloc::string::String,
    }

    /// Stream identity.
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Oneof)]
    pub enum Id {
        /// Numeric stream id
        #[prost(int64, tag = "1")]
        NumId(i64),
        /// String stream id
        #[prost(string, tag = "2")]
        StrId(::prost::alloc::string::String),
    }
}

impl StreamDescriptor {
    /// Numeric id, if that variant is set.
    pub fn num_id(&self) -> Option<i64> {
        match &self.id {
            Some(stream_descriptor::Id::NumId(id)) => Some(*id),
            _ => None,
        }
    }

    /// String id, if that variant is set.
    pub fn str_id(&self) -> Option<&str> {
        match &self.id {
            Some(stream_descriptor::Id::StrId(id)) => Some(id.as_str()),
            _ => None,
        }
    }

    /// Set the numeric id, replacing any id already present.
    pub fn set_num_id(&mut self, id: i64) {
        self.id = Some(stream_descriptor::Id::NumId(id));
    }

    /// Set the string id, replacing any id already present.
    pub fn set_str_id(&mut self, id: impl Into<String>) {
        self.id = Some(stream_descriptor::Id::StrId(id.into()));
    }
}

/// Shorthand for the nested field descriptor message.
pub type FieldDescriptor = stream_descriptor::FieldDescriptor;
