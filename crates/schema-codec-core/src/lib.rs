//! # Schema Codec Core
//!
//! Schema descriptor codec for a columnar data store: translates the typed
//! column model (data type, dimension, field name, index kind, sortedness,
//! stream identity) to and from its wire descriptors.
//!
//! Two error policies coexist. Decoding data types and sortedness is
//! lenient: unrecognised wire values become explicit `Unknown` sentinels so
//! newer producers stay readable. The index kind tables and stream id
//! decoding are strict and return a [`CodecError`] for anything outside
//! their closed sets.

#![warn(missing_docs)]

/// Logging macros
pub mod logging;

/// Layout constants
pub mod constants;

/// Wire descriptor messages
pub mod proto;

/// In-memory descriptor model
pub mod types;

/// Model to wire translation
pub mod codec;

// Re-export commonly used items
pub use types::{
    CodecError, DataType, Dimension, Field, IndexDescriptor, IndexKind, Result, SizeBits,
    SortedValue, StreamDescriptor, StreamId, TypeDescriptor, ValueType,
};
pub use codec::{
    build_field_descriptor, decode_data_type, decode_data_type_only, decode_sorted,
    decode_stream_descriptor, decode_type_descriptor, encode_sorted, encode_stream_descriptor,
    encode_stream_id, encode_type_descriptor, fields_equal, fields_less,
};
