//! Descriptor codec
//!
//! Translation between the in-memory model in [`crate::types`] and the wire
//! messages in [`crate::proto`]. Every function here is pure.

/// Data type and type descriptor codec
pub mod type_desc;
/// Sortedness translator
pub mod sorted;
/// Index kind mapping tables
pub mod index;
/// Stream id encoder
pub mod stream_id;
/// Field comparator
pub mod field;
/// Whole stream descriptor codec
pub mod descriptor;
/// Protobuf byte helpers
pub mod bytes;

pub use type_desc::{
    build_field_descriptor, decode_data_type, decode_data_type_only, decode_type_descriptor,
    encode_type_descriptor, set_data_type,
};
pub use sorted::{decode_sorted, encode_sorted};
pub use index::{char_to_kind, kind_to_char, kind_to_display_name, INDEX_KINDS};
pub use stream_id::{decode_stream_id, encode_stream_id};
pub use field::{fields_cmp, fields_equal, fields_less, sort_fields};
pub use descriptor::{decode_field, decode_stream_descriptor, encode_stream_descriptor};
pub use bytes::{from_bytes, to_bytes};
