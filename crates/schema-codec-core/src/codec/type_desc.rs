//! Data-type codec
//!
//! Splits a [`DataType`] into the two wire enums and joins them back. The
//! numeric codes of the in-memory enums equal the wire codes, so encoding is
//! a plain cast. Decoding the data type is total: unrecognised wire codes
//! come back as the `Unknown` halves.

use crate::proto;
use crate::types::data_type::{DataType, Dimension, SizeBits, TypeDescriptor, ValueType};
use crate::log_trace;

/// Write the value type and size bits of `data_type` into `type_desc`
pub fn set_data_type(data_type: DataType, type_desc: &mut proto::TypeDescriptor) {
    type_desc.size_bits = i32::from(data_type.slice_bit_size().code());
    type_desc.value_type = i32::from(data_type.slice_value_type().code());
}

/// Encode a full type descriptor
pub fn encode_type_descriptor(desc: &TypeDescriptor) -> proto::TypeDescriptor {
    let mut output = proto::TypeDescriptor::default();
    output.dimension = desc.dimension.as_u32();
    set_data_type(desc.data_type, &mut output);
    log_trace!(data_type = %desc.data_type, dimension = output.dimension, "encoded type descriptor");
    output
}

/// Recombine the data type carried by a wire type descriptor
pub fn decode_data_type(type_desc: &proto::TypeDescriptor) -> DataType {
    DataType::combine(
        ValueType::from_code(type_desc.value_type),
        SizeBits::from_code(type_desc.size_bits),
    )
}

/// Decode a full type descriptor
///
/// Total like [`decode_data_type`]: a dimension count this build does not
/// know reads as [`Dimension::Unknown`].
pub fn decode_type_descriptor(type_desc: &proto::TypeDescriptor) -> TypeDescriptor {
    TypeDescriptor::new(
        decode_data_type(type_desc),
        Dimension::from_count(type_desc.dimension),
    )
}

/// Data type of a wire type descriptor, ignoring its dimension
pub fn decode_data_type_only(type_desc: &proto::TypeDescriptor) -> DataType {
    decode_data_type(type_desc)
}

/// Build a wire field descriptor; an empty name is left unset
pub fn build_field_descriptor(
    data_type: DataType,
    dimension: Dimension,
    name: &str,
) -> proto::FieldDescriptor {
    let mut output = proto::FieldDescriptor::default();
    if !name.is_empty() {
        output.name = name.to_string();
    }

    let output_desc = output.type_desc.get_or_insert_with(proto::TypeDescriptor::default);
    output_desc.dimension = dimension.as_u32();
    set_data_type(data_type, output_desc);

    output
}
