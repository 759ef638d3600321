//! Stream-descriptor codec
//!
//! Composes the component codecs to move a whole [`StreamDescriptor`]
//! across the wire boundary.

use crate::codec::sorted::{decode_sorted, encode_sorted};
use crate::codec::stream_id::{decode_stream_id, encode_stream_id};
use crate::codec::type_desc::{build_field_descriptor, decode_type_descriptor};
use crate::proto;
use crate::types::descriptor::StreamDescriptor;
use crate::types::error::Result;
use crate::types::field::Field;
use crate::types::index::IndexDescriptor;
use crate::log_trace;

/// Encode a stream descriptor
pub fn encode_stream_descriptor(desc: &StreamDescriptor) -> proto::StreamDescriptor {
    let mut output = proto::StreamDescriptor::default();
    encode_stream_id(&desc.id, &mut output);
    output.index = Some(*desc.index.proto());
    output.set_sorted(encode_sorted(desc.sorted));
    output.fields = desc
        .fields
        .iter()
        .map(|field| {
            build_field_descriptor(
                field.type_desc.data_type,
                field.type_desc.dimension,
                &field.name,
            )
        })
        .collect();

    log_trace!(id = %desc.id, fields = output.fields.len(), "encoded stream descriptor");
    output
}

/// Decode a single wire field
///
/// A field written without a type descriptor reads as the unknown scalar.
pub fn decode_field(field: &proto::FieldDescriptor) -> Field {
    let type_desc = field
        .type_desc
        .as_ref()
        .map(decode_type_descriptor)
        .unwrap_or_default();
    Field {
        name: field.name.clone(),
        type_desc,
    }
}

/// Decode a stream descriptor
///
/// A missing index message decodes to the uninitialized index. Only a
/// missing stream id is an error.
pub fn decode_stream_descriptor(desc: &proto::StreamDescriptor) -> Result<StreamDescriptor> {
    let id = decode_stream_id(desc)?;
    let index = desc
        .index
        .map(IndexDescriptor::from_proto)
        .unwrap_or_default();
    let fields = desc.fields.iter().map(decode_field).collect();

    Ok(StreamDescriptor {
        id,
        index,
        sorted: decode_sorted(desc.sorted),
        fields,
    })
}
