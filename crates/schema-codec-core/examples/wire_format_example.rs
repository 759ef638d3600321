use schema_codec_core::codec::{decode_stream_descriptor, encode_stream_descriptor, from_bytes, to_bytes};
use schema_codec_core::proto;
use schema_codec_core::types::{
    scalar_field, DataType, Dimension, Field, IndexDescriptor, SortedValue, StreamDescriptor,
};

fn main() -> schema_codec_core::Result<()> {
    // 1. Describe a stream in memory
    let mut desc = StreamDescriptor::new("quotes")
        .with_index(IndexDescriptor::timestamp())
        .with_sorted(SortedValue::Ascending);
    desc.add_field(scalar_field("time", DataType::NANOSECONDS_UTC64));
    desc.add_field(scalar_field("bid", DataType::FLOAT64));
    desc.add_field(Field::new("depth", DataType::UINT32, Dimension::Dim1));

    // 2. Translate to the wire message and serialize it
    let wire = encode_stream_descriptor(&desc);
    let bytes = to_bytes(&wire);
    println!("Encoded {} fields into {} bytes", wire.fields.len(), bytes.len());

    // 3. Read it back
    let wire: proto::StreamDescriptor = from_bytes(&bytes)?;
    let decoded = decode_stream_descriptor(&wire)?;

    println!("Stream {} indexed by {}", decoded.id, decoded.index);
    for field in decoded.index_fields() {
        println!("  index field: {}", field);
    }
    if let Some(depth) = decoded.find_field("depth") {
        println!("  depth column: {}", depth);
    }
    assert_eq!(decoded, desc);
    Ok(())
}
