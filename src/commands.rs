//! Command implementations
//!
//! Each command returns its rendered output as a string; the binary only
//! prints it. Keeping I/O at the edge lets the commands be tested directly.

use std::path::Path;

use schema_codec_core::codec::{
    decode_stream_descriptor, encode_stream_descriptor, from_bytes, kind_to_char,
    kind_to_display_name, to_bytes, INDEX_KINDS,
};
use schema_codec_core::proto::{self, stream_descriptor};
use schema_codec_core::StreamDescriptor;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::core::{Error, OutputConfig, OutputFormat, Result};

/// Read a JSON stream descriptor model from `path` and render its wire form
pub fn encode_file(path: impl AsRef<Path>, output: &OutputConfig) -> Result<String> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    info!("Encoding stream descriptor from {}", path.display());
    encode_json(&contents, output)
}

/// Parse a JSON stream descriptor model and render its wire form
pub fn encode_json(json: &str, output: &OutputConfig) -> Result<String> {
    let model: StreamDescriptor = serde_json::from_str(json)?;
    let wire = encode_stream_descriptor(&model);
    debug!(fields = wire.fields.len(), "encoded stream descriptor");
    render_wire(&wire, output)
}

/// Decode hex protobuf bytes into the model and render it
pub fn decode_hex(input: &str, output: &OutputConfig) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::invalid_input("no hex bytes given"));
    }

    let bytes = hex::decode(input)?;
    let wire: proto::StreamDescriptor = from_bytes(&bytes)?;
    let model = decode_stream_descriptor(&wire)?;
    debug!(bytes = bytes.len(), id = %model.id, "decoded stream descriptor");

    match output.format {
        OutputFormat::Json => render_json(&serde_json::to_value(&model)?, output.pretty),
        OutputFormat::Hex => Ok(hex::encode(to_bytes(&encode_stream_descriptor(&model)))),
        OutputFormat::Debug => Ok(render_debug(&model, output.pretty)),
    }
}

/// The index kind table, one `code char name` row per kind
pub fn index_kinds(output: &OutputConfig) -> Result<String> {
    let mut rows = Vec::with_capacity(INDEX_KINDS.len());
    for kind in INDEX_KINDS {
        rows.push((kind as i32, kind_to_char(kind)?, kind_to_display_name(kind)?));
    }

    match output.format {
        OutputFormat::Json => {
            let table: Vec<Value> = rows
                .iter()
                .map(|(code, ch, name)| json!({ "code": code, "char": ch.to_string(), "name": name }))
                .collect();
            render_json(&Value::Array(table), output.pretty)
        }
        OutputFormat::Hex | OutputFormat::Debug => Ok(rows
            .iter()
            .map(|(code, ch, name)| format!("{:>3}  {}  {}", code, ch, name))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn render_wire(wire: &proto::StreamDescriptor, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Hex => Ok(hex::encode(to_bytes(wire))),
        OutputFormat::Json => render_json(&wire_to_json(wire), output.pretty),
        OutputFormat::Debug => Ok(render_debug(wire, output.pretty)),
    }
}

/// JSON view of a wire descriptor with enum fields left as raw codes
pub fn wire_to_json(wire: &proto::StreamDescriptor) -> Value {
    let id = match &wire.id {
        Some(stream_descriptor::Id::NumId(id)) => json!({ "num_id": id }),
        Some(stream_descriptor::Id::StrId(id)) => json!({ "str_id": id }),
        None => Value::Null,
    };
    let index = wire
        .index
        .map(|index| json!({ "kind": index.kind, "field_count": index.field_count }));
    let fields: Vec<Value> = wire
        .fields
        .iter()
        .map(|field| {
            let type_desc = field.type_desc.map(|td| {
                json!({
                    "value_type": td.value_type,
                    "size_bits": td.size_bits,
                    "dimension": td.dimension,
                })
            });
            json!({ "name": field.name, "type_desc": type_desc })
        })
        .collect();

    json!({
        "id": id,
        "index": index,
        "sorted": wire.sorted,
        "fields": fields,
    })
}

fn render_json(value: &Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

fn render_debug(value: &impl std::fmt::Debug, pretty: bool) -> String {
    if pretty {
        format!("{:#?}", value)
    } else {
        format!("{:?}", value)
    }
}
