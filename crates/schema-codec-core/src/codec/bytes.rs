//! Protobuf byte helpers

use prost::Message;

use crate::types::error::Result;

/// Encode any wire message to protobuf bytes
pub fn to_bytes<M: Message>(message: &M) -> Vec<u8> {
    message.encode_to_vec()
}

/// Decode protobuf bytes into a wire message
pub fn from_bytes<M: Message + Default>(bytes: &[u8]) -> Result<M> {
    Ok(M::decode(bytes)?)
}
