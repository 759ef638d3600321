//! Stream-id encoder
//!
//! The stream identity is a closed enum, so encoding is an exhaustive match.
//! The only way to meet an id with no variant is a wire descriptor whose
//! oneof was never set, which decoding reports as an error.

use crate::proto;
use crate::proto::stream_descriptor::Id;
use crate::types::error::{CodecError, Result};
use crate::types::stream_id::StreamId;
use crate::{log_trace, log_warn};

/// Write `id` into the id oneof of `desc`
pub fn encode_stream_id(id: &StreamId, desc: &mut proto::StreamDescriptor) {
    match id {
        StreamId::Numeric(num_id) => desc.set_num_id(*num_id),
        StreamId::String(str_id) => desc.set_str_id(str_id.as_str()),
    }
    log_trace!(%id, "encoded stream id");
}

/// Read the stream id out of `desc`
pub fn decode_stream_id(desc: &proto::StreamDescriptor) -> Result<StreamId> {
    match &desc.id {
        Some(Id::NumId(num_id)) => Ok(StreamId::Numeric(*num_id)),
        Some(Id::StrId(str_id)) => Ok(StreamId::String(str_id.clone())),
        None => {
            log_warn!("stream descriptor has no id set");
            Err(CodecError::MissingStreamId)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_sets_only_num_id() {
        let mut desc = proto::StreamDescriptor::default();
        encode_stream_id(&StreamId::Numeric(42), &mut desc);
        assert_eq!(desc.num_id(), Some(42));
        assert_eq!(desc.str_id(), None);
    }

    #[test]
    fn test_string_id_sets_only_str_id() {
        let mut desc = proto::StreamDescriptor::default();
        encode_stream_id(&StreamId::from("abc"), &mut desc);
        assert_eq!(desc.str_id(), Some("abc"));
        assert_eq!(desc.num_id(), None);
    }

    #[test]
    fn test_encode_replaces_previous_id() {
        let mut desc = proto::StreamDescriptor::default();
        encode_stream_id(&StreamId::from("abc"), &mut desc);
        encode_stream_id(&StreamId::Numeric(-1), &mut desc);
        assert_eq!(desc.num_id(), Some(-1));
        assert_eq!(desc.str_id(), None);
    }

    #[test]
    fn test_decode() {
        let mut desc = proto::StreamDescriptor::default();
        assert_eq!(decode_stream_id(&desc), Err(CodecError::MissingStreamId));

        desc.set_str_id("prices");
        assert_eq!(decode_stream_id(&desc), Ok(StreamId::String("prices".to_string())));

        desc.set_num_id(i64::MIN);
        assert_eq!(decode_stream_id(&desc), Ok(StreamId::Numeric(i64::MIN)));
    }
}
