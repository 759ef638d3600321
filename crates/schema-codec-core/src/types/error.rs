//! Error types for the descriptor codec
//!
//! Lenient decodes (data type, dimension, sortedness) never produce these.
//! They come from the closed mapping tables (index kind to char or name),
//! from descriptors that are missing a stream id, and from protobuf byte
//! decoding.

use thiserror::Error;

/// Result type used throughout the codec
pub type Result<T> = std::result::Result<T, CodecError>;

/// Codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Index kind code outside the defined kinds
    #[error("Unknown index type: {0}")]
    InvalidIndexKind(i32),

    /// Index kind character outside `E`, `T`, `R`, `S`, `U`
    #[error("Unknown index type char: {0:?}")]
    InvalidIndexKindCode(char),

    /// Stream descriptor without a numeric or string id
    #[error("Decoding unknown descriptor type: stream id not set")]
    MissingStreamId,

    /// Malformed protobuf bytes
    #[error("Wire decode error: {0}")]
    Decode(#[from] prost::DecodeError),
}

impl CodecError {
    /// Whether the error comes from one of the closed mapping tables
    pub fn is_mapping_error(&self) -> bool {
        matches!(
            self,
            CodecError::InvalidIndexKind(_) | CodecError::InvalidIndexKindCode(_)
        )
    }
}
