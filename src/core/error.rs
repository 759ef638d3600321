//! Error types for the schema-codec tool
//!
//! Wraps the codec errors together with everything that can go wrong around
//! them: reading input files, parsing JSON and hex, loading configuration.

use schema_codec_core::CodecError;
use thiserror::Error;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the schema-codec tool
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Descriptor codec errors
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON model parsing or rendering errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed hex input
    #[error("Hex error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Check if this error came out of the descriptor codec
    pub fn is_codec_error(&self) -> bool {
        matches!(self, Error::Codec(_))
    }

    /// Check if this error is caused by user input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::Codec(_) | Error::Json(_) | Error::Hex(_) | Error::InvalidInput(_)
        )
    }
}
