//! Schema Codec - descriptor codec tooling for a columnar data store
//!
//! Wraps [`schema_codec_core`] with configuration, logging and the command
//! implementations behind the `schema-codec` binary: encoding JSON stream
//! descriptors to protobuf bytes, decoding them back, and listing the index
//! kind table.
#![warn(missing_docs)]

// Core foundational modules
pub mod core;

// Command implementations
pub mod commands;

// Re-export commonly used items for convenience
pub use crate::core::{Config, Error, LoggingConfig, OutputConfig, OutputFormat, Result};
pub use schema_codec_core as codec;

use tracing_subscriber::EnvFilter;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize tracing
///
/// `RUST_LOG` wins over the configured level when it is set. Logs go to
/// stderr so command output on stdout stays parseable.
pub fn init(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .map_err(|e| Error::config(format!("Invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match logging.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };
    installed.map_err(|e| Error::config(format!("Failed to install subscriber: {}", e)))?;

    tracing::debug!("Initialized {} v{}", NAME, VERSION);
    Ok(())
}
