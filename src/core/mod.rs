//! Core foundations of the command-line tool
//!
//! Error handling and configuration shared by the library and the binary.

pub mod error;
pub mod config;

// Re-export commonly used items
pub use error::{Error, Result};
pub use config::{Config, LoggingConfig, OutputConfig, OutputFormat};
