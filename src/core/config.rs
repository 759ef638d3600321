//! Configuration management for the schema-codec tool
//!
//! Settings come from built-in defaults, then an optional TOML file, then
//! `SC_*` environment variables, then command-line flags.

use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Config file picked up from the working directory by [`Config::load`]
pub const DEFAULT_CONFIG_FILE: &str = "schema-codec.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Output rendering
    pub output: OutputConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty)
    pub format: String,
}

/// Output rendering configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// How results are printed
    pub format: OutputFormat,

    /// Pretty-print JSON and debug output
    pub pretty: bool,
}

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON rendering
    #[default]
    Json,
    /// Hex encoded protobuf bytes
    Hex,
    /// Rust debug rendering
    Debug,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "hex" => Ok(OutputFormat::Hex),
            "debug" => Ok(OutputFormat::Debug),
            other => Err(Error::config(format!("Invalid output format: {}", other))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Hex => "hex",
            OutputFormat::Debug => "debug",
        };
        f.write_str(name)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default config file and environment variables
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Config::default()
        };

        // Override with environment variables
        config.apply_env_overrides()?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&contents)
            .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `SC_*` overrides from an arbitrary variable source
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Logging overrides
        if let Some(level) = lookup("SC_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = lookup("SC_LOG_FORMAT") {
            self.logging.format = format;
        }

        // Output overrides
        if let Some(format) = lookup("SC_OUTPUT_FORMAT") {
            self.output.format = format.parse()?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(Error::config(format!("Invalid log level: {}", other))),
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => return Err(Error::config(format!("Invalid log format: {}", other))),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_validate() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_bad_level_rejected() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"hex\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Hex);
        assert!(!config.output.pretty);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = Config::from_file(dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(Error::Config(_))));

        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[logging\nlevel = ").unwrap();
        assert!(matches!(Config::from_file(&path), Err(Error::Config(_))));

        let path = dir.path().join("bad_format.toml");
        std::fs::write(&path, "[output]\nformat = \"yaml\"").unwrap();
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_overrides() {
        let env = vars(&[
            ("SC_LOG_LEVEL", "debug"),
            ("SC_LOG_FORMAT", "json"),
            ("SC_OUTPUT_FORMAT", "DEBUG"),
        ]);
        let mut config = Config::default();
        config.apply_overrides(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.output.format, OutputFormat::Debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_output_override() {
        let env = vars(&[("SC_OUTPUT_FORMAT", "csv")]);
        let mut config = Config::default();
        let result = config.apply_overrides(|k| env.get(k).cloned());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_output_format_parse_and_display() {
        for format in [OutputFormat::Json, OutputFormat::Hex, OutputFormat::Debug] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }
}
