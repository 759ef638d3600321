//! Schema Codec command-line tool
//!
//! Encodes JSON stream descriptors to protobuf bytes, decodes them back and
//! prints the index kind table.

use clap::{Arg, ArgAction, ArgMatches, Command};
use schema_codec::{commands, Config, OutputFormat, Result};
use tracing::info;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(if e.is_input_error() { 2 } else { 1 });
    }
}

fn run() -> Result<()> {
    let matches = cli().get_matches();

    // Load configuration
    let mut config = if let Some(config_path) = matches.get_one::<String>("config") {
        let mut config = Config::from_file(config_path)?;
        config.apply_env_overrides()?;
        config
    } else {
        Config::load()?
    };

    // Apply CLI overrides
    apply_cli_overrides(&mut config, &matches)?;
    config.validate()?;

    // Initialize logging
    schema_codec::init(&config.logging)?;
    info!("Starting {} v{}", schema_codec::NAME, schema_codec::VERSION);

    let output = match matches.subcommand() {
        Some(("encode", sub)) => {
            let path = required(sub, "input")?;
            commands::encode_file(path, &config.output)?
        }
        Some(("decode", sub)) => {
            let hex = required(sub, "hex")?;
            commands::decode_hex(hex, &config.output)?
        }
        Some(("index-kinds", _)) => commands::index_kinds(&config.output)?,
        _ => return Err(schema_codec::Error::invalid_input("no command given")),
    };

    println!("{}", output);
    Ok(())
}

fn cli() -> Command {
    Command::new("schema-codec")
        .version(schema_codec::VERSION)
        .about("Encode and decode columnar stream descriptors.")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .global(true)
                .help("Configuration file path")
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .global(true)
                .help("Log level (trace, debug, info, warn, error)")
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .global(true)
                .help("Output format (json, hex, debug)")
        )
        .arg(
            Arg::new("pretty")
                .short('p')
                .long("pretty")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Pretty-print JSON and debug output")
        )
        .subcommand(
            Command::new("encode")
                .about("Encode a JSON stream descriptor to its wire form")
                .arg(
                    Arg::new("input")
                        .value_name("JSON_FILE")
                        .required(true)
                        .help("Path to the JSON stream descriptor")
                )
        )
        .subcommand(
            Command::new("decode")
                .about("Decode hex protobuf bytes to a stream descriptor")
                .arg(
                    Arg::new("hex")
                        .value_name("HEX")
                        .required(true)
                        .help("Hex encoded StreamDescriptor bytes")
                )
        )
        .subcommand(Command::new("index-kinds").about("Print the index kind table"))
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| schema_codec::Error::invalid_input(format!("missing argument: {}", id)))
}

/// Apply command line argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, matches: &ArgMatches) -> Result<()> {
    let sub = matches.subcommand().map(|(_, sub)| sub);

    if let Some(level) = global_value(matches, sub, "log-level") {
        config.logging.level = level.to_string();
    }

    if let Some(format) = global_value(matches, sub, "format") {
        config.output.format = format.parse::<OutputFormat>()?;
    }

    let pretty = matches.get_flag("pretty") || sub.map_or(false, |s| s.get_flag("pretty"));
    if pretty {
        config.output.pretty = true;
    }

    Ok(())
}

// Global args may land on either the root or the subcommand matches
fn global_value<'a>(root: &'a ArgMatches, sub: Option<&'a ArgMatches>, id: &str) -> Option<&'a str> {
    sub.and_then(|s| s.get_one::<String>(id))
        .or_else(|| root.get_one::<String>(id))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn test_overrides_after_subcommand() {
        let matches = cli()
            .try_get_matches_from(["schema-codec", "decode", "0801", "--format", "debug", "--pretty"])
            .unwrap();
        let mut config = Config::default();
        apply_cli_overrides(&mut config, &matches).unwrap();
        assert_eq!(config.output.format, OutputFormat::Debug);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_bad_format_rejected() {
        let matches = cli()
            .try_get_matches_from(["schema-codec", "--format", "csv", "index-kinds"])
            .unwrap();
        let mut config = Config::default();
        assert!(apply_cli_overrides(&mut config, &matches).is_err());
    }
}
