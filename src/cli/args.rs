//! Command-line argument parsing and validation

use crate::config::LogLevel;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{usage-heading} {usage}

{about-with-newline}
{all-args}{after-help}";

/// A CLI for data processing pipelines
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(name = "datapipe", help_template = HELP_TEMPLATE)]
pub struct Args {
    /// Set the logging level [default: INFO, or LOG_LEVEL from the environment]
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Process a data file and display summary information
    ///
    /// Reads a delimited file from FILEPATH, prints its dimensions, and shows
    /// the first N rows.
    #[command(help_template = HELP_TEMPLATE)]
    Process {
        /// Path to an existing delimited data file
        #[arg(value_parser = existing_file)]
        filepath: PathBuf,

        /// Number of rows to display from the start of the file
        #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
        head: usize,

        /// Field delimiter (inferred from the extension when omitted)
        #[arg(short, long, value_parser = parse_delimiter)]
        delimiter: Option<u8>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show version information
    #[command(help_template = HELP_TEMPLATE)]
    Version,
}

/// How `process` prints its summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text report with a preview table
    #[default]
    Text,
    /// The summary as a JSON object
    Json,
}

/// Accept only paths that name an existing regular file
fn existing_file(raw: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(raw);
    if !path.exists() {
        return Err(format!("File '{raw}' does not exist."));
    }
    if !path.is_file() {
        return Err(format!("File '{raw}' is not a regular file."));
    }
    Ok(path)
}

/// Accept a single ASCII character, with `\t` and `tab` spelling a tab
fn parse_delimiter(raw: &str) -> Result<u8, String> {
    if matches!(raw, "\\t" | "tab") {
        return Ok(b'\t');
    }

    match raw.as_bytes() {
        [byte] if byte.is_ascii() && *byte != b'\n' && *byte != b'\r' => Ok(*byte),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got '{raw}'"
        )),
    }
}
