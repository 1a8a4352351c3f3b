//! Command-line interface module
//!
//! Provides argument parsing, logging initialization and command dispatch.

pub mod args;
pub mod commands;

pub use args::{Args, Command, OutputFormat};
pub use commands::execute_command;

use crate::{
    config::{LogLevel, Settings},
    setup_logging,
};
use clap::Parser;
use std::{ffi::OsString, io::Write};
use tracing::{error, warn};

/// Command completed
pub const EXIT_SUCCESS: u8 = 0;
/// The input file could not be processed, or output could not be written
pub const EXIT_FAILURE: u8 = 1;
/// The `.env` file exists but could not be read
pub const EXIT_CONFIG: u8 = 2;

/// Parse `argv`, initialize logging and run the selected command
///
/// Argument errors are rendered by clap: help and version requests go to
/// `out` with status 0, everything else goes to `err` with clap's usage
/// status (2).
pub fn run<I, T>(argv: I, settings: &Settings, out: &mut dyn Write, err: &mut dyn Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(parse_error) => {
            let sink: &mut dyn Write = if parse_error.use_stderr() {
                &mut *err
            } else {
                &mut *out
            };
            // Nothing sensible is left to do if the terminal is gone
            let _ = write!(sink, "{}", parse_error.render());
            let _ = sink.flush();
            return u8::try_from(parse_error.exit_code()).unwrap_or(EXIT_FAILURE);
        }
    };

    let (level, rejected) = match settings.effective_log_level(args.log_level) {
        Ok(level) => (level, None),
        Err(e) => (LogLevel::default(), Some(e)),
    };
    if let Err(e) = setup_logging(level) {
        let _ = writeln!(err, "Error: {e:#}");
        return EXIT_FAILURE;
    }
    if let Some(e) = rejected {
        warn!("{}; using {}", e, level);
    }

    match execute_command(settings, &args.command, out, err) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            let _ = writeln!(err, "Error: {e:#}");
            EXIT_FAILURE
        }
    }
}
