//! Command implementations for the CLI

use crate::{
    cli::{Command, EXIT_FAILURE, EXIT_SUCCESS, OutputFormat},
    config::Settings,
    core::{FileSummarizer, Summary},
};
use anyhow::Context;
use std::{io::Write, path::Path};
use tracing::{info, instrument};

/// Compiler version recorded by the build script
pub const RUSTC_VERSION: &str = env!("DATAPIPE_RUSTC_VERSION");

/// Execute the appropriate command based on CLI arguments
///
/// Returns the exit status for the command. `Err` is reserved for failures
/// writing to `out` or `err`.
#[instrument(skip(settings, out, err))]
pub fn execute_command(
    settings: &Settings,
    command: &Command,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<u8> {
    match command {
        Command::Process {
            filepath,
            head,
            delimiter,
            format,
        } => {
            let summarizer = FileSummarizer::new().with_delimiter(*delimiter);
            execute_process_command(&summarizer, filepath, *head, *format, out, err)
        }
        Command::Version => execute_version_command(settings, out),
    }
}

/// Execute the process command
#[instrument(skip(summarizer, out, err))]
fn execute_process_command(
    summarizer: &FileSummarizer,
    filepath: &Path,
    head: usize,
    format: OutputFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<u8> {
    info!("Processing file: {}", filepath.display());

    let Ok(summary) = summarizer.summarize(filepath, head) else {
        // Details were already logged by the summarizer
        writeln!(
            err,
            "Error: Could not process file '{}'. See logs for details.",
            filepath.display()
        )
        .context("Failed to write error message")?;
        return Ok(EXIT_FAILURE);
    };

    let written = match format {
        OutputFormat::Text => write_text_summary(&summary, head, out),
        OutputFormat::Json => write_json_summary(&summary, out),
    };
    written.context("Failed to write summary")?;

    info!(
        "Processed {}: {} rows, {} columns",
        filepath.display(),
        summary.rows,
        summary.columns
    );
    Ok(EXIT_SUCCESS)
}

fn write_text_summary(summary: &Summary, head: usize, out: &mut dyn Write) -> anyhow::Result<()> {
    let (rows, columns) = summary.shape();
    writeln!(out, "Successfully loaded {}", summary.path.display())?;
    writeln!(out, "Shape: {rows} rows, {columns} columns")?;
    writeln!(out)?;
    writeln!(out, "First {head} rows:")?;
    writeln!(out, "{}", summary.render_head())?;
    out.flush()?;
    Ok(())
}

fn write_json_summary(summary: &Summary, out: &mut dyn Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Execute the version command
#[instrument(skip(settings, out))]
fn execute_version_command(settings: &Settings, out: &mut dyn Write) -> anyhow::Result<u8> {
    writeln!(
        out,
        "{} version {}",
        settings.project_name,
        env!("CARGO_PKG_VERSION")
    )
    .and_then(|()| writeln!(out, "Rust version: {RUSTC_VERSION}"))
    .and_then(|()| out.flush())
    .context("Failed to write version information")?;

    Ok(EXIT_SUCCESS)
}
