//! # datapipe
//!
//! A small tool for taking a first look at delimited data files.
//! This library loads a CSV/TSV file, counts its rows and columns, and
//! renders a preview of the leading rows.
//!
//! ## Features
//!
//! - Header-aware CSV/TSV loading with clear failure reporting
//! - Text and JSON summaries
//! - Settings from the environment and an optional `.env` file
//! - Structured logging with a runtime-adjustable level
//!
//! ## Example
//!
//! ```no_run
//! use datapipe::core::FileSummarizer;
//!
//! let summary = FileSummarizer::new().summarize("data.csv", 5)?;
//! println!("Shape: {} rows, {} columns", summary.rows, summary.columns);
//! println!("{}", summary.render_head());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use config::LogLevel;
use std::{
    io::IsTerminal,
    sync::{Mutex, PoisonError},
};
use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

static LOG_FILTER: Mutex<Option<reload::Handle<EnvFilter, Registry>>> = Mutex::new(None);

/// Initialize logging at the given level
///
/// The first call installs the global subscriber, writing to stdout. Later
/// calls swap the level filter of that subscriber.
pub fn setup_logging(level: LogLevel) -> Result<()> {
    let filter = EnvFilter::new(level.as_directive());
    let mut installed = LOG_FILTER.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(handle) = installed.as_ref() {
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("Failed to change log level: {}", e))?;
        return Ok(());
    }

    let (filter_layer, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(std::io::stdout().is_terminal())
                .with_target(true)
                .with_level(true)
                .compact(),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    *installed = Some(handle);
    Ok(())
}
