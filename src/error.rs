//! Error types for datapipe
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for loading and summarizing data files
#[derive(Error, Debug)]
pub enum DataError {
    /// The file could not be opened or read
    #[error("File system error: read failed on {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The delimited reader rejected the content (bad UTF-8, broken quoting)
    #[error("Parse error in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A record carries more fields than the header declares
    #[error("Error tokenizing {path}: expected {expected} fields in line {line}, saw {found}")]
    Malformed {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// The file has no header row to take columns from
    #[error("No columns to parse from {path}")]
    Empty { path: PathBuf },

    /// Settings errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DataError {
    /// Create a new read error
    pub fn read<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a new parse error
    pub fn parse<P: Into<PathBuf>>(path: P, source: csv::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Create a new malformed-record error
    pub fn malformed<P: Into<PathBuf>>(path: P, line: u64, expected: usize, found: usize) -> Self {
        Self::Malformed {
            path: path.into(),
            line,
            expected,
            found,
        }
    }

    /// Create a new empty-file error
    pub fn empty<P: Into<PathBuf>>(path: P) -> Self {
        Self::Empty { path: path.into() }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error wrapping an underlying cause
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Render the error together with every `source` in its chain
    pub fn chain(&self) -> String {
        let mut rendered = self.to_string();
        let mut current = std::error::Error::source(self);
        while let Some(cause) = current {
            rendered.push_str(": ");
            rendered.push_str(&cause.to_string());
            current = cause.source();
        }
        rendered
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DataError>;
