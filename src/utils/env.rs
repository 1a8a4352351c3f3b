//! Environment and `.env` file handling utilities
//!
//! Reads the optional local environment file and collects process
//! environment variables so settings can be built from plain key/value pairs.

use crate::error::{DataError, Result};
use std::{env, fs, io, path::Path};
use tracing::{debug, instrument};

/// Default name of the local environment file
pub const ENV_FILE: &str = ".env";

/// Read an environment file if it exists
///
/// A missing file is not an error and yields `None`.
#[instrument]
pub fn read_env_file(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!("Loaded environment file: {}", path.display());
            Ok(Some(content))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No environment file at {}", path.display());
            Ok(None)
        }
        Err(e) => Err(DataError::config_with_source(
            format!("Failed to read environment file {}", path.display()),
            e,
        )),
    }
}

/// Parse environment file content into key/value pairs, in file order
pub fn parse_env_content(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            pairs.push((key.to_string(), unquote(value.trim()).to_string()));
        }
    }

    pairs
}

/// Strip one pair of matching surrounding quotes
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Snapshot of the process environment, skipping non-UTF-8 entries
pub fn process_vars() -> Vec<(String, String)> {
    env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_env_content() {
        let content = r#"
# project settings
PROJECT_NAME="demo project"
export LOG_LEVEL=debug
QUOTED='single'
NOT_A_PAIR
=orphan
"#;
        let pairs = parse_env_content(content);

        assert_eq!(
            pairs,
            vec![
                ("PROJECT_NAME".to_string(), "demo project".to_string()),
                ("LOG_LEVEL".to_string(), "debug".to_string()),
                ("QUOTED".to_string(), "single".to_string()),
            ]
        );
    }

    #[test]
    fn test_unquote_leaves_unbalanced_quotes() {
        assert_eq!(unquote("\"open"), "\"open");
        assert_eq!(unquote("'mixed\""), "'mixed\"");
        assert_eq!(unquote("\"\""), "");
    }

    #[test]
    fn test_read_missing_env_file() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = read_env_file(&temp_dir.path().join(ENV_FILE)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_read_existing_env_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(ENV_FILE);
        fs::write(&path, "PROJECT_NAME=demo\n").unwrap();

        let loaded = read_env_file(&path).unwrap();
        assert_eq!(loaded.as_deref(), Some("PROJECT_NAME=demo\n"));
    }

    #[test]
    fn test_read_env_file_that_is_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_env_file(temp_dir.path()).unwrap_err();
        assert!(matches!(err, DataError::Config { .. }));
    }
}
