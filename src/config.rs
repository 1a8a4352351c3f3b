//! Configuration management for datapipe
//!
//! Settings come from an optional local `.env` file overlaid by the process
//! environment. Only `PROJECT_NAME` and `LOG_LEVEL` are recognized; any other
//! key is ignored.

use crate::{
    error::{DataError, Result},
    utils::env::{ENV_FILE, parse_env_content, process_vars, read_env_file},
};
use clap::ValueEnum;
use std::{fmt, path::Path, str::FromStr};
use tracing::debug;

const PROJECT_NAME_KEY: &str = "PROJECT_NAME";
const LOG_LEVEL_KEY: &str = "LOG_LEVEL";

/// Logging verbosity accepted on the command line and in settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    #[value(name = "DEBUG")]
    Debug,
    #[default]
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
    #[value(name = "CRITICAL")]
    Critical,
}

impl LogLevel {
    /// All levels, most verbose first
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Canonical upper-case name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// `EnvFilter` directive for this level
    ///
    /// `tracing` tops out at `error`, so CRITICAL shares it.
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = DataError;

    fn from_str(raw: &str) -> Result<Self> {
        let wanted = raw.trim();
        if wanted.eq_ignore_ascii_case("WARN") {
            return Ok(Self::Warning);
        }
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DataError::config(format!(
                    "invalid {LOG_LEVEL_KEY} '{raw}'; expected one of DEBUG, INFO, WARNING, ERROR, CRITICAL"
                ))
            })
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Name shown by the `version` subcommand
    pub project_name: String,
    /// Raw `LOG_LEVEL` value, used when `--log-level` is not given
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_name: env!("CARGO_PKG_NAME").to_string(),
            log_level: None,
        }
    }
}

impl Settings {
    /// Load settings from `./.env` and the process environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(ENV_FILE))
    }

    /// Load settings from the given environment file and the process environment
    pub fn load_from(env_file: &Path) -> Result<Self> {
        let file_content = read_env_file(env_file)?;
        Self::from_sources(file_content.as_deref(), process_vars())
    }

    /// Build settings from env-file content and environment variables
    ///
    /// Later sources win: file entries are applied first, then `vars`.
    /// Keys match case-insensitively.
    pub fn from_sources<I>(env_file: Option<&str>, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut project_name = None;
        let mut log_level = None;

        let file_pairs = env_file.map(parse_env_content).unwrap_or_default();
        for (key, value) in file_pairs.into_iter().chain(vars) {
            if key.eq_ignore_ascii_case(PROJECT_NAME_KEY) {
                project_name = Some(value);
            } else if key.eq_ignore_ascii_case(LOG_LEVEL_KEY) {
                log_level = Some(value);
            }
        }

        let settings = Self {
            project_name: project_name.unwrap_or_else(|| Self::default().project_name),
            log_level,
        };

        debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }

    /// Pick the effective log level, letting the command line override settings
    ///
    /// The `LOG_LEVEL` setting is only parsed when no flag was given. An
    /// unparsable value is returned as a configuration error so the caller
    /// can fall back to the default level.
    pub fn effective_log_level(&self, cli_level: Option<LogLevel>) -> Result<LogLevel> {
        if let Some(level) = cli_level {
            return Ok(level);
        }
        match self.log_level.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(LogLevel::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings = Settings::from_sources(None, Vec::new()).unwrap();
        assert_eq!(settings.project_name, "datapipe");
        assert_eq!(settings.log_level, None);
        assert_eq!(settings.effective_log_level(None).unwrap(), LogLevel::Info);
    }

    #[test]
    fn test_env_file_values() {
        let content = "PROJECT_NAME=demo\nLOG_LEVEL=WARNING\n";
        let settings = Settings::from_sources(Some(content), Vec::new()).unwrap();
        assert_eq!(settings.project_name, "demo");
        assert_eq!(settings.effective_log_level(None).unwrap(), LogLevel::Warning);
    }

    #[test]
    fn test_environment_overrides_env_file() {
        let content = "PROJECT_NAME=from-file\nLOG_LEVEL=ERROR\n";
        let settings =
            Settings::from_sources(Some(content), vars(&[("PROJECT_NAME", "from-env")])).unwrap();
        assert_eq!(settings.project_name, "from-env");
        assert_eq!(settings.effective_log_level(None).unwrap(), LogLevel::Error);
    }

    #[test]
    fn test_keys_are_case_insensitive_and_unknown_keys_ignored() {
        let settings = Settings::from_sources(
            None,
            vars(&[
                ("log_level", "debug"),
                ("Project_Name", "mixed"),
                ("DATABASE_URL", "postgres://nowhere"),
            ]),
        )
        .unwrap();
        assert_eq!(settings.project_name, "mixed");
        assert_eq!(settings.effective_log_level(None).unwrap(), LogLevel::Debug);
    }

    #[test]
    fn test_invalid_log_level_only_fails_without_flag() {
        let settings = Settings::from_sources(None, vars(&[("LOG_LEVEL", "LOUD")])).unwrap();
        assert_eq!(settings.log_level.as_deref(), Some("LOUD"));

        let err = settings.effective_log_level(None).unwrap_err();
        assert!(matches!(err, DataError::Config { .. }));
        assert!(err.to_string().contains("LOUD"));

        assert_eq!(
            settings.effective_log_level(Some(LogLevel::Debug)).unwrap(),
            LogLevel::Debug
        );
    }

    #[test]
    fn test_load_from_env_file_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "# comment\nPROJECT_NAME=\"on disk\"\n").unwrap();

        let content = read_env_file(&path).unwrap();
        let settings = Settings::from_sources(content.as_deref(), Vec::new()).unwrap();
        assert_eq!(settings.project_name, "on disk");
        assert_eq!(settings.log_level, None);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("critical".parse::<LogLevel>().unwrap(), LogLevel::Critical);
        assert_eq!(" INFO ".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert!("VERBOSE".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_directives() {
        assert_eq!(LogLevel::Warning.as_directive(), "warn");
        assert_eq!(LogLevel::Critical.as_directive(), "error");
        assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
    }

    #[test]
    fn test_cli_level_overrides_settings() {
        let settings = Settings {
            log_level: Some("ERROR".to_string()),
            ..Settings::default()
        };
        assert_eq!(settings.effective_log_level(None).unwrap(), LogLevel::Error);
        assert_eq!(
            settings.effective_log_level(Some(LogLevel::Debug)).unwrap(),
            LogLevel::Debug
        );
    }
}
