//! Console configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Settings for the console front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print views as JSON.
    #[serde(default)]
    json: bool,

    /// Number empty cells with their index.
    #[serde(default = "default_show_indices")]
    show_indices: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_show_indices() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
            show_indices: default_show_indices(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Forces JSON output on.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json |= json;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_path_uses_defaults() {
        let config = ConsoleConfig::load(None).unwrap();
        assert_eq!(config.log_filter(), "warn");
        assert!(!*config.json());
        assert!(*config.show_indices());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "json = true").unwrap();

        let config = ConsoleConfig::load(Some(file.path())).unwrap();
        assert!(*config.json());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_unreadable_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConsoleConfig::load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_bad_toml_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "show_indices = \"maybe\"").unwrap();
        let err = ConsoleConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_cli_flag_forces_json() {
        assert!(*ConsoleConfig::default().with_json(true).json());
        assert!(!*ConsoleConfig::default().with_json(false).json());
    }
}
