//! Declarative logger configuration

use super::level::Level;
use crate::core::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything needed to build a [`LoggerFacade`](super::LoggerFacade).
///
/// Missing keys take their [`Default`] values when deserialized:
///
/// ```
/// use rust_logger_adapter::{Config, Level};
///
/// let config = Config::from_json_str(r#"{ "structured": true, "level": "debug" }"#).unwrap();
/// assert!(config.structured);
/// assert!(config.enable_console);
/// assert_eq!(config.level, Level::DEBUG);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub enable_console: bool,
    /// Log file to create or append to; an empty path means no file
    pub file_location: Option<PathBuf>,
    /// JSON lines instead of prefixed text
    pub structured: bool,
    pub level: Level,
    pub capture_caller_info: bool,
    /// Disable the engine's write serialization
    pub no_lock: bool,
    pub force_colors: bool,
    pub force_formatting: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_console: true,
            file_location: None,
            structured: false,
            level: Level::INFO,
            capture_caller_info: false,
            no_lock: false,
            force_colors: true,
            force_formatting: true,
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LoggerError::config("Config", e.to_string()))
    }

    /// The file target, if one is set and non-empty
    pub fn file_target(&self) -> Option<&Path> {
        self.file_location
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.enable_console);
        assert!(config.file_target().is_none());
        assert!(!config.structured);
        assert_eq!(config.level, Level::INFO);
        assert!(!config.capture_caller_info);
        assert!(!config.no_lock);
        assert!(config.force_colors);
        assert!(config.force_formatting);
    }

    #[test]
    fn test_empty_file_location_means_no_file() {
        let config = Config {
            file_location: Some(PathBuf::new()),
            ..Config::default()
        };
        assert!(config.file_target().is_none());
    }

    #[test]
    fn test_invalid_json_is_configuration_error() {
        let err = Config::from_json_str("{ not json").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_json_round_trip_keeps_unknown_level() {
        let config = Config {
            level: Level::new("verbose"),
            file_location: Some(PathBuf::from("/tmp/app.log")),
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json_str(&json).unwrap(), config);
    }
}
