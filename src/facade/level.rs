//! Abstract severity and its mapping onto the backend

use crate::core::LogLevel;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Severity as named by application configuration.
///
/// Any name can be represented so configuration files round-trip, but only
/// `trace`, `debug`, `info`, `warn` (alias `warning`) and `error` are
/// accepted when a logger is built. Matching is case-insensitive.
///
/// ```
/// use rust_logger_adapter::{map_level, Level, LogLevel};
///
/// assert_eq!(map_level(&Level::WARN), LogLevel::Warn);
/// assert_eq!(map_level(&Level::new("ERROR")), LogLevel::Error);
/// assert!(!Level::new("verbose").is_known());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(Cow<'static, str>);

impl Level {
    pub const TRACE: Level = Level(Cow::Borrowed("trace"));
    pub const DEBUG: Level = Level(Cow::Borrowed("debug"));
    pub const INFO: Level = Level(Cow::Borrowed("info"));
    pub const WARN: Level = Level(Cow::Borrowed("warn"));
    pub const ERROR: Level = Level(Cow::Borrowed("error"));

    pub fn new(name: impl Into<String>) -> Self {
        Level(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `map_level` recognizes this name
    pub fn is_known(&self) -> bool {
        map_level(self) != LogLevel::Fatal
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Level {
    fn from(name: &str) -> Self {
        Level::new(name)
    }
}

impl From<String> for Level {
    fn from(name: String) -> Self {
        Level::new(name)
    }
}

/// Translate an abstract level into the backend level.
///
/// Never fails directly: names outside the five known severities map to
/// [`LogLevel::Fatal`], which the logger constructor rejects.
pub fn map_level(level: &Level) -> LogLevel {
    match level.as_str().to_ascii_lowercase().as_str() {
        "error" => LogLevel::Error,
        "warn" | "warning" => LogLevel::Warn,
        "info" => LogLevel::Info,
        "debug" => LogLevel::Debug,
        "trace" => LogLevel::Trace,
        _ => LogLevel::Fatal,
    }
}
