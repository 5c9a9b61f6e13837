//! Timestamp formatting utilities
//!
//! Provides the timestamp layouts the formatters can render. Records are
//! stamped in local time.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Default layout for both formatters: `2025-01-08 10:30:45`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_logger_adapter::core::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Standard.format(&at), "2025-01-08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45`
    #[default]
    Standard,

    /// RFC 3339 format: `2025-01-08T10:30:45+01:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_logger_adapter::core::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Local>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Standard => datetime.format(DEFAULT_TIMESTAMP_FORMAT).to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix | TimestampFormat::UnixMillis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn test_standard_format() {
        assert_eq!(TimestampFormat::Standard.format(&fixed()), "2025-01-08 10:30:45");
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d".to_string());
        assert_eq!(format.format(&fixed()), "2025/01/08");
    }

    #[test]
    fn test_numeric_formats() {
        let at = fixed();
        assert!(TimestampFormat::Unix.is_numeric());
        assert!(!TimestampFormat::Standard.is_numeric());
        assert_eq!(TimestampFormat::Unix.format(&at), at.timestamp().to_string());
        assert_eq!(
            TimestampFormat::UnixMillis.format(&at),
            at.timestamp_millis().to_string()
        );
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Standard);
    }
}
