//! Formatter implementations and the configuration-driven selector

pub mod json;
pub mod prefixed;

pub use json::JsonFormatter;
pub use prefixed::PrefixedFormatter;

pub use crate::core::Formatter;
use crate::core::{LogEntry, Result, Sink, TimestampFormat};

/// The formatter an engine is configured with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatterKind {
    /// Machine-parseable JSON lines
    Structured(JsonFormatter),

    /// Human-oriented prefixed/colorized text
    Prefixed(PrefixedFormatter),
}

impl FormatterKind {
    pub fn is_structured(&self) -> bool {
        matches!(self, FormatterKind::Structured(_))
    }
}

impl Default for FormatterKind {
    fn default() -> Self {
        FormatterKind::Prefixed(PrefixedFormatter::default())
    }
}

impl Formatter for FormatterKind {
    fn format(&self, entry: &LogEntry, output: &dyn Sink) -> Result<Vec<u8>> {
        match self {
            FormatterKind::Structured(json) => json.format(entry, output),
            FormatterKind::Prefixed(prefixed) => prefixed.format(entry, output),
        }
    }

    fn name(&self) -> &str {
        match self {
            FormatterKind::Structured(json) => json.name(),
            FormatterKind::Prefixed(prefixed) => prefixed.name(),
        }
    }
}

/// Choose the formatter for a configuration.
///
/// Both variants stamp records with `%Y-%m-%d %H:%M:%S`. The structured
/// formatter always includes the timestamp, escapes HTML and writes compact
/// JSON; the prefixed formatter honors the color and formatting overrides.
pub fn select_formatter(
    structured: bool,
    force_colors: bool,
    force_formatting: bool,
) -> FormatterKind {
    if structured {
        FormatterKind::Structured(JsonFormatter {
            timestamp_format: TimestampFormat::Standard,
            disable_timestamp: false,
            disable_html_escape: false,
            pretty_print: false,
        })
    } else {
        FormatterKind::Prefixed(PrefixedFormatter {
            timestamp_format: TimestampFormat::Standard,
            force_colors,
            disable_colors: false,
            force_formatting,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_selection() {
        let selected = select_formatter(true, true, true);
        match selected {
            FormatterKind::Structured(json) => {
                assert_eq!(json.timestamp_format, TimestampFormat::Standard);
                assert!(!json.disable_timestamp);
                assert!(!json.disable_html_escape);
                assert!(!json.pretty_print);
            }
            other => panic!("expected structured formatter, got {:?}", other),
        }
    }

    #[test]
    fn test_prefixed_selection_carries_overrides() {
        let selected = select_formatter(false, true, false);
        assert!(!selected.is_structured());
        match selected {
            FormatterKind::Prefixed(prefixed) => {
                assert!(prefixed.force_colors);
                assert!(!prefixed.force_formatting);
                assert_eq!(prefixed.timestamp_format, TimestampFormat::Standard);
            }
            other => panic!("expected prefixed formatter, got {:?}", other),
        }
    }

    #[test]
    fn test_selection_is_deterministic() {
        assert_eq!(select_formatter(false, false, true), select_formatter(false, false, true));
        assert_eq!(select_formatter(true, false, false).name(), "json");
        assert_eq!(select_formatter(false, false, false).name(), "prefixed");
    }
}
