//! Human-readable prefixed formatter
//!
//! Two layouts:
//! - formatted: `[2025-01-08 10:30:45]  INFO db: connected pool=4`
//! - logfmt: `time="2025-01-08 10:30:45" level=info msg=connected pool=4`
//!
//! The formatted layout is used when the destination is a terminal or when
//! formatting is forced. A `prefix` field is lifted out of the trailing
//! fields and printed in front of the message.
//!
//! Control characters in messages, keys and values are escaped in both
//! layouts, so a record never spans more than one line.

use crate::core::{FieldValue, Formatter, LogEntry, Result, Sink, TimestampFormat};
use colored::Color;
use std::fmt::Write as _;

const PREFIX_FIELD: &str = "prefix";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixedFormatter {
    pub timestamp_format: TimestampFormat,
    /// Colorize even when the destination is not a terminal
    pub force_colors: bool,
    /// Never colorize terminal output (ignored when colors are forced)
    pub disable_colors: bool,
    /// Use the formatted layout even when the destination is not a terminal
    pub force_formatting: bool,
}

impl PrefixedFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_force_colors(mut self, force: bool) -> Self {
        self.force_colors = force;
        self
    }

    #[must_use]
    pub fn with_force_formatting(mut self, force: bool) -> Self {
        self.force_formatting = force;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn is_formatted(&self, terminal: bool) -> bool {
        self.force_formatting || terminal
    }

    fn is_colored(&self, terminal: bool) -> bool {
        self.force_colors || (terminal && !self.disable_colors)
    }

    fn format_prefixed(&self, entry: &LogEntry, colored: bool) -> String {
        let paint = |text: &str, color: Color| -> String {
            if colored {
                format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
            } else {
                text.to_string()
            }
        };
        let level_color = entry.level.color_code();

        let mut out = String::new();
        let timestamp = format!("[{}]", self.timestamp_format.format(&entry.timestamp));
        out.push_str(&paint(&timestamp, Color::BrightBlack));
        out.push(' ');
        out.push_str(&paint(&format!("{:>5}", entry.level.to_str()), level_color));
        out.push(' ');

        if let Some(prefix) = entry.fields.get(PREFIX_FIELD) {
            let prefix = escape_control(&prefix.to_string());
            out.push_str(&paint(&format!("{}:", prefix), Color::Cyan));
            out.push(' ');
        }
        out.push_str(&escape_control(&entry.message));

        for (key, value) in entry.fields.iter().filter(|(k, _)| k.as_str() != PREFIX_FIELD) {
            let key = escape_control(key);
            let _ = write!(out, " {}={}", paint(&key, level_color), format_value(value));
        }

        if let Some(ref caller) = entry.caller {
            let _ = write!(out, " ({})", escape_control(&caller.to_string()));
        }

        out
    }

    fn format_logfmt(&self, entry: &LogEntry) -> String {
        let mut parts = vec![
            format!(
                "time={}",
                quote_logfmt_value(&self.timestamp_format.format(&entry.timestamp))
            ),
            format!("level={}", entry.level.name()),
            format!("msg={}", escape_logfmt_value(&entry.message)),
        ];

        if let Some(ref caller) = entry.caller {
            parts.push(format!("file={}", escape_logfmt_value(&caller.to_string())));
        }

        for (key, value) in &entry.fields {
            parts.push(format!("{}={}", escape_logfmt_key(key), format_value(value)));
        }

        parts.join(" ")
    }
}

fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::String(s) => escape_logfmt_value(s),
        other => other.to_string(),
    }
}

/// Escape a logfmt key (remove spaces and special chars)
fn escape_logfmt_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}

/// Escape a logfmt value (quote if empty or contains spaces, quotes, `=`
/// or control characters)
fn escape_logfmt_value(value: &str) -> String {
    if value.is_empty() || value.contains([' ', '"', '=']) || value.contains(char::is_control) {
        quote_logfmt_value(value)
    } else {
        value.to_string()
    }
}

fn quote_logfmt_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c => push_escaped(&mut out, c),
        }
    }
    out.push('"');
    out
}

/// Escape newlines and other control characters that would break a record
fn escape_control(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        push_escaped(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        c if c.is_control() => {
            let _ = write!(out, "\\u{{{:04x}}}", c as u32);
        }
        c => out.push(c),
    }
}

impl Formatter for PrefixedFormatter {
    fn format(&self, entry: &LogEntry, output: &dyn Sink) -> Result<Vec<u8>> {
        let terminal = output.is_terminal();

        let mut line = if self.is_formatted(terminal) {
            self.format_prefixed(entry, self.is_colored(terminal))
        } else {
            self.format_logfmt(entry)
        };
        line.push('\n');

        Ok(line.into_bytes())
    }

    fn name(&self) -> &str {
        "prefixed"
    }
}
