//! JSON formatter for structured logging
//!
//! Writes each record as a single-line JSON object (JSONL format),
//! compatible with log aggregation tools like ELK, Loki, etc.

use crate::core::{Formatter, LogEntry, Result, Sink, TimestampFormat};
use serde_json::{Map, Value};

const FIELD_TIME: &str = "time";
const FIELD_MSG: &str = "msg";
const FIELD_LEVEL: &str = "level";
const FIELD_FILE: &str = "file";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonFormatter {
    pub timestamp_format: TimestampFormat,
    pub disable_timestamp: bool,
    /// Leave `<`, `>` and `&` unescaped inside strings
    pub disable_html_escape: bool,
    pub pretty_print: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    #[must_use]
    pub fn with_html_escape(mut self, escape: bool) -> Self {
        self.disable_html_escape = !escape;
        self
    }

    fn format_timestamp(&self, entry: &LogEntry) -> Value {
        match self.timestamp_format {
            TimestampFormat::Unix => Value::Number(entry.timestamp.timestamp().into()),
            TimestampFormat::UnixMillis => {
                Value::Number(entry.timestamp.timestamp_millis().into())
            }
            _ => Value::String(self.timestamp_format.format(&entry.timestamp)),
        }
    }
}

/// Move user fields that collide with reserved keys out of the way as `fields.<key>`
fn prefix_field_clashes(data: &mut Map<String, Value>, report_caller: bool) {
    let mut reserved = vec![FIELD_TIME, FIELD_MSG, FIELD_LEVEL];
    if report_caller {
        reserved.push(FIELD_FILE);
    }

    for key in reserved {
        if let Some(value) = data.remove(key) {
            data.insert(format!("fields.{}", key), value);
        }
    }
}

fn escape_html(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &LogEntry, _output: &dyn Sink) -> Result<Vec<u8>> {
        let mut data = Map::new();
        for (key, value) in &entry.fields {
            data.insert(key.clone(), value.to_json_value());
        }
        prefix_field_clashes(&mut data, entry.caller.is_some());

        if !self.disable_timestamp {
            data.insert(FIELD_TIME.to_string(), self.format_timestamp(entry));
        }
        data.insert(FIELD_MSG.to_string(), Value::String(entry.message.clone()));
        data.insert(
            FIELD_LEVEL.to_string(),
            Value::String(entry.level.name().to_string()),
        );
        if let Some(ref caller) = entry.caller {
            data.insert(FIELD_FILE.to_string(), Value::String(caller.to_string()));
        }

        let data = Value::Object(data);
        let mut json = if self.pretty_print {
            serde_json::to_string_pretty(&data)?
        } else {
            serde_json::to_string(&data)?
        };

        if !self.disable_html_escape {
            json = escape_html(&json);
        }
        json.push('\n');

        Ok(json.into_bytes())
    }

    fn name(&self) -> &str {
        "json"
    }
}
