//! Formatter trait for rendering log entries

use super::{error::Result, log_entry::LogEntry, sink::Sink};

/// Renders a record into the bytes written to the sink.
///
/// `output` is the sink the bytes are destined for; formatters that adapt to
/// terminal capabilities inspect it, others ignore it.
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &LogEntry, output: &dyn Sink) -> Result<Vec<u8>>;
    fn name(&self) -> &str;
}
