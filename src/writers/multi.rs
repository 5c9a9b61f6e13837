//! Fan-out sink

use crate::core::{Output, Sink};
use std::io;

/// Writes every record to each sink in order.
///
/// A failing sink does not stop the remaining sinks from receiving the
/// record; the first error encountered is returned once all have been tried.
pub struct MultiSink {
    sinks: Vec<Output>,
}

impl MultiSink {
    pub fn new(sinks: Vec<Output>) -> Self {
        Self { sinks }
    }

    pub fn sinks(&self) -> &[Output] {
        &self.sinks
    }
}

impl Sink for MultiSink {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(e) = sink.write_all(buf) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn flush(&self) -> io::Result<()> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(e) = sink.flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn name(&self) -> &str {
        "multi"
    }

    fn is_terminal(&self) -> bool {
        self.sinks.iter().any(|sink| sink.is_terminal())
    }
}
