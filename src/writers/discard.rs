//! Discard sink

use crate::core::Sink;
use std::io;

/// Accepts and drops every write
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl DiscardSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for DiscardSink {
    fn write_all(&self, _buf: &[u8]) -> io::Result<()> {
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "discard"
    }
}
