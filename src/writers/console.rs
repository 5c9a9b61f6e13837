//! Console sink implementation

use crate::core::Sink;
use std::io::{self, IsTerminal, Write};

/// Writes records to the process's standard error stream
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        io::stderr().lock().flush()
    }

    fn name(&self) -> &str {
        "console"
    }

    fn is_terminal(&self) -> bool {
        io::stderr().is_terminal()
    }
}
