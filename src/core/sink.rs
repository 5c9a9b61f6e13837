//! Sink trait for log output destinations

use std::io;
use std::sync::Arc;

/// A destination that accepts rendered records as byte writes.
///
/// Writes go through a shared reference so one sink can be used from every
/// logger derived from the same engine.
pub trait Sink: Send + Sync {
    fn write_all(&self, buf: &[u8]) -> io::Result<()>;
    fn flush(&self) -> io::Result<()>;
    fn name(&self) -> &str;

    /// Whether the sink is an interactive terminal
    fn is_terminal(&self) -> bool {
        false
    }
}

/// Shared handle to the active sink
pub type Output = Arc<dyn Sink>;
