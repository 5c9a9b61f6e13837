//! Sinks backed by arbitrary `io::Write` values

use crate::core::Sink;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Adapts any `io::Write` into a [`Sink`] by guarding it with a mutex
///
/// # Example
///
/// ```
/// use rust_logger_adapter::core::Sink;
/// use rust_logger_adapter::writers::IoSink;
///
/// let sink = IoSink::new(Vec::new());
/// sink.write_all(b"hello").unwrap();
/// assert_eq!(sink.with_inner(|buf| buf.len()), 5);
/// ```
pub struct IoSink<W> {
    inner: Mutex<W>,
    name: String,
}

impl<W: Write + Send> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self::named("io", writer)
    }

    pub fn named(name: impl Into<String>, writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
            name: name.into(),
        }
    }

    /// Run `f` against the wrapped writer
    pub fn with_inner<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

impl<W: Write + Send> Sink for IoSink<W> {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        self.inner.lock().write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        self.inner.lock().flush()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// In-memory sink, handy for capturing output
pub struct MemorySink(IoSink<Vec<u8>>);

impl MemorySink {
    pub fn new() -> Self {
        Self(IoSink::named("memory", Vec::new()))
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        self.0.with_inner(|buf| String::from_utf8_lossy(buf).into_owned())
    }

    /// Written records, one per line
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.0.with_inner(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.0.inner.lock().clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        self.0.write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        self.0.flush()
    }

    fn name(&self) -> &str {
        self.0.name()
    }
}
