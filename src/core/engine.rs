//! Backend logging engine
//!
//! An `Engine` is an independently configured instance: level threshold,
//! formatter, active sink and locking policy all live on the instance, never
//! in process-wide state. Any number of engines with different settings can
//! coexist.

use super::{
    fields::Fields,
    formatter::Formatter,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::EngineMetrics,
    sink::Output,
};
use crate::formatters::FormatterKind;
use crate::writers::ConsoleSink;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct Engine {
    level: RwLock<LogLevel>,
    formatter: RwLock<Arc<dyn Formatter>>,
    output: RwLock<Output>,
    report_caller: AtomicBool,
    no_lock: AtomicBool,
    /// Serializes format+write so records from concurrent callers never interleave
    write_lock: Mutex<()>,
    metrics: EngineMetrics,
}

impl Engine {
    /// Engine writing prefixed text to stderr at info level
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: RwLock::new(LogLevel::Info),
            formatter: RwLock::new(Arc::new(FormatterKind::default())),
            output: RwLock::new(Arc::new(ConsoleSink::new())),
            report_caller: AtomicBool::new(false),
            no_lock: AtomicBool::new(false),
            write_lock: Mutex::new(()),
            metrics: EngineMetrics::new(),
        }
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    #[inline]
    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Replace the active sink; later records go only to `output`
    pub fn set_output(&self, output: Output) {
        let _guard = self.write_lock.lock();
        *self.output.write() = output;
    }

    pub fn output(&self) -> Output {
        self.output.read().clone()
    }

    pub fn set_formatter(&self, formatter: impl Formatter + 'static) {
        *self.formatter.write() = Arc::new(formatter);
    }

    pub fn formatter_name(&self) -> String {
        self.formatter.read().name().to_string()
    }

    pub fn set_report_caller(&self, enabled: bool) {
        self.report_caller.store(enabled, Ordering::Relaxed);
    }

    pub fn reports_caller(&self) -> bool {
        self.report_caller.load(Ordering::Relaxed)
    }

    /// Stop serializing writes.
    ///
    /// Only safe to rely on when the sink tolerates concurrent unsynchronized
    /// writes or the application serializes its own logging calls; otherwise
    /// records from different threads may interleave.
    pub fn set_no_lock(&self) {
        self.no_lock.store(true, Ordering::Relaxed);
    }

    pub fn is_no_lock(&self) -> bool {
        self.no_lock.load(Ordering::Relaxed)
    }

    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    /// Derive an entry carrying `fields`
    pub fn with_fields(self: &Arc<Self>, fields: Fields) -> Entry {
        Entry::new(Arc::clone(self), fields)
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.emit(level, &Fields::new(), args);
    }

    pub fn flush(&self) -> std::io::Result<()> {
        self.output().flush()
    }

    /// Render and write one record.
    ///
    /// Failures are reported on stderr and counted; they never reach the caller.
    #[track_caller]
    pub(crate) fn emit(&self, level: LogLevel, fields: &Fields, args: fmt::Arguments<'_>) {
        if !self.is_level_enabled(level) {
            return;
        }

        let mut entry = LogEntry::new(level, args.to_string()).with_fields(fields.clone());
        if self.reports_caller() {
            entry = entry.with_caller(Location::caller());
        }

        let _guard = if self.is_no_lock() {
            None
        } else {
            Some(self.write_lock.lock())
        };

        let output = self.output();
        let formatter = self.formatter.read().clone();

        let bytes = match formatter.format(&entry, output.as_ref()) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.metrics.record_format_failure();
                eprintln!("[LOGGER ERROR] Formatter '{}' failed: {}", formatter.name(), e);
                return;
            }
        };

        match output.write_all(&bytes) {
            Ok(()) => self.metrics.record_logged(),
            Err(e) => {
                self.metrics.record_write_failure();
                eprintln!("[LOGGER ERROR] Failed to write to '{}': {}", output.name(), e);
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("level", &self.level())
            .field("formatter", &self.formatter_name())
            .field("output", &self.output().name())
            .field("report_caller", &self.reports_caller())
            .field("no_lock", &self.is_no_lock())
            .finish()
    }
}

/// An engine reference with pre-bound fields.
///
/// Cloning is cheap; every clone shares the engine, so sink and level changes
/// on the engine are seen by all entries derived from it.
#[derive(Clone)]
pub struct Entry {
    engine: Arc<Engine>,
    fields: Fields,
}

impl Entry {
    pub fn new(engine: Arc<Engine>, fields: Fields) -> Self {
        Self { engine, fields }
    }

    /// Derive a new entry with `fields` layered over this entry's fields
    #[must_use]
    pub fn with_fields(&self, fields: Fields) -> Entry {
        let mut merged = self.fields.clone();
        merged.merge(fields);
        Entry::new(Arc::clone(&self.engine), merged)
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn engine(&self) -> &Arc<Engine> {
        &self.engine
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.engine.emit(level, &self.fields, args);
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
