//! Engine metrics for observability
//!
//! Write failures never reach the caller of a logging method, so these
//! counters are the only place they become visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters maintained by an [`Engine`](super::Engine)
///
/// # Example
///
/// ```
/// use rust_logger_adapter::core::EngineMetrics;
///
/// let metrics = EngineMetrics::new();
/// metrics.record_logged();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct EngineMetrics {
    /// Records rendered and written successfully
    total_logged: AtomicU64,

    /// Records whose bytes the sink rejected
    write_failures: AtomicU64,

    /// Records the formatter could not render
    format_failures: AtomicU64,
}

impl EngineMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            format_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn format_failures(&self) -> u64 {
        self.format_failures.load(Ordering::Relaxed)
    }

    /// Records that did not make it to the sink for any reason
    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.write_failures() + self.format_failures()
    }

    /// Record a successfully written entry
    #[inline]
    pub fn record_logged(&self) {
        self.total_logged.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a sink write failure, returning the previous count
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a formatter failure, returning the previous count
    #[inline]
    pub fn record_format_failure(&self) -> u64 {
        self.format_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.total_logged.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.format_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for EngineMetrics {
    fn default() -> Self {
        Self::new()
    }
}
