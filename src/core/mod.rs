//! Core backend types and traits

pub mod engine;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod metrics;
pub mod sink;
pub mod timestamp;

pub use engine::{Engine, Entry};
pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fields};
pub use formatter::Formatter;
pub use log_entry::{Caller, LogEntry};
pub use log_level::LogLevel;
pub use metrics::EngineMetrics;
pub use sink::{Output, Sink};
pub use timestamp::{TimestampFormat, DEFAULT_TIMESTAMP_FORMAT};
