//! # Rust Logger Adapter
//!
//! A logging facade that turns a declarative [`Config`] into a live,
//! shareable logger, decoupling application code from formatting, level
//! mapping and output-destination details.
//!
//! ## Features
//!
//! - **Declarative setup**: console and/or file targets, JSON or prefixed text,
//!   level threshold, caller capture and locking policy from one `Config`
//! - **Structured context**: attach fields per record (`with_fields`) or bind
//!   them to a derived logger (`nested`)
//! - **Capability traits**: logging and output control are separate traits
//! - **No global state**: every logger owns an independently configured engine
//!
//! ```
//! use rust_logger_adapter::prelude::*;
//!
//! let logger = LoggerFacade::new(Config {
//!     enable_console: false,
//!     structured: true,
//!     ..Config::default()
//! })?;
//!
//! let request = logger.nested(fields! { "req" => "123" });
//! request.with_fields(fields! { "status" => 200 }).info("handled");
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod facade;
pub mod formatters;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{FieldValue, Fields, LogLevel, LoggerError, Output, Result, Sink};
    pub use crate::facade::{
        Config, Controller, FieldLogger, Level, Logger, LoggerBuilder, LoggerFacade,
        MessageLogger, NestedLogger,
    };
    pub use crate::fields;
    pub use crate::writers::{ConsoleSink, DiscardSink, FileSink, MemorySink, MultiSink};
}

pub use crate::core::{
    Engine, EngineMetrics, Entry, FieldValue, Fields, Formatter, LogEntry, LogLevel, LoggerError,
    Output, Result, Sink, TimestampFormat,
};
pub use facade::{
    map_level, resolve_output, Config, Controller, FieldLogger, Level, Logger, LoggerBuilder,
    LoggerFacade, MessageLogger, NestedLogger, OutputResolver,
};
pub use formatters::{select_formatter, FormatterKind, JsonFormatter, PrefixedFormatter};
pub use writers::{ConsoleSink, DiscardSink, FileSink, IoSink, MemorySink, MultiSink};
