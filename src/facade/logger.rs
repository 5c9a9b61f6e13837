//! The logger facade applications hold

use super::{
    config::Config,
    level::{map_level, Level},
    nested::NestedLogger,
    output::OutputResolver,
    traits::{Controller, FieldLogger, Logger, MessageLogger},
};
use crate::core::{Engine, EngineMetrics, Fields, LogLevel, LoggerError, Output, Result};
use crate::formatters::select_formatter;
use parking_lot::RwLock;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// A configured logger backed by its own [`Engine`].
///
/// Built once from a [`Config`]; afterwards only the output can change.
///
/// # Example
///
/// ```
/// use rust_logger_adapter::prelude::*;
///
/// let logger = LoggerFacade::new(Config {
///     enable_console: false,
///     ..Config::default()
/// })
/// .unwrap();
///
/// logger.info("Server started");
/// logger.with_fields(fields! { "port" => 8080 }).info("listening");
///
/// let request = logger.nested(fields! { "req" => "123" });
/// request.warn("slow response");
/// ```
///
/// The backend engine is internal; the sink only changes through
/// [`Controller::set_output`]:
///
/// ```compile_fail
/// use rust_logger_adapter::prelude::*;
/// use std::sync::Arc;
///
/// let logger = LoggerFacade::builder().enable_console(false).build().unwrap();
/// logger.engine().set_output(Arc::new(DiscardSink::new()));
/// ```
pub struct LoggerFacade {
    config: Config,
    engine: Arc<Engine>,
    /// Always the same sink the engine writes to
    output: RwLock<Output>,
}

impl LoggerFacade {
    /// Build a logger writing console output to stderr.
    ///
    /// Fails with a configuration error when the level is unrecognized or
    /// the log file cannot be opened.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_resolver(config, &OutputResolver::new())
    }

    /// Build a logger resolving its output through `resolver`
    pub fn with_resolver(config: Config, resolver: &OutputResolver) -> Result<Self> {
        let level = map_level(&config.level);
        if level == LogLevel::Fatal {
            return Err(LoggerError::unknown_level(config.level.as_str()));
        }

        let output = resolver.resolve(config.enable_console, config.file_target())?;

        let engine = Engine::new();
        engine.set_output(Arc::clone(&output));
        engine.set_level(level);
        engine.set_report_caller(config.capture_caller_info);
        if config.no_lock {
            engine.set_no_lock();
        }
        engine.set_formatter(select_formatter(
            config.structured,
            config.force_colors,
            config.force_formatting,
        ));

        Ok(Self {
            config,
            engine: Arc::new(engine),
            output: RwLock::new(output),
        })
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The configuration this logger was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Engine setters would bypass [`Controller`], so this stays internal
    pub(crate) fn engine(&self) -> &Arc<Engine> {
        &self.engine
    }

    pub fn level(&self) -> LogLevel {
        self.engine.level()
    }

    /// Write and format failure counters
    pub fn metrics(&self) -> &EngineMetrics {
        self.engine.metrics()
    }

    pub fn flush(&self) -> Result<()> {
        self.engine.flush()?;
        Ok(())
    }
}

impl MessageLogger for LoggerFacade {
    #[track_caller]
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.engine.log(level, args);
    }
}

impl FieldLogger for LoggerFacade {
    fn with_fields(&self, fields: Fields) -> Box<dyn MessageLogger> {
        Box::new(self.engine.with_fields(fields))
    }
}

impl Logger for LoggerFacade {
    fn nested(&self, fields: Fields) -> NestedLogger {
        NestedLogger::new(self.engine.with_fields(fields))
    }
}

impl Controller for LoggerFacade {
    fn set_output(&self, output: Output) {
        let mut recorded = self.output.write();
        self.engine.set_output(Arc::clone(&output));
        *recorded = output;
    }

    fn get_output(&self) -> Output {
        self.output.read().clone()
    }
}

impl fmt::Debug for LoggerFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerFacade")
            .field("config", &self.config)
            .field("engine", &self.engine)
            .finish()
    }
}

/// Builder for constructing a [`LoggerFacade`] with a fluent API
///
/// # Example
/// ```
/// use rust_logger_adapter::prelude::*;
///
/// let logger = LoggerFacade::builder()
///     .enable_console(false)
///     .structured(true)
///     .level(Level::DEBUG)
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.level(), LogLevel::Debug);
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    config: Config,
    console: Option<Output>,
}

impl LoggerBuilder {
    /// Create a new builder starting from [`Config::default`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn enable_console(mut self, enabled: bool) -> Self {
        self.config.enable_console = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.file_location = Some(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn structured(mut self, structured: bool) -> Self {
        self.config.structured = structured;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: impl Into<Level>) -> Self {
        self.config.level = level.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn capture_caller_info(mut self, enabled: bool) -> Self {
        self.config.capture_caller_info = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn no_lock(mut self, no_lock: bool) -> Self {
        self.config.no_lock = no_lock;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn force_colors(mut self, force: bool) -> Self {
        self.config.force_colors = force;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn force_formatting(mut self, force: bool) -> Self {
        self.config.force_formatting = force;
        self
    }

    /// Use `console` in place of stderr for console output
    #[must_use = "builder methods return a new value"]
    pub fn console_output(mut self, console: Output) -> Self {
        self.console = Some(console);
        self
    }

    pub fn build(self) -> Result<LoggerFacade> {
        let resolver = match self.console {
            Some(console) => OutputResolver::with_console(console),
            None => OutputResolver::new(),
        };
        LoggerFacade::with_resolver(self.config, &resolver)
    }
}
