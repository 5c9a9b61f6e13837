//! Logging macros for ergonomic log message formatting.
//!
//! These macros forward to the formatted `*f` methods of
//! [`MessageLogger`](crate::MessageLogger), so they work with the facade,
//! nested loggers and one-shot field handles alike.
//!
//! # Examples
//!
//! ```
//! use rust_logger_adapter::prelude::*;
//! use rust_logger_adapter::info;
//!
//! let logger = LoggerFacade::builder().enable_console(false).build().unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // On a derived logger
//! let request = logger.nested(fields! { "req" => "123" });
//! info!(request, "User {} performed action: {}", 42, "login");
//! ```

/// Log a message at the given backend level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_logger_adapter::prelude::*;
/// # let logger = LoggerFacade::builder().enable_console(false).build().unwrap();
/// use rust_logger_adapter::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::MessageLogger as _;
        $logger.log($level, format_args!($($arg)+))
    }};
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_adapter::prelude::*;
/// # let logger = LoggerFacade::builder().enable_console(false).level(Level::TRACE).build().unwrap();
/// use rust_logger_adapter::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::MessageLogger as _;
        $logger.tracef(format_args!($($arg)+))
    }};
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::MessageLogger as _;
        $logger.debugf(format_args!($($arg)+))
    }};
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::MessageLogger as _;
        $logger.infof(format_args!($($arg)+))
    }};
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_adapter::prelude::*;
/// # let logger = LoggerFacade::builder().enable_console(false).build().unwrap();
/// use rust_logger_adapter::warn;
/// let usage = 85;
/// warn!(logger, "Memory usage high: {}%", usage);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::MessageLogger as _;
        $logger.warnf(format_args!($($arg)+))
    }};
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::MessageLogger as _;
        $logger.errorf(format_args!($($arg)+))
    }};
}

/// Build [`Fields`](crate::Fields) from `key => value` pairs.
///
/// Later pairs overwrite earlier ones with the same key.
///
/// ```
/// use rust_logger_adapter::{fields, FieldValue};
///
/// let fields = fields! { "a" => 1, "b" => "two", "a" => 3 };
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields.get("a"), Some(&FieldValue::Int(3)));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Fields::new()$(.with($key, $value))+
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::writers::MemorySink;
    use std::sync::Arc;

    fn captured() -> (LoggerFacade, Arc<MemorySink>) {
        let console = Arc::new(MemorySink::new());
        let logger = LoggerFacade::builder()
            .console_output(console.clone())
            .force_colors(false)
            .level(Level::TRACE)
            .build()
            .expect("valid configuration");
        (logger, console)
    }

    #[test]
    fn test_log_macro() {
        let (logger, console) = captured();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);

        let lines = console.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Formatted: 42"));
    }

    #[test]
    fn test_level_macros() {
        let (logger, console) = captured();
        trace!(logger, "Trace: {}", 1);
        debug!(logger, "Debug: {}", 2);
        info!(logger, "Info: {}", 3);
        warn!(logger, "Warn: {}", 4);
        error!(logger, "Error: {}", 5);

        let lines = console.lines();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("TRACE Trace: 1"));
        assert!(lines[4].contains("ERROR Error: 5"));
    }

    #[test]
    fn test_macros_on_boxed_handles() {
        let (logger, console) = captured();
        let handle = logger.with_fields(fields! { "user" => "alice" });
        info!(handle, "User {} logged in", "alice");

        assert!(console.contents().contains("User alice logged in user=alice"));
    }

    #[test]
    fn test_fields_macro_trailing_comma() {
        let fields = fields! {
            "a" => 1,
            "b" => true,
        };
        assert_eq!(fields.len(), 2);
        assert!(fields! {}.is_empty());
    }
}
