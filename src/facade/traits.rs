//! Capability interfaces applications depend on
//!
//! Logging and output control are separate traits so code that only needs to
//! log can be handed a `&dyn Logger` without being able to redirect output.

use super::nested::NestedLogger;
use crate::core::{Fields, LogLevel, Output};
use std::fmt;

/// Leveled logging, in message-only and formatted variants.
///
/// Records below the configured threshold are dropped. Write failures are
/// never reported back to the caller.
pub trait MessageLogger: Send + Sync {
    #[track_caller]
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>);

    #[track_caller]
    fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, format_args!("{}", message));
    }

    #[track_caller]
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, format_args!("{}", message));
    }

    #[track_caller]
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, format_args!("{}", message));
    }

    #[track_caller]
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, format_args!("{}", message));
    }

    #[track_caller]
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, format_args!("{}", message));
    }

    /// `logger.tracef(format_args!("x = {}", x))`, or use the `trace!` macro
    #[track_caller]
    fn tracef(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Trace, args);
    }

    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }
}

/// Attach structured context to a single record
pub trait FieldLogger: MessageLogger {
    /// One-shot handle whose records carry `fields`; the receiver is unchanged
    fn with_fields(&self, fields: Fields) -> Box<dyn MessageLogger>;
}

/// The full logging surface of a facade
pub trait Logger: FieldLogger {
    /// Reusable logger whose every record carries `fields`
    fn nested(&self, fields: Fields) -> NestedLogger;
}

/// Output introspection and redirection
pub trait Controller {
    /// Replace the active sink. The old sink is neither flushed nor closed.
    fn set_output(&self, output: Output);

    /// The active sink; the same shared handle, not a copy
    fn get_output(&self) -> Output;
}
