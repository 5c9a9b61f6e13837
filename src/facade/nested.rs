//! Loggers with pre-bound fields

use super::traits::{FieldLogger, MessageLogger};
use crate::core::{Entry, Fields, LogLevel};
use std::fmt;

impl MessageLogger for Entry {
    #[track_caller]
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        Entry::log(self, level, args);
    }
}

/// A derived logger whose records all carry the fields it was created with.
///
/// It holds no output or level state of its own: sink and threshold come
/// from the engine of the facade it was derived from, so
/// [`Controller::set_output`](super::Controller::set_output) on that facade
/// redirects this logger too. It cannot be nested further.
#[derive(Clone, Debug)]
pub struct NestedLogger {
    entry: Entry,
}

impl NestedLogger {
    pub(crate) fn new(entry: Entry) -> Self {
        Self { entry }
    }

    /// The fields bound to every record
    pub fn fields(&self) -> &Fields {
        self.entry.fields()
    }
}

impl MessageLogger for NestedLogger {
    #[track_caller]
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.entry.log(level, args);
    }
}

impl FieldLogger for NestedLogger {
    fn with_fields(&self, fields: Fields) -> Box<dyn MessageLogger> {
        Box::new(self.entry.with_fields(fields))
    }
}
