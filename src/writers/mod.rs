//! Sink implementations

pub mod console;
pub mod discard;
pub mod file;
pub mod memory;
pub mod multi;

pub use console::ConsoleSink;
pub use discard::DiscardSink;
pub use file::{FileSink, DEFAULT_LOG_FILE_MODE};
pub use memory::{IoSink, MemorySink};
pub use multi::MultiSink;

// Re-export the trait next to its implementations
pub use crate::core::{Output, Sink};
