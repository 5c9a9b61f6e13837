//! Output resolution: target flags to a concrete sink

use crate::core::{Output, Result};
use crate::writers::{ConsoleSink, DiscardSink, FileSink, MultiSink};
use std::path::Path;
use std::sync::Arc;

/// Builds the sink for a pair of target flags.
///
/// | console | file | sink                         |
/// |---------|------|------------------------------|
/// | yes     | yes  | fan-out: console, then file  |
/// | yes     | no   | console                      |
/// | no      | yes  | file                         |
/// | no      | no   | discard                      |
///
/// The console stream defaults to stderr and can be replaced, which is how
/// tests observe console output.
#[derive(Clone)]
pub struct OutputResolver {
    console: Output,
}

impl OutputResolver {
    pub fn new() -> Self {
        Self::with_console(Arc::new(ConsoleSink::new()))
    }

    pub fn with_console(console: Output) -> Self {
        Self { console }
    }

    pub fn console(&self) -> &Output {
        &self.console
    }

    /// Resolve the sink. An empty path counts as "no file".
    ///
    /// A file that cannot be opened fails the whole resolution.
    pub fn resolve(&self, enable_console: bool, file: Option<&Path>) -> Result<Output> {
        let file = file.filter(|path| !path.as_os_str().is_empty());

        match (enable_console, file) {
            (true, Some(path)) => {
                let file: Output = Arc::new(FileSink::open(path)?);
                Ok(Arc::new(MultiSink::new(vec![Arc::clone(&self.console), file])))
            }
            (true, None) => Ok(Arc::clone(&self.console)),
            (false, Some(path)) => Ok(Arc::new(FileSink::open(path)?)),
            (false, None) => Ok(Arc::new(DiscardSink::new())),
        }
    }
}

impl Default for OutputResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve against the process's stderr
pub fn resolve_output(enable_console: bool, file: Option<&Path>) -> Result<Output> {
    OutputResolver::new().resolve(enable_console, file)
}
