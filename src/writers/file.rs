//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Permission bits for newly created log files (rw-r--r--)
pub const DEFAULT_LOG_FILE_MODE: u32 = 0o644;

/// Appends records to a file opened once at construction.
///
/// Writes are unbuffered so each record reaches the file as one write call.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    /// Create-or-open `path` for appending.
    ///
    /// Failure to open is a configuration error that carries the path and the
    /// underlying IO error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut options = OpenOptions::new();
        options.create(true).append(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(DEFAULT_LOG_FILE_MODE);
        }

        let file = options
            .open(&path)
            .map_err(|source| LoggerError::log_file(&path, source))?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        (&self.file).write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        (&self.file).flush()
    }

    fn name(&self) -> &str {
        "file"
    }
}
