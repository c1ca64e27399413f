//! File-backed sink.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::Sink;
use super::sink::closed_error;

/// Sink writing to a local file.
///
/// The file is created (or truncated) on first use. Writes go through a
/// `BufWriter` that is flushed on close.
#[derive(Debug)]
pub struct FileSink {
    id: String,
    path: PathBuf,
    file: Option<BufWriter<File>>,
    closed: bool,
}

impl FileSink {
    /// Create a new file sink. Nothing is opened until the first write.
    pub fn new(path: PathBuf) -> Self {
        let id = path.to_string_lossy().into_owned();
        Self {
            id,
            path,
            file: None,
            closed: false,
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file has been opened yet.
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn open(&self) -> io::Result<BufWriter<File>> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&self.path)?;
        tracing::debug!(path = %self.path.display(), "opened report file");
        Ok(BufWriter::new(file))
    }
}

impl Sink for FileSink {
    fn id(&self) -> &str {
        &self.id
    }

    fn writer(&mut self) -> io::Result<&mut dyn Write> {
        if self.closed {
            return Err(closed_error(&self.id));
        }
        let file = match self.file.take() {
            Some(file) => file,
            None => self.open()?,
        };
        Ok(self.file.insert(file))
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        // An untouched target still leaves an (empty) file behind.
        let mut file = match self.file.take() {
            Some(file) => file,
            None => self.open()?,
        };
        file.flush()?;
        tracing::debug!(path = %self.path.display(), "closed report file");
        Ok(())
    }
}
