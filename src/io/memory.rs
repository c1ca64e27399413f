//! In-memory sink for testing.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::Sink;
use super::sink::closed_error;

/// In-memory sink for testing.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// target owns another.
#[derive(Debug, Clone)]
pub struct InMemorySink {
    id: String,
    handle: InMemoryWriteHandle,
    closes: Arc<AtomicUsize>,
    closed: bool,
}

impl InMemorySink {
    /// Create a new empty in-memory sink.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            handle: InMemoryWriteHandle {
                buf: Arc::new(Mutex::new(Vec::new())),
            },
            closes: Arc::new(AtomicUsize::new(0)),
            closed: false,
        }
    }

    /// Get the contents of the sink as bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.handle.lock().clone()
    }

    /// Get the contents of the sink as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// How many times any clone of this sink has been closed.
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    /// Clear the sink contents.
    pub fn clear(&self) {
        self.handle.lock().clear();
    }
}

impl Sink for InMemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn writer(&mut self) -> io::Result<&mut dyn Write> {
        if self.closed {
            return Err(closed_error(&self.id));
        }
        Ok(&mut self.handle)
    }

    fn close(&mut self) -> io::Result<()> {
        if !self.closed {
            self.closed = true;
            self.closes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}

/// Write handle for in-memory sink.
#[derive(Clone)]
struct InMemoryWriteHandle {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl InMemoryWriteHandle {
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<u8>> {
        self.buf.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for InMemoryWriteHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryWriteHandle").finish()
    }
}

impl Write for InMemoryWriteHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
