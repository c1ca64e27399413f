//! Sink trait definition.

use std::fmt::Debug;
use std::io::{self, Write};

/// Trait for report destinations.
///
/// A sink hands out a writer on demand and is closed once when its target
/// is finished. Implementations open the underlying resource lazily, on the
/// first call to [`Sink::writer`] or [`Sink::close`].
pub trait Sink: Send + Debug {
    /// Returns a unique identifier for this sink.
    ///
    /// This is used for error messages and logging.
    fn id(&self) -> &str;

    /// Borrow the writer for this sink, opening it first if needed.
    ///
    /// Fails once the sink has been closed.
    fn writer(&mut self) -> io::Result<&mut dyn Write>;

    /// Flush and release the destination.
    fn close(&mut self) -> io::Result<()>;
}

pub(crate) fn closed_error(id: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::BrokenPipe,
        format!("sink '{id}' is already closed"),
    )
}
