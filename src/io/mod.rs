//! Sink abstractions for report destinations.
//!
//! This module provides:
//! - `Sink`: Trait for report destinations
//! - `FileSink`: The file-backed destination
//! - `InMemorySink`: An in-memory destination for testing

mod file;
mod memory;
mod sink;

pub use file::FileSink;
pub use memory::InMemorySink;
pub use sink::Sink;
