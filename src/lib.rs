//! # multireport
//!
//! Multi-target report emission for file scanners.
//!
//! ## Overview
//!
//! multireport provides:
//! - **Target specs**: `destination[,key=value]*` tokens such as
//!   `/var/log/scan.log` or `file:///var/log/scan.json,format=tsjson`
//! - **Two formats**: timestamped plain text lines, or `tsjson`, a JSON
//!   array streamed one object at a time that stays valid for any number
//!   of records
//! - **Fan-out**: every file finding and message goes to every target
//! - **Repeatable options**: `TargetList` and `TargetArgs` behave like a
//!   repeatable `--report` flag whose values accumulate in order
//! - **Error handling**: bad specs fail at startup, write failures are
//!   collected per target (FastFail or Accumulate)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use multireport::{ReportContext, ScannedFile, FileEntry, TargetList, report_message};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut targets = TargetList::new(ReportContext::from_env());
//!     targets.apply("/tmp/scan.log /tmp/scan.json,format=tsjson")?;
//!
//!     let file = ScannedFile::new("/etc/passwd");
//!     targets.report_file_entry(
//!         &FileEntry::new(&file, "yara", "rule matched").with_extra("rule", "suspicious"),
//!     )?;
//!     report_message!(targets, "scanned {} files", 1)?;
//!
//!     targets.finish()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `cli` - `sarge` argument type for `TargetArgs` and the `multireport` binary
//! - `miette` - Pretty error reporting with miette
//!
//! ## Concurrency
//!
//! `Target` and `TargetList` take `&mut self`. Scanners reporting from
//! several threads share a `Reporter`, which serializes calls behind a mutex.
//! Each target is finished exactly once by `finish`, which consumes the list.

// Core modules
pub mod builder;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod io;
pub mod record;
pub mod target;

// Re-exports for convenience
pub use builder::ReporterBuilder;
pub use cli::TargetArgs;
pub use config::{Clock, Destination, ReportContext, ReportSettings, TargetSpec};
pub use engine::Reporter;
pub use error::{AggregateError, ErrorPolicy, SettingsError, SingleReportError, Stage, TargetError};
pub use format::{FormatKind, Formatter, PlainFormatter, TsJsonFormatter};
pub use io::{FileSink, InMemorySink, Sink};
pub use record::{Extra, FileEntry, ScannedFile, Subject};
pub use target::{Target, TargetList};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::ReportDiagnostic;

/// Report a formatted message to a `Target`, `TargetList` or `Reporter`.
///
/// ```rust,ignore
/// report_message!(targets, "scan of {} finished in {:?}", root, elapsed)?;
/// ```
#[macro_export]
macro_rules! report_message {
    ($targets:expr, $($arg:tt)+) => {
        $targets.report_message(::std::format_args!($($arg)+))
    };
}

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
