//! Record formatters.
//!
//! This module provides:
//! - `FormatKind`: The serialization strategies a target can select
//! - `Formatter`: A stateful formatter for one target
//! - `PlainFormatter` and `TsJsonFormatter`: The two strategies

use std::fmt;
use std::io::{self, Write};

mod plain;
mod tsjson;

pub use plain::PlainFormatter;
pub use tsjson::TsJsonFormatter;

use crate::config::ReportContext;
use crate::record::FileEntry;

/// Represents the output formats a target can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatKind {
    /// Timestamped lines of text
    #[default]
    Plain,
    /// A JSON array of flat string objects, written incrementally
    TsJson,
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FormatKind {
    /// Parse a format kind from the value of a `format=` key.
    ///
    /// Matching is exact: spec values are case-sensitive.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "plain" => Some(FormatKind::Plain),
            "tsjson" => Some(FormatKind::TsJson),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKind::Plain => "plain",
            FormatKind::TsJson => "tsjson",
        }
    }
}

/// Serializes records for a single target.
///
/// Each target owns its own formatter; `TsJson` carries per-target state.
#[derive(Debug, Clone)]
pub enum Formatter {
    Plain(PlainFormatter),
    TsJson(TsJsonFormatter),
}

impl Formatter {
    pub fn new(kind: FormatKind, ctx: ReportContext) -> Self {
        match kind {
            FormatKind::Plain => Formatter::Plain(PlainFormatter::new(ctx)),
            FormatKind::TsJson => Formatter::TsJson(TsJsonFormatter::new(ctx)),
        }
    }

    pub fn kind(&self) -> FormatKind {
        match self {
            Formatter::Plain(_) => FormatKind::Plain,
            Formatter::TsJson(_) => FormatKind::TsJson,
        }
    }

    pub fn write_file_entry(&mut self, w: &mut dyn Write, entry: &FileEntry<'_>) -> io::Result<()> {
        match self {
            Formatter::Plain(f) => f.write_file_entry(w, entry),
            Formatter::TsJson(f) => f.write_file_entry(w, entry),
        }
    }

    pub fn write_message(&mut self, w: &mut dyn Write, args: fmt::Arguments<'_>) -> io::Result<()> {
        match self {
            Formatter::Plain(f) => f.write_message(w, args),
            Formatter::TsJson(f) => f.write_message(w, args),
        }
    }

    /// Write whatever closing bytes the format needs.
    pub fn finish(&mut self, w: &mut dyn Write) -> io::Result<()> {
        match self {
            Formatter::Plain(f) => f.finish(w),
            Formatter::TsJson(f) => f.finish(w),
        }
    }
}
