//! Plain text format implementation.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use crate::config::{ReportContext, format_datetime};
use crate::record::FileEntry;

/// Plain text format implementation.
///
/// Every record is one line prefixed with the datetime and hostname:
///
/// ```text
/// 2024-05-01T12:00:00Z host yara: /etc/passwd: matched; rule=r1, ns=default
/// ```
#[derive(Debug, Clone)]
pub struct PlainFormatter {
    ctx: ReportContext,
}

impl PlainFormatter {
    pub fn new(ctx: ReportContext) -> Self {
        Self { ctx }
    }

    fn prefix(&self) -> String {
        format!("{} {} ", format_datetime(&self.ctx.now()), self.ctx.hostname())
    }

    pub fn write_file_entry(&mut self, w: &mut dyn Write, entry: &FileEntry<'_>) -> io::Result<()> {
        let mut line = self.prefix();
        line.push_str(&entry.description);
        line.push_str(": ");
        line.push_str(&entry.subject.name());
        line.push_str(": ");
        line.push_str(&entry.message);
        if !entry.extra.is_empty() {
            line.push(';');
            for (i, (key, value)) in entry.extra.iter().enumerate() {
                line.push_str(if i == 0 { " " } else { ", " });
                line.push_str(key);
                line.push('=');
                line.push_str(value);
            }
        }
        line.push('\n');
        w.write_all(line.as_bytes())
    }

    pub fn write_message(&mut self, w: &mut dyn Write, args: fmt::Arguments<'_>) -> io::Result<()> {
        let mut line = self.prefix();
        line.write_fmt(args)
            .map_err(|_| io::Error::other("message formatting failed"))?;
        line.truncate(line.trim_end_matches('\n').len());
        line.push('\n');
        w.write_all(line.as_bytes())
    }

    /// Plain text has no closing marker.
    pub fn finish(&mut self, _w: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}
