//! Streamed JSON array format implementation.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use crate::config::{ReportContext, format_datetime};
use crate::record::FileEntry;

/// Keys every record carries that callers may not override.
pub const RESERVED_KEYS: [&str; 3] = ["timestamp", "datetime", "hostname"];

/// JSON array format built with serde_json, one object per record.
///
/// The array is opened by the first record and closed by `finish`, so the
/// output never has to be held in memory:
///
/// ```text
/// [
/// {"datetime":"...","hostname":"h","message":"m","timestamp":"...","timestamp_desc":"msg"}
/// ,
/// {...}
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct TsJsonFormatter {
    ctx: ReportContext,
    initialized: bool,
}

impl TsJsonFormatter {
    pub fn new(ctx: ReportContext) -> Self {
        Self {
            ctx,
            initialized: false,
        }
    }

    /// Whether at least one record has been written.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn emit_record<'k, I>(&mut self, w: &mut dyn Write, pairs: I) -> io::Result<()>
    where
        I: IntoIterator<Item = (&'k str, &'k str)>,
    {
        let now = self.ctx.now();
        let mut record: BTreeMap<&str, String> = BTreeMap::new();
        record.insert("timestamp", now.timestamp_micros().to_string());
        record.insert("datetime", format_datetime(&now));
        record.insert("hostname", self.ctx.hostname().to_string());
        for (key, value) in pairs {
            if RESERVED_KEYS.iter().any(|reserved| *reserved == key) {
                tracing::debug!(key, "dropping extra field that shadows a reserved key");
                continue;
            }
            record.insert(key, value.to_string());
        }

        let mut buf: Vec<u8> = Vec::with_capacity(256);
        buf.extend_from_slice(if self.initialized { b",\n" } else { b"[\n" });
        serde_json::to_writer(&mut buf, &record).map_err(io::Error::from)?;
        buf.push(b'\n');
        w.write_all(&buf)?;
        self.initialized = true;
        Ok(())
    }

    pub fn write_file_entry(&mut self, w: &mut dyn Write, entry: &FileEntry<'_>) -> io::Result<()> {
        let name = entry.subject.name();
        let size = entry.subject.size().map(|s| s.to_string());

        let mut fields: Vec<(&str, &str)> = vec![("filename", name.as_ref())];
        if let Some(size) = size.as_deref() {
            fields.push(("file_size", size));
        }
        fields.push(("timestamp_desc", entry.description.as_str()));
        fields.push(("message", entry.message.as_str()));
        fields.extend(entry.extra.iter());
        self.emit_record(w, fields)
    }

    pub fn write_message(&mut self, w: &mut dyn Write, args: fmt::Arguments<'_>) -> io::Result<()> {
        let message = args.to_string();
        self.emit_record(w, [("timestamp_desc", "msg"), ("message", message.as_str())])
    }

    /// Close the array; an untouched formatter writes `[]`.
    pub fn finish(&mut self, w: &mut dyn Write) -> io::Result<()> {
        if self.initialized {
            w.write_all(b"]\n")
        } else {
            w.write_all(b"[]\n")
        }
    }
}
