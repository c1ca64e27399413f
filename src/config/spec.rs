//! Target specifications: `destination[,key=value]*`.

use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::config::ReportContext;
use crate::error::TargetError;
use crate::format::{FormatKind, Formatter};
use crate::io::{FileSink, Sink};
use crate::target::Target;

/// Where a target's bytes go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// A local file, created or truncated on first use
    File(PathBuf),
}

impl Destination {
    fn into_sink(self) -> Box<dyn Sink> {
        match self {
            Destination::File(path) => Box::new(FileSink::new(path)),
        }
    }
}

/// A parsed target spec.
///
/// Parsing touches nothing on disk; [`TargetSpec::into_target`] builds the
/// sink and formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    /// The token exactly as given
    pub raw: String,
    pub destination: Destination,
    pub format: FormatKind,
    /// Keys other than `format`, in order. Accepted but currently unused.
    pub options: Vec<(String, String)>,
}

impl TargetSpec {
    /// Parse one spec token.
    ///
    /// The destination is checked before any option, so a bad scheme is
    /// reported even when a later `format=` is also invalid.
    pub fn parse(raw: &str) -> Result<Self, TargetError> {
        let mut parts = raw.split(',');
        let destination = parse_destination(raw, parts.next().unwrap_or_default())?;

        let mut format = None;
        let mut options = Vec::new();
        for part in parts {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            if key == "format" {
                let kind = FormatKind::from_str(value)
                    .ok_or_else(|| TargetError::UnrecognizedFormat(value.to_string()))?;
                format = Some(kind);
            } else {
                options.push((key.to_string(), value.to_string()));
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            destination,
            format: format.unwrap_or_default(),
            options,
        })
    }

    /// Assemble the target described by this spec.
    pub fn into_target(self, ctx: &ReportContext) -> Target {
        Target::new(
            self.destination.into_sink(),
            Formatter::new(self.format, ctx.clone()),
        )
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_destination(raw: &str, dest: &str) -> Result<Destination, TargetError> {
    if dest.is_empty() {
        return Err(TargetError::MissingDestination(raw.to_string()));
    }

    // Bare paths are not absolute URLs and fall through to the implicit file scheme.
    let url = match Url::parse(dest) {
        Ok(url) if !is_drive_letter(&url) => url,
        _ => return Ok(Destination::File(PathBuf::from(dest))),
    };

    match url.scheme() {
        "file" => url
            .to_file_path()
            .map(Destination::File)
            .map_err(|_| TargetError::InvalidFileUrl(dest.to_string())),
        other => Err(TargetError::UnrecognizedScheme(other.to_string())),
    }
}

/// `C:\reports\scan.log` parses as a URL with scheme `c`.
#[cfg(windows)]
fn is_drive_letter(url: &Url) -> bool {
    url.scheme().len() == 1
}

#[cfg(not(windows))]
fn is_drive_letter(_url: &Url) -> bool {
    false
}
