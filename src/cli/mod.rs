//! CLI integration helpers for multireport.
//!
//! `TargetArgs` is the value of a repeatable `--report` option. Tokens are
//! validated while arguments are parsed, so a bad scheme or format stops the
//! program before any scanning starts.
//!
//! sarge joins repeated values with `,`, which also separates the options of
//! one spec. Register `TargetArgs` with sarge so the flag is known, then read
//! every occurrence with [`TargetArgs::from_occurrences`].
//!
//! # Example with sarge
//!
//! ```rust,ignore
//! use multireport::cli::TargetArgs;
//! use multireport::ReporterBuilder;
//! use sarge::prelude::*;
//!
//! let argv: Vec<String> = std::env::args().collect();
//! let mut reader = ArgumentReader::new();
//! reader.add::<TargetArgs>(tag::both('r', "report"));
//! let args = reader.parse_provided(&argv, std::env::vars())?;
//!
//! let targets = TargetArgs::from_occurrences(&argv, 'r', "report")?;
//! let reporter = ReporterBuilder::new().with_target_args(&targets).build()?;
//! ```

#[cfg(feature = "cli")]
mod sarge;

use crate::config::TargetSpec;
use crate::error::TargetError;

/// Validated target specs collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetArgs(Vec<TargetSpec>);

impl TargetArgs {
    /// Create new empty target arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a space-separated list of spec tokens.
    pub fn parse(value: &str) -> Result<Self, TargetError> {
        value
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(TargetSpec::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(TargetArgs)
    }

    /// Parse every `-{short} VALUE`, `--{long} VALUE` and `--{long}=VALUE` in
    /// `argv`, one occurrence at a time, appending in command-line order.
    ///
    /// Every other flag in `argv` is taken to consume the next token as its
    /// value, so that value is never mistaken for a report flag.
    pub fn from_occurrences<I, S>(argv: I, short: char, long: &str) -> Result<Self, TargetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collected = TargetArgs::new();
        let mut argv = argv.into_iter();
        while let Some(token) = argv.next() {
            let Some(flag) = token.as_ref().strip_prefix('-').filter(|f| !f.is_empty()) else {
                continue;
            };
            let (matches, inline) = match flag.strip_prefix('-') {
                Some(name) => match name.split_once('=') {
                    Some((name, value)) => (name == long, Some(value.to_string())),
                    None => (name == long, None),
                },
                None => {
                    let mut chars = flag.chars();
                    (chars.next() == Some(short) && chars.next().is_none(), None)
                }
            };
            let value = match inline {
                Some(value) => Some(value),
                None => argv.next().map(|v| v.as_ref().to_string()),
            };
            if let (true, Some(value)) = (matches, value) {
                collected.extend(TargetArgs::parse(&value)?);
            }
        }
        Ok(collected)
    }

    /// Append the specs of a later occurrence of the option.
    pub fn extend(&mut self, other: TargetArgs) {
        self.0.extend(other.0);
    }

    pub fn specs(&self) -> &[TargetSpec] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The raw tokens, space-separated.
    pub fn render(&self) -> String {
        self.0
            .iter()
            .map(|s| s.raw.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
