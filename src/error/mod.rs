//! Error types and policies for multireport.
//!
//! This module provides:
//! - `TargetError`: A target spec could not be turned into a target
//! - `SettingsError`: A settings file could not be loaded
//! - `ErrorPolicy`: Controls whether fan-out stops at the first failing target
//! - `Stage`: Indicates where a report failure happened
//! - `SingleReportError`: A single write/finish failure with context
//! - `AggregateError`: A collection of report failures

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while parsing a target spec.
///
/// These surface at configuration time and are expected to abort startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    /// The destination uses a scheme no sink kind handles
    #[error("unrecognized scheme '{0}'")]
    UnrecognizedScheme(String),

    /// The `format` key carries an unknown value
    #[error("unrecognized format {0}")]
    UnrecognizedFormat(String),

    /// The spec has no destination before its first `,`
    #[error("missing destination in target spec '{0}'")]
    MissingDestination(String),

    /// A `file` URL that does not describe a local path
    #[error("invalid file destination '{0}'")]
    InvalidFileUrl(String),
}

/// Errors raised while loading `ReportSettings`.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown error policy '{0}'")]
    UnknownErrorPolicy(String),

    #[error(transparent)]
    Target(#[from] TargetError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first target that fails
    FastFail,
    /// Try every target and return all failures together
    #[default]
    Accumulate,
}

impl ErrorPolicy {
    /// Parse a policy from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fast_fail" | "fastfail" | "fast-fail" => Some(ErrorPolicy::FastFail),
            "accumulate" => Some(ErrorPolicy::Accumulate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Writing a record through the target's formatter
    Write,
    /// Closing the formatter's output and the sink
    Finish,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Write => write!(f, "Write"),
            Stage::Finish => write!(f, "Finish"),
        }
    }
}

#[derive(Debug)]
pub struct SingleReportError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Spec of the target that failed
    pub target: String,
    /// The underlying error
    pub error: std::io::Error,
}

impl fmt::Display for SingleReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.target, self.error)
    }
}

impl std::error::Error for SingleReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// An aggregate of report failures across targets.
#[derive(Debug, Error)]
pub struct AggregateError {
    /// Collection of individual errors
    pub errors: Vec<SingleReportError>,
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "reporting encountered {} error(s):", self.errors.len())?;
        for (i, e) in self.errors.iter().enumerate() {
            writeln!(f, "  #{}: {}", i + 1, e)?;
        }
        Ok(())
    }
}

impl AggregateError {
    /// Create a new aggregate error with a single error.
    pub fn single(error: SingleReportError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Check if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(())` when nothing was collected, the aggregate otherwise.
    pub(crate) fn into_result(errors: Vec<SingleReportError>) -> Result<(), AggregateError> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AggregateError { errors })
        }
    }
}

impl From<SingleReportError> for AggregateError {
    fn from(error: SingleReportError) -> Self {
        Self::single(error)
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
