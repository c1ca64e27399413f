//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{AggregateError, SingleReportError, TargetError};

/// A diagnostic wrapper for report errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ReportDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<TargetError> for ReportDiagnostic {
    fn from(e: TargetError) -> Self {
        let help = match &e {
            TargetError::UnrecognizedScheme(_) => "only file destinations are supported",
            TargetError::UnrecognizedFormat(_) => "use format=plain or format=tsjson",
            TargetError::MissingDestination(_) | TargetError::InvalidFileUrl(_) => {
                "a target looks like /path/to/report.log[,format=tsjson]"
            }
        };
        ReportDiagnostic {
            message: "invalid report target".into(),
            source: Some(Box::new(e)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<SingleReportError> for ReportDiagnostic {
    fn from(e: SingleReportError) -> Self {
        ReportDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            source: Some(Box::new(e.error)),
            help: Some("Check that the report destination is writable".into()),
            severity: Severity::Error,
        }
    }
}

impl From<AggregateError> for ReportDiagnostic {
    fn from(agg: AggregateError) -> Self {
        let first = agg.errors.into_iter().next();
        if let Some(e) = first {
            ReportDiagnostic::from(e)
        } else {
            ReportDiagnostic {
                message: "Unknown report error".into(),
                source: None,
                help: None,
                severity: Severity::Error,
            }
        }
    }
}

impl From<AggregateError> for miette::Report {
    fn from(agg: AggregateError) -> Self {
        miette::Report::new(ReportDiagnostic::from(agg))
    }
}
