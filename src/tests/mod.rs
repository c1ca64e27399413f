//! Internal tests, grouped by module.

use chrono::DateTime;

use crate::config::{Clock, ReportContext};

mod cli;
mod engine;
mod error;
mod target;

pub(crate) const FIXED_DATETIME: &str = "2024-05-01T12:00:00Z";
pub(crate) const FIXED_MICROS: &str = "1714564800000000";

/// Context with hostname `host` and a frozen clock.
pub(crate) fn fixed_context() -> ReportContext {
    let at = DateTime::parse_from_rfc3339(FIXED_DATETIME).expect("valid datetime");
    ReportContext::new("host").with_clock(Clock::Fixed(at))
}
