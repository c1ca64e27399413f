//! Process-level values the formatters stamp onto every record.

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};

/// Source of record timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Wall-clock time in the local timezone
    #[default]
    System,
    /// A frozen instant, for reproducible output
    Fixed(DateTime<FixedOffset>),
}

impl Clock {
    pub fn now(&self) -> DateTime<FixedOffset> {
        match self {
            Clock::System => Local::now().into(),
            Clock::Fixed(at) => *at,
        }
    }
}

/// Hostname and clock shared by every formatter of a target list.
///
/// Passed explicitly when targets are built rather than read from globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    hostname: String,
    clock: Clock,
}

impl ReportContext {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            clock: Clock::System,
        }
    }

    /// Context using `$HOSTNAME`, then `$HOST`, then `"unknown"`.
    pub fn from_env() -> Self {
        Self::new(default_hostname())
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now()
    }
}

impl Default for ReportContext {
    fn default() -> Self {
        Self::from_env()
    }
}

/// RFC 3339 with second precision, `Z` for UTC.
pub(crate) fn format_datetime(at: &DateTime<FixedOffset>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn default_hostname() -> String {
    hostname_from(|key| std::env::var(key).ok())
}

/// First non-empty value of `HOSTNAME` then `HOST`, else `"unknown"`.
pub(crate) fn hostname_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ["HOSTNAME", "HOST"]
        .into_iter()
        .filter_map(|key| lookup(key).filter(|h| !h.is_empty()))
        .next()
        .unwrap_or_else(|| "unknown".to_string())
}
