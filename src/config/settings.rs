//! Report settings loaded from a JSON file.

use std::path::Path;

use serde::Deserialize;

use crate::config::ReportContext;
use crate::error::{ErrorPolicy, SettingsError};

/// Settings for a whole reporting run.
///
/// ```json
/// {
///   "hostname": "scanner-01",
///   "targets": ["/var/log/scan.log", "/var/log/scan.json,format=tsjson"],
///   "error_policy": "accumulate",
///   "log_level": "info"
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportSettings {
    /// Hostname stamped on records; defaults to the environment's
    #[serde(default)]
    pub hostname: Option<String>,
    /// Target spec tokens, in order
    #[serde(default)]
    pub targets: Vec<String>,
    /// Error policy: "fast_fail" or "accumulate"
    #[serde(default)]
    pub error_policy: Option<String>,
    /// Filter directive for the log subscriber; not used by the library
    #[serde(default)]
    pub log_level: Option<String>,
}

impl ReportSettings {
    /// Create new empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Add a target spec token.
    pub fn add_target(mut self, spec: impl Into<String>) -> Self {
        self.targets.push(spec.into());
        self
    }

    /// Set the hostname.
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Set the error policy.
    pub fn with_error_policy(mut self, policy: impl Into<String>) -> Self {
        self.error_policy = Some(policy.into());
        self
    }

    /// The parsed error policy, `Accumulate` when unset.
    pub fn error_policy(&self) -> Result<ErrorPolicy, SettingsError> {
        match self.error_policy.as_deref() {
            None => Ok(ErrorPolicy::default()),
            Some(s) => {
                ErrorPolicy::from_str(s).ok_or_else(|| SettingsError::UnknownErrorPolicy(s.into()))
            }
        }
    }

    /// Context for formatters, using the configured hostname if any.
    pub fn context(&self) -> ReportContext {
        match &self.hostname {
            Some(hostname) => ReportContext::new(hostname.clone()),
            None => ReportContext::from_env(),
        }
    }
}
