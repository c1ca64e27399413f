//! Builder for creating Reporter instances.

use crate::cli::TargetArgs;
use crate::config::{ReportContext, ReportSettings, TargetSpec};
use crate::engine::Reporter;
use crate::error::{ErrorPolicy, SettingsError, TargetError};
use crate::target::TargetList;

pub struct ReporterBuilder {
    target_args: Vec<String>,
    target_specs: Vec<TargetSpec>,
    context: Option<ReportContext>,
    hostname: Option<String>,
    error_policy: ErrorPolicy,
}

impl ReporterBuilder {
    pub fn new() -> Self {
        Self {
            target_args: Vec::new(),
            target_specs: Vec::new(),
            context: None,
            hostname: None,
            error_policy: ErrorPolicy::Accumulate,
        }
    }

    /// Start from a settings file's targets, hostname and error policy.
    pub fn from_settings(settings: &ReportSettings) -> Result<Self, SettingsError> {
        Ok(Self::new()
            .with_context(settings.context())
            .targets_from_args(&settings.targets)
            .with_mode(settings.error_policy()?))
    }

    /// Replace the spec strings collected so far.
    pub fn targets_from_args(mut self, args: &[String]) -> Self {
        self.target_args = args.to_vec();
        self
    }

    /// Add a space-separated list of spec strings.
    pub fn add_target(mut self, arg: impl Into<String>) -> Self {
        self.target_args.push(arg.into());
        self
    }

    pub fn add_target_spec(mut self, spec: TargetSpec) -> Self {
        self.target_specs.push(spec);
        self
    }

    /// Add specs already validated by the CLI layer.
    pub fn with_target_args(mut self, args: &TargetArgs) -> Self {
        self.target_specs.extend(args.specs().iter().cloned());
        self
    }

    pub fn with_context(mut self, context: ReportContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Override the hostname of whichever context is used.
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn with_mode(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Parse every collected spec into a target list.
    ///
    /// String specs come first, in order, followed by pre-parsed ones.
    pub fn build_list(self) -> Result<TargetList, TargetError> {
        let mut context = self.context.unwrap_or_else(ReportContext::from_env);
        if let Some(hostname) = self.hostname {
            context = context.with_hostname(hostname);
        }

        let mut list = TargetList::new(context).with_mode(self.error_policy);
        for arg in &self.target_args {
            list.apply(arg)?;
        }
        for spec in self.target_specs {
            list.push(spec);
        }
        Ok(list)
    }

    pub fn build(self) -> Result<Reporter, TargetError> {
        self.build_list().map(Reporter::new)
    }
}

impl Default for ReporterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
