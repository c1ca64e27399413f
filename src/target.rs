//! Targets and the ordered, repeatable list that holds them.

use std::fmt;
use std::io;

use crate::config::{ReportContext, TargetSpec};
use crate::error::{AggregateError, ErrorPolicy, SingleReportError, Stage, TargetError};
use crate::format::{FormatKind, Formatter};
use crate::io::Sink;
use crate::record::FileEntry;

/// One sink paired with one formatter.
#[derive(Debug)]
pub struct Target {
    sink: Box<dyn Sink>,
    formatter: Formatter,
}

impl Target {
    pub fn new(sink: Box<dyn Sink>, formatter: Formatter) -> Self {
        Self { sink, formatter }
    }

    pub fn sink_id(&self) -> &str {
        self.sink.id()
    }

    pub fn format(&self) -> FormatKind {
        self.formatter.kind()
    }

    pub fn report_file_entry(&mut self, entry: &FileEntry<'_>) -> io::Result<()> {
        let w = self.sink.writer()?;
        self.formatter.write_file_entry(w, entry)
    }

    pub fn report_message(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let w = self.sink.writer()?;
        self.formatter.write_message(w, args)
    }

    /// Finish the formatter, then close the sink.
    ///
    /// The sink is closed even if the formatter could not write its trailer.
    pub fn finish(mut self) -> io::Result<()> {
        let finished = match self.sink.writer() {
            Ok(w) => self.formatter.finish(w),
            Err(e) => Err(e),
        };
        let closed = self.sink.close();
        finished.and(closed)
    }
}

#[derive(Debug)]
struct Entry {
    spec: String,
    target: Target,
}

/// Ordered collection of targets, usable as a repeatable option value.
///
/// Each `apply` appends the targets parsed from a space-separated list of
/// specs. A list built with [`TargetList::with_defaults`] drops those defaults
/// on the first `apply`, so a user-supplied option replaces them while later
/// repetitions add to it.
#[derive(Debug)]
pub struct TargetList {
    ctx: ReportContext,
    error_policy: ErrorPolicy,
    entries: Vec<Entry>,
    replace_on_apply: bool,
    reported: bool,
}

impl TargetList {
    pub const TYPE_NAME: &'static str = "targetList";

    /// Create an empty list whose targets will use `ctx`.
    pub fn new(ctx: ReportContext) -> Self {
        Self {
            ctx,
            error_policy: ErrorPolicy::default(),
            entries: Vec::new(),
            replace_on_apply: false,
            reported: false,
        }
    }

    /// Create a list holding `value` until the first call to `apply`.
    pub fn with_defaults(ctx: ReportContext, value: &str) -> Result<Self, TargetError> {
        let mut list = Self::new(ctx);
        list.apply(value)?;
        list.replace_on_apply = true;
        Ok(list)
    }

    /// Set how fan-out reacts to a failing target.
    pub fn with_mode(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn context(&self) -> &ReportContext {
        &self.ctx
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// All specs joined by a single space, in the order they were applied.
    pub fn render(&self) -> String {
        self.specs().collect::<Vec<_>>().join(" ")
    }

    /// Descriptor shown in help output.
    pub fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    /// Parse and append every space-separated spec in `value`.
    ///
    /// Stops at the first invalid spec. Targets appended before it stay.
    pub fn apply(&mut self, value: &str) -> Result<(), TargetError> {
        if self.replace_on_apply {
            self.reset();
        }
        for token in value.split(' ').filter(|t| !t.is_empty()) {
            self.push(TargetSpec::parse(token)?);
        }
        Ok(())
    }

    /// Append an already parsed spec.
    pub fn push(&mut self, spec: TargetSpec) {
        tracing::debug!(spec = %spec, format = %spec.format, "registered report target");
        let raw = spec.raw.clone();
        self.entries.push(Entry {
            spec: raw,
            target: spec.into_target(&self.ctx),
        });
    }

    /// Append a target built outside the spec grammar, e.g. with a custom sink.
    ///
    /// `spec` is what `render` shows for it.
    pub fn push_target(&mut self, spec: impl Into<String>, target: Target) {
        self.entries.push(Entry {
            spec: spec.into(),
            target,
        });
    }

    /// Drop every target.
    ///
    /// Once any record has been reported, the dropped targets are finished
    /// first so a tsjson array is still closed. Failures are logged. Before
    /// that, targets are dropped without touching their sinks.
    pub fn reset(&mut self) {
        let entries = std::mem::take(&mut self.entries);
        if self.reported {
            if let Err(errors) = Self::finish_entries(entries) {
                tracing::warn!(%errors, "reset could not finish every target");
            }
        }
        self.replace_on_apply = false;
        self.reported = false;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn specs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.spec.as_str())
    }

    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.entries.iter().map(|e| &e.target)
    }

    /// Send a file finding to every target.
    pub fn report_file_entry(&mut self, entry: &FileEntry<'_>) -> Result<(), AggregateError> {
        self.fan_out(|target| target.report_file_entry(entry))
    }

    /// Send a free-text message to every target.
    ///
    /// See also the [`report_message!`](crate::report_message) macro.
    pub fn report_message(&mut self, args: fmt::Arguments<'_>) -> Result<(), AggregateError> {
        self.fan_out(|target| target.report_message(args))
    }

    fn fan_out<F>(&mut self, mut write: F) -> Result<(), AggregateError>
    where
        F: FnMut(&mut Target) -> io::Result<()>,
    {
        self.reported = true;
        let mut errors = Vec::new();
        for entry in &mut self.entries {
            if let Err(error) = write(&mut entry.target) {
                tracing::warn!(target_spec = %entry.spec, %error, "failed to write report record");
                errors.push(SingleReportError {
                    stage: Stage::Write,
                    target: entry.spec.clone(),
                    error,
                });
                if matches!(self.error_policy, ErrorPolicy::FastFail) {
                    break;
                }
            }
        }
        AggregateError::into_result(errors)
    }

    /// Finish every target exactly once, whatever the error policy.
    pub fn finish(self) -> Result<(), AggregateError> {
        Self::finish_entries(self.entries)
    }

    fn finish_entries(entries: Vec<Entry>) -> Result<(), AggregateError> {
        let mut errors = Vec::new();
        for Entry { spec, target } in entries {
            if let Err(error) = target.finish() {
                tracing::warn!(target_spec = %spec, %error, "failed to finish report target");
                errors.push(SingleReportError {
                    stage: Stage::Finish,
                    target: spec,
                    error,
                });
            }
        }
        AggregateError::into_result(errors)
    }
}

impl fmt::Display for TargetList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
