//! Shared reporter for scanners with more than one worker.

use std::fmt;
use std::sync::{Mutex, MutexGuard};

use crate::error::{AggregateError, ErrorPolicy};
use crate::record::FileEntry;
use crate::target::TargetList;

/// Thread-safe front for a [`TargetList`].
///
/// Every call takes the lock for the duration of one fan-out, so records
/// from concurrent workers are never interleaved within a target.
#[derive(Debug)]
pub struct Reporter {
    targets: Mutex<TargetList>,
}

impl Reporter {
    pub fn new(targets: TargetList) -> Self {
        Self {
            targets: Mutex::new(targets),
        }
    }

    // A panic mid-report leaves at most one record missing; the list itself is intact.
    fn lock(&self) -> MutexGuard<'_, TargetList> {
        self.targets
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get the error policy.
    pub fn error_policy(&self) -> ErrorPolicy {
        self.lock().error_policy()
    }

    /// Number of configured targets.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// The configured specs, space-separated.
    pub fn render(&self) -> String {
        self.lock().render()
    }

    pub fn report_file_entry(&self, entry: &FileEntry<'_>) -> Result<(), AggregateError> {
        self.lock().report_file_entry(entry)
    }

    pub fn report_message(&self, args: fmt::Arguments<'_>) -> Result<(), AggregateError> {
        self.lock().report_message(args)
    }

    /// Finish every target. Consumes the reporter so nothing can be written afterwards.
    pub fn finish(self) -> Result<(), AggregateError> {
        self.targets
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .finish()
    }
}

impl From<TargetList> for Reporter {
    fn from(targets: TargetList) -> Self {
        Self::new(targets)
    }
}
