//! Configuration types for report targets.
//!
//! This module provides:
//! - `TargetSpec`: A parsed `destination[,key=value]*` token
//! - `ReportContext`: Hostname and clock handed to formatters
//! - `ReportSettings`: Settings for a complete reporting run

mod context;
mod settings;
mod spec;

pub use context::{Clock, ReportContext, default_hostname};
pub(crate) use context::{format_datetime, hostname_from};
pub use settings::ReportSettings;
pub use spec::{Destination, TargetSpec};
