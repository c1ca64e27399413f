use sarge::ArgumentType;

use crate::cli::TargetArgs;
use crate::error::TargetError;

impl ArgumentType for TargetArgs {
    type Error = TargetError;

    // Repeated values would be joined with `,`; see `TargetArgs::from_occurrences`.
    const REPEATABLE: bool = false;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        match val {
            // A bare `--report` carries no targets.
            None => Some(Ok(TargetArgs::default())),
            Some(v) => Some(TargetArgs::parse(v)),
        }
    }

    fn default_value() -> Option<Self> {
        Some(TargetArgs::default())
    }
}
