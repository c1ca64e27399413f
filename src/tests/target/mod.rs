//! Target and TargetList tests.
