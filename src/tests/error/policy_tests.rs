//! Tests for ErrorPolicy parsing.

use crate::error::ErrorPolicy;

#[test]
fn default_policy_is_accumulate() {
    assert_eq!(ErrorPolicy::default(), ErrorPolicy::Accumulate);
}

#[test]
fn parse_policy_names() {
    assert_eq!(ErrorPolicy::from_str("fast_fail"), Some(ErrorPolicy::FastFail));
    assert_eq!(ErrorPolicy::from_str("FastFail"), Some(ErrorPolicy::FastFail));
    assert_eq!(ErrorPolicy::from_str("accumulate"), Some(ErrorPolicy::Accumulate));
    assert_eq!(ErrorPolicy::from_str("retry"), None);
}
