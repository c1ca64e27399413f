//! Tests for AggregateError and SingleReportError.

use std::error::Error as _;
use std::io;

use crate::error::{AggregateError, SingleReportError, Stage};

fn single(stage: Stage, target: &str) -> SingleReportError {
    SingleReportError {
        stage,
        target: target.into(),
        error: io::Error::other("disk full"),
    }
}

#[test]
fn single_error_display_and_source() {
    let err = single(Stage::Write, "/tmp/a");
    assert_eq!(err.to_string(), "[Write] /tmp/a: disk full");
    assert!(err.source().is_some());
}

#[test]
fn aggregate_lists_every_error() {
    let agg = AggregateError {
        errors: vec![single(Stage::Write, "/tmp/a"), single(Stage::Finish, "/tmp/b")],
    };
    assert_eq!(agg.len(), 2);
    assert!(!agg.is_empty());

    let text = agg.to_string();
    assert!(text.starts_with("reporting encountered 2 error(s):"));
    assert!(text.contains("#1: [Write] /tmp/a: disk full"));
    assert!(text.contains("#2: [Finish] /tmp/b: disk full"));
}

#[test]
fn aggregate_from_single() {
    let agg: AggregateError = single(Stage::Finish, "x").into();
    assert_eq!(agg.len(), 1);
    assert_eq!(agg.errors[0].stage, Stage::Finish);
}
