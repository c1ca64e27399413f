//! Tests for TargetArgs parsing.

use crate::cli::TargetArgs;
use crate::error::TargetError;
use crate::format::FormatKind;

#[test]
fn parses_space_separated_tokens() {
    let args = TargetArgs::parse("/tmp/a /tmp/b,format=tsjson").unwrap();
    assert_eq!(args.len(), 2);
    assert_eq!(args.specs()[1].format, FormatKind::TsJson);
    assert_eq!(args.render(), "/tmp/a /tmp/b,format=tsjson");
}

#[test]
fn rejects_whole_value_on_any_bad_token() {
    let err = TargetArgs::parse("/tmp/a gopher://h/x").unwrap_err();
    assert_eq!(err, TargetError::UnrecognizedScheme("gopher".into()));
}

#[test]
fn extend_preserves_order() {
    let mut args = TargetArgs::parse("/tmp/a").unwrap();
    args.extend(TargetArgs::parse("/tmp/b /tmp/c").unwrap());
    assert_eq!(args.render(), "/tmp/a /tmp/b /tmp/c");
}

#[test]
fn empty_value_has_no_specs() {
    assert!(TargetArgs::parse("").unwrap().is_empty());
    assert!(TargetArgs::new().is_empty());
}

#[test]
fn occurrences_are_parsed_separately_and_in_order() {
    let argv = [
        "prog",
        "-r",
        "/tmp/a",
        "-p",
        "-r",
        "--report",
        "/tmp/b,format=tsjson",
        "--report=/tmp/c /tmp/d",
    ];
    let args = TargetArgs::from_occurrences(argv, 'r', "report").unwrap();

    assert_eq!(args.render(), "/tmp/a /tmp/b,format=tsjson /tmp/c /tmp/d");
    assert_eq!(args.specs()[1].format, FormatKind::TsJson);
    assert!(args.specs()[1].options.is_empty());
}

#[test]
fn occurrences_without_report_flag_are_empty() {
    let argv = ["prog", "--path", "/tmp/a,/tmp/b", "-s", "10"];
    assert!(TargetArgs::from_occurrences(argv, 'r', "report").unwrap().is_empty());
}

#[test]
fn bad_occurrence_fails_the_whole_collection() {
    let argv = ["prog", "-r", "/tmp/a", "-r", "/tmp/b,format=xml"];
    let err = TargetArgs::from_occurrences(argv, 'r', "report").unwrap_err();
    assert_eq!(err, TargetError::UnrecognizedFormat("xml".into()));
}
