//! Tests for ReportSettings.

use crate::config::ReportSettings;
use crate::error::{ErrorPolicy, SettingsError};

#[test]
fn parse_full_settings() {
    let json = r#"{
        "hostname": "scanner-01",
        "targets": ["/tmp/a", "/tmp/b,format=tsjson"],
        "error_policy": "fast_fail",
        "log_level": "debug"
    }"#;

    let settings: ReportSettings = serde_json::from_str(json).unwrap();
    assert_eq!(settings.hostname.as_deref(), Some("scanner-01"));
    assert_eq!(settings.targets.len(), 2);
    assert_eq!(settings.error_policy().unwrap(), ErrorPolicy::FastFail);
    assert_eq!(settings.log_level.as_deref(), Some("debug"));
    assert_eq!(settings.context().hostname(), "scanner-01");
}

#[test]
fn empty_settings_use_defaults() {
    let settings: ReportSettings = serde_json::from_str("{}").unwrap();
    assert!(settings.targets.is_empty());
    assert_eq!(settings.error_policy().unwrap(), ErrorPolicy::Accumulate);
}

#[test]
fn unknown_error_policy_is_rejected() {
    let settings = ReportSettings::new().with_error_policy("sometimes");
    let err = settings.error_policy().unwrap_err();
    assert!(matches!(err, SettingsError::UnknownErrorPolicy(p) if p == "sometimes"));
}

#[test]
fn from_path_reports_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.json");

    let err = ReportSettings::from_path(&path).unwrap_err();
    match err {
        SettingsError::Read { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Read error, got {other:?}"),
    }
}

#[test]
fn from_path_reports_bad_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        ReportSettings::from_path(&path),
        Err(SettingsError::Parse(_))
    ));
}

#[test]
fn builder_helpers() {
    let settings = ReportSettings::new()
        .with_hostname("h")
        .add_target("/tmp/a")
        .add_target("/tmp/b,format=tsjson");
    assert_eq!(settings.targets, vec!["/tmp/a", "/tmp/b,format=tsjson"]);
    assert_eq!(settings.context().hostname(), "h");
}
