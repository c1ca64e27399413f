//! Tests for the file sink.

use crate::io::{FileSink, Sink};

#[test]
fn file_sink_opens_lazily() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.log");

    let mut sink = FileSink::new(path.clone());
    assert!(!path.exists());
    assert!(!sink.is_open());

    sink.writer().unwrap().write_all(b"line\n").unwrap();
    assert!(sink.is_open());
    sink.close().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\n");
}

#[test]
fn file_sink_truncates_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.log");
    std::fs::write(&path, "stale contents from an earlier run\n").unwrap();

    let mut sink = FileSink::new(path.clone());
    sink.writer().unwrap().write_all(b"fresh\n").unwrap();
    sink.close().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
}

#[test]
fn closing_untouched_sink_creates_empty_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.log");

    let mut sink = FileSink::new(path.clone());
    sink.close().unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), Vec::<u8>::new());
}

#[test]
fn file_sink_rejects_writes_after_close() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut sink = FileSink::new(dir.path().join("r.log"));
    sink.close().unwrap();

    assert!(sink.writer().is_err());
    // a second close is a no-op
    sink.close().unwrap();
}

#[test]
fn file_sink_open_error_surfaces() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut sink = FileSink::new(dir.path().join("no-such-dir").join("r.log"));

    let err = sink.writer().map(|_| ()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    assert_eq!(sink.id(), dir.path().join("no-such-dir").join("r.log").to_string_lossy());
}
