//! Tests for the in-memory sink.

use crate::io::{InMemorySink, Sink};

#[test]
fn in_memory_sink_writes_and_reads_back() {
    let sink = InMemorySink::new("out");
    let mut owned = sink.clone();

    owned.writer().unwrap().write_all(b"abc").unwrap();
    owned.writer().unwrap().write_all(b"def").unwrap();

    assert_eq!(sink.contents(), b"abcdef".to_vec());
    assert_eq!(sink.contents_string(), "abcdef");
    assert_eq!(owned.id(), "out");
}

#[test]
fn in_memory_sink_rejects_writes_after_close() {
    let sink = InMemorySink::new("out");
    let mut owned = sink.clone();

    owned.close().unwrap();
    owned.close().unwrap();

    assert_eq!(sink.close_count(), 1);
    let err = owned.writer().map(|_| ()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
}

#[test]
fn in_memory_sink_clear() {
    let sink = InMemorySink::new("out");
    let mut owned = sink.clone();
    owned.writer().unwrap().write_all(b"abc").unwrap();

    sink.clear();
    assert!(sink.contents().is_empty());
}
