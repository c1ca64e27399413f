//! Tests for the plain text formatter.

use crate::format::{FormatKind, Formatter, PlainFormatter};
use crate::record::{Extra, FileEntry, ScannedFile};
use crate::tests::{FIXED_DATETIME, fixed_context};

fn render_entry(entry: &FileEntry<'_>) -> String {
    let mut f = PlainFormatter::new(fixed_context());
    let mut out = Vec::new();
    f.write_file_entry(&mut out, entry).unwrap();
    String::from_utf8(out).unwrap()
}

fn render_message(args: std::fmt::Arguments<'_>) -> String {
    let mut f = PlainFormatter::new(fixed_context());
    let mut out = Vec::new();
    f.write_message(&mut out, args).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn file_entry_without_extras() {
    let file = ScannedFile::new("/etc/passwd").with_size(12);
    let line = render_entry(&FileEntry::new(&file, "yara", "rule matched"));

    assert_eq!(
        line,
        format!("{FIXED_DATETIME} host yara: /etc/passwd: rule matched\n")
    );
}

#[test]
fn file_entry_extras_joined_uniformly() {
    let file = ScannedFile::new("/bin/sh").with_size(1);
    let entry = FileEntry::new(&file, "yara", "hit")
        .with_extra("rule", "r1")
        .with_extra("ns", "default")
        .with_extra("tag", "apt");

    assert_eq!(
        render_entry(&entry),
        format!("{FIXED_DATETIME} host yara: /bin/sh: hit; rule=r1, ns=default, tag=apt\n")
    );
}

#[test]
fn file_entry_odd_flat_extras_are_padded() {
    let file = ScannedFile::new("a").with_size(1);
    let entry =
        FileEntry::new(&file, "ioc", "found").with_extras(Extra::from_flat(["k1", "v1", "k2"]));

    assert_eq!(
        render_entry(&entry),
        format!("{FIXED_DATETIME} host ioc: a: found; k1=v1, k2=\n")
    );
}

#[test]
fn message_gets_one_trailing_newline() {
    let line = render_message(format_args!("scanned {} files", 3));
    assert_eq!(line, format!("{FIXED_DATETIME} host scanned 3 files\n"));
}

#[test]
fn message_keeps_single_newline_when_already_present() {
    let line = render_message(format_args!("done\n"));
    assert_eq!(line, format!("{FIXED_DATETIME} host done\n"));

    let line = render_message(format_args!("done\n\n"));
    assert!(line.ends_with("done\n"));
    assert!(!line.ends_with("\n\n"));
}

#[test]
fn empty_message_is_still_a_line() {
    let line = render_message(format_args!(""));
    assert_eq!(line, format!("{FIXED_DATETIME} host \n"));
}

#[test]
fn finish_writes_nothing() {
    let mut f = Formatter::new(FormatKind::Plain, fixed_context());
    let mut out = Vec::new();
    f.write_message(&mut out, format_args!("x")).unwrap();
    let before = out.len();
    f.finish(&mut out).unwrap();
    assert_eq!(out.len(), before);
}
