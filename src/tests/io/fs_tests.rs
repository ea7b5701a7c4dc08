//! Tests for filesystem sources and sinks.

use std::fs;
use std::io::Read;

use crate::io::{FileSink, FileSource, MergeSink, SourceInput};

#[test]
fn file_source_reads_file_and_exposes_basename() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.ext");
    fs::write(&path, b"hello world").unwrap();

    let source = FileSource::new(path.clone());
    assert_eq!(source.name(), "input.ext");

    let mut reader = source.open().unwrap();
    let mut buf = String::new();
    reader.read_to_string(&mut buf).unwrap();

    assert_eq!(buf, "hello world");
}

#[test]
fn file_source_open_fails_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileSource::new(dir.path().join("missing.ext"));

    assert!(source.open().is_err());
}

#[test]
fn file_sink_truncates_and_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let sink = FileSink::new(path.clone());

    {
        let mut w = sink.open_truncate().unwrap();
        std::io::Write::write_all(&mut w, b"abc").unwrap();
    }
    assert_eq!(fs::read(&path).unwrap(), b"abc".to_vec());

    {
        let mut w = sink.open_append().unwrap();
        std::io::Write::write_all(&mut w, b"def").unwrap();
    }
    assert_eq!(fs::read(&path).unwrap(), b"abcdef".to_vec());

    {
        let mut w = sink.open_truncate().unwrap();
        std::io::Write::write_all(&mut w, b"xyz").unwrap();
    }
    assert_eq!(fs::read(&path).unwrap(), b"xyz".to_vec());
}
