//! Tests for in-memory sources and sinks.

use std::io::{Read, Write};

use crate::io::{InMemorySink, InMemorySource, MergeSink, SourceInput};

#[test]
fn in_memory_source_reads_back_data() {
    let source = InMemorySource::from_string("a.ext", "payload");
    assert_eq!(source.name(), "a.ext");

    let mut reader = source.open().unwrap();
    let mut buf = String::new();
    reader.read_to_string(&mut buf).unwrap();

    assert_eq!(buf, "payload");
}

#[test]
fn in_memory_source_opens_fresh_streams() {
    let source = InMemorySource::from_string("a.ext", "payload");

    for _ in 0..2 {
        let mut reader = source.open().unwrap();
        let mut buf = String::new();
        reader.read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "payload");
    }
}

#[test]
fn in_memory_sink_truncate_clears_previous_content() {
    let sink = InMemorySink::new("out");

    {
        let mut w = sink.open_append().unwrap();
        w.write_all(b"old").unwrap();
    }
    assert_eq!(sink.contents(), b"old".to_vec());

    {
        let mut w = sink.open_truncate().unwrap();
        w.write_all(b"new").unwrap();
    }
    assert_eq!(sink.contents(), b"new".to_vec());
}

#[test]
fn in_memory_sink_append_preserves_content() {
    let sink = InMemorySink::new("out");

    {
        let mut w = sink.open_truncate().unwrap();
        w.write_all(b"abc").unwrap();
    }
    {
        let mut w = sink.open_append().unwrap();
        w.write_all(b"def").unwrap();
    }

    assert_eq!(sink.contents_string(), "abcdef");
}
