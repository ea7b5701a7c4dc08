//! End-to-end merge tests for MergeEngine over in-memory I/O.

use std::sync::Arc;

use crate::config::{SinkSpec, SourceSpec};
use crate::engine::MergeEngine;
use crate::error::{ErrorPolicy, Stage};
use crate::header::HeaderTemplate;
use crate::io::{InMemorySink, InMemorySource, MergeSink, SourceInput};

fn make_engine(
    error_policy: ErrorPolicy,
    sources: Vec<SourceSpec>,
    sink: SinkSpec,
) -> MergeEngine {
    MergeEngine::new(sources, sink, HeaderTemplate::default(), error_policy)
}

fn source(name: &str, content: &str) -> SourceSpec {
    SourceSpec::new(name, Arc::new(InMemorySource::from_string(name, content)))
}

#[test]
fn merge_two_sources_exact_bytes() {
    let sink = Arc::new(InMemorySink::new("out"));
    let engine = make_engine(
        ErrorPolicy::FastFail,
        vec![source("a.ext", "hello\n"), source("b.ext", "world\n")],
        SinkSpec::new("out", sink.clone()),
    );

    let report = engine.run().expect("run should succeed");

    assert_eq!(report.merged, vec!["a.ext", "b.ext"]);
    assert_eq!(report.bytes_copied, 12);
    assert!(report.skipped.is_empty());

    let expected = "--- FILE: a.ext ---\nhello\n\n--- FILE: b.ext ---\nworld\n\n";
    assert_eq!(sink.contents_string(), expected);
}

#[test]
fn merge_no_sources_truncates_to_empty() {
    let sink = Arc::new(InMemorySink::new("out"));

    // Stale content from a previous run must be gone afterwards.
    {
        let mut writer = sink.open_append().unwrap();
        std::io::Write::write_all(&mut writer, b"stale").unwrap();
    }

    let engine = make_engine(
        ErrorPolicy::FastFail,
        vec![],
        SinkSpec::new("out", sink.clone()),
    );
    let report = engine.run().expect("empty run should succeed");

    assert!(report.merged.is_empty());
    assert_eq!(report.bytes_copied, 0);
    assert!(sink.contents().is_empty());
}

#[test]
fn merge_rerun_is_byte_identical() {
    let sink = Arc::new(InMemorySink::new("out"));
    let engine = make_engine(
        ErrorPolicy::FastFail,
        vec![source("a.ext", "hello\n"), source("b.ext", "world\n")],
        SinkSpec::new("out", sink.clone()),
    );

    engine.run().expect("first run");
    let first = sink.contents();

    engine.run().expect("second run");
    let second = sink.contents();

    assert_eq!(first, second);
}

#[test]
fn merge_separates_content_without_trailing_newline() {
    let sink = Arc::new(InMemorySink::new("out"));
    let engine = make_engine(
        ErrorPolicy::FastFail,
        vec![source("a.ext", "hello"), source("b.ext", "world")],
        SinkSpec::new("out", sink.clone()),
    );

    engine.run().expect("run should succeed");

    // One separating newline, no blank line: the content had no newline
    // of its own.
    let expected = "--- FILE: a.ext ---\nhello\n--- FILE: b.ext ---\nworld\n";
    assert_eq!(sink.contents_string(), expected);
}

#[test]
fn merge_fast_fail_on_open_error() {
    // A fake source that always fails on open, simulating a permission
    // error between scan and merge.
    #[derive(Debug)]
    struct FailingSource {
        name: String,
    }

    impl SourceInput for FailingSource {
        fn name(&self) -> &str {
            &self.name
        }

        fn open(&self) -> std::io::Result<Box<dyn std::io::Read + Send>> {
            Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "simulated permission error",
            ))
        }
    }

    let failing = Arc::new(FailingSource {
        name: "locked.ext".to_string(),
    });

    let sink = Arc::new(InMemorySink::new("out"));
    let engine = make_engine(
        ErrorPolicy::FastFail,
        vec![
            SourceSpec::new("locked.ext", failing),
            source("b.ext", "world\n"),
        ],
        SinkSpec::new("out", sink.clone()),
    );

    let err = engine.run().expect_err("expected failure due to open error");

    assert_eq!(err.errors.len(), 1);
    let e = &err.errors[0];
    assert_eq!(e.stage, Stage::Open);
    assert_eq!(e.target, "locked.ext");

    // The run aborted before any source was written.
    assert!(sink.contents().is_empty());
}

#[test]
fn merge_custom_header_template() {
    let sink = Arc::new(InMemorySink::new("out"));
    let header = HeaderTemplate::new("=== {name} ===").unwrap();
    let engine = MergeEngine::new(
        vec![source("a.ext", "hello\n")],
        SinkSpec::new("out", sink.clone()),
        header,
        ErrorPolicy::FastFail,
    );

    engine.run().expect("run should succeed");

    assert_eq!(sink.contents_string(), "=== a.ext ===\nhello\n\n");
}
