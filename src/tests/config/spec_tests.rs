//! Tests for SuffixFilter, ScanOrder, OutputMode and the run specs.

use std::sync::Arc;

use crate::config::{OutputMode, ScanOrder, SinkSpec, SourceSpec, SuffixFilter};
use crate::io::{InMemorySink, InMemorySource};

#[test]
fn suffix_filter_normalizes_leading_dot() {
    assert_eq!(SuffixFilter::new("rs").as_str(), ".rs");
    assert_eq!(SuffixFilter::new(".rs").as_str(), ".rs");
}

#[test]
fn suffix_filter_matches_basenames() {
    let filter = SuffixFilter::new(".ext");
    assert!(filter.matches("a.ext"));
    assert!(filter.matches("a.b.ext"));
    assert!(!filter.matches("a.txt"));
    assert!(!filter.matches("aext"));
    // A name that is exactly the suffix has no stem and never matches.
    assert!(!filter.matches(".ext"));
}

#[test]
fn suffix_filter_default_is_rs() {
    assert_eq!(SuffixFilter::default().as_str(), ".rs");
}

#[test]
fn scan_order_from_str() {
    assert_eq!(ScanOrder::from_str("directory"), Some(ScanOrder::Directory));
    assert_eq!(ScanOrder::from_str("listing"), Some(ScanOrder::Directory));
    assert_eq!(
        ScanOrder::from_str("LEXICOGRAPHIC"),
        Some(ScanOrder::Lexicographic)
    );
    assert_eq!(ScanOrder::from_str("sorted"), Some(ScanOrder::Lexicographic));
    assert_eq!(ScanOrder::from_str("random"), None);
}

#[test]
fn output_mode_from_str() {
    assert_eq!(OutputMode::from_str("truncate"), Some(OutputMode::Truncate));
    assert_eq!(OutputMode::from_str("overwrite"), Some(OutputMode::Truncate));
    assert_eq!(OutputMode::from_str("append"), Some(OutputMode::Append));
    assert_eq!(OutputMode::from_str("merge"), None);
}

#[test]
fn source_spec_keeps_raw_identifier() {
    let src = Arc::new(InMemorySource::from_string("a.ext", "data"));
    let spec = SourceSpec::new("/tmp/a.ext", src);

    assert_eq!(spec.raw, "/tmp/a.ext");
    assert_eq!(spec.source.name(), "a.ext");
}

#[test]
fn sink_spec_defaults_to_truncate() {
    let sink = Arc::new(InMemorySink::new("out"));
    let spec = SinkSpec::new("out", sink);

    assert_eq!(spec.mode, OutputMode::Truncate);

    let spec = spec.with_mode(OutputMode::Append);
    assert_eq!(spec.mode, OutputMode::Append);
}
