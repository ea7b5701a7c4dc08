//! Run specifications: suffix filter, ordering, output mode, source and sink specs.

use std::sync::Arc;

use crate::io::{MergeSink, SourceInput};

/// Filename suffix selecting which directory entries are merged.
///
/// A filter given without a leading dot is normalized to carry one, so
/// `"rs"` and `".rs"` are the same filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixFilter(String);

impl SuffixFilter {
    /// Create a filter, normalizing to a leading dot.
    pub fn new(suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        if suffix.starts_with('.') {
            Self(suffix)
        } else {
            Self(format!(".{suffix}"))
        }
    }

    /// The normalized suffix, including the leading dot.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a basename matches the filter.
    ///
    /// A name that *is* the suffix (no stem, e.g. a dotfile named `.rs`)
    /// does not match.
    pub fn matches(&self, name: &str) -> bool {
        name.len() > self.0.len() && name.ends_with(self.0.as_str())
    }
}

impl Default for SuffixFilter {
    fn default() -> Self {
        Self(".rs".to_string())
    }
}

/// Order in which matched files are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// Platform directory listing order, no explicit sort
    #[default]
    Directory,
    /// Deterministic sort by basename
    Lexicographic,
}

impl ScanOrder {
    /// Parse an order from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "directory" | "listing" => Some(ScanOrder::Directory),
            "lexicographic" | "sorted" => Some(ScanOrder::Lexicographic),
            _ => None,
        }
    }
}

/// How the sink is opened at the start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Truncate (or create) the output before writing
    #[default]
    Truncate,
    /// Keep existing output content and append after it
    Append,
}

impl OutputMode {
    /// Parse a mode from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "truncate" | "overwrite" => Some(OutputMode::Truncate),
            "append" => Some(OutputMode::Append),
            _ => None,
        }
    }
}

/// Specification for a single merge source.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    /// Raw identifier used in error messages (full path for files)
    pub raw: String,
    /// The source implementation
    pub source: Arc<dyn SourceInput>,
}

impl SourceSpec {
    /// Create a new source specification.
    pub fn new(raw: impl Into<String>, source: Arc<dyn SourceInput>) -> Self {
        Self {
            raw: raw.into(),
            source,
        }
    }
}

/// Specification for the single merge sink.
#[derive(Debug, Clone)]
pub struct SinkSpec {
    /// Raw identifier used in error messages ("-" for stdout)
    pub raw: String,
    /// The sink implementation
    pub sink: Arc<dyn MergeSink>,
    /// How the sink is opened
    pub mode: OutputMode,
}

impl SinkSpec {
    /// Create a new sink specification with the default truncate mode.
    pub fn new(raw: impl Into<String>, sink: Arc<dyn MergeSink>) -> Self {
        Self {
            raw: raw.into(),
            sink,
            mode: OutputMode::default(),
        }
    }

    /// Set the output mode.
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }
}
