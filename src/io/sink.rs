//! Merge sink trait definition.

use std::fmt::Debug;
use std::io::Write;

/// Trait for the single merge destination.
///
/// Implementors provide a writable stream to a file, stdout, or an
/// in-memory buffer.
pub trait MergeSink: Send + Sync + Debug {
    /// Returns a unique identifier for this sink.
    ///
    /// This is used for error messages. Convention: "-" for stdout,
    /// file path for files.
    fn id(&self) -> &str;

    /// Open the sink for writing, truncating any existing content.
    fn open_truncate(&self) -> std::io::Result<Box<dyn Write + Send>>;

    /// Open the sink for appending to existing content.
    fn open_append(&self) -> std::io::Result<Box<dyn Write + Send>>;
}
