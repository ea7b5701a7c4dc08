//! Source input trait definition.

use std::fmt::Debug;
use std::io::Read;

/// Trait for merge sources.
///
/// Implementors provide a readable stream plus the basename under which the
/// source appears in the delimiter header.
pub trait SourceInput: Send + Sync + Debug {
    /// Returns the basename written into the delimiter header.
    ///
    /// Also used for error messages and the run report.
    fn name(&self) -> &str;

    /// Open and return a new readable stream.
    ///
    /// Each call should return a fresh stream positioned at the beginning.
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>>;
}
