//! I/O abstractions for merge sources and the merge sink.
//!
//! This module provides:
//! - `SourceInput`: Trait for merge sources
//! - `MergeSink`: Trait for the merge destination
//! - Standard implementations for files and stdout
//! - In-memory implementations for testing

mod memory;
mod sink;
mod source;
mod std_io;

pub use memory::{InMemorySink, InMemorySource};
pub use sink::MergeSink;
pub use source::SourceInput;
pub use std_io::{FileSink, FileSource, StdoutSink};
