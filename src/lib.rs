//! # mergeio
//!
//! Concatenate a directory's files into one delimited output.
//!
//! ## Overview
//!
//! mergeio provides:
//! - **Directory scanning**: enumerate regular files by suffix filter,
//!   with the output file kept out of its own merge
//! - **Delimited concatenation**: each source is written as a
//!   `--- FILE: <name> ---` header line, the full content, and a
//!   separating newline
//! - **Source/sink abstraction**: files, stdout, or in-memory buffers
//! - **Error handling**: fail fast on the first unreadable source
//!   (default) or skip it and keep going
//! - **Manifest configuration**: define a merge run via a YAML/JSON file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mergeio::{MergeBuilder, ScanOrder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = MergeBuilder::new()
//!         .with_dir("src")
//!         .with_suffix(".rs")
//!         .with_output("merged_output.txt")
//!         .with_order(ScanOrder::Lexicographic)
//!         .build()?;
//!
//!     let report = engine.run()?;
//!     eprintln!("merged {} file(s)", report.merged.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `yaml` - YAML manifest loading (enabled by default)
//! - `json` - JSON manifest loading (enabled by default)
//! - `miette` - Pretty error reporting with miette
//!
//! ## Semantics
//!
//! - The output is truncated at the start of each run; a run over an
//!   unchanged directory is byte-for-byte idempotent.
//! - Enumeration follows the platform directory listing order unless
//!   `ScanOrder::Lexicographic` is selected.
//! - The separating newline after each source renders as a blank line
//!   whenever the source content is newline-terminated.
//! - Read and write failures abort the run mid-stream, leaving a partial
//!   output; only *open* failures are skippable via `ErrorPolicy::Skip`.

// Core modules
pub mod builder;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod header;
pub mod io;
pub mod scan;

// Re-exports for convenience
pub use builder::{DEFAULT_OUTPUT_NAME, MergeBuilder};
pub use config::{ManifestConfig, OutputMode, ScanOrder, SinkSpec, SourceSpec, SuffixFilter};
pub use engine::{MergeEngine, MergeReport};
pub use error::{ErrorPolicy, RunError, Stage, StepError};
pub use header::{DEFAULT_HEADER_TEMPLATE, HeaderTemplate, HeaderTemplateError};
pub use io::{FileSink, FileSource, InMemorySink, InMemorySource, MergeSink, SourceInput, StdoutSink};
pub use scan::{SourcePath, scan_directory};

/// Build a MergeEngine from a ManifestConfig.
pub fn build_engine_from_manifest(config: ManifestConfig) -> Result<MergeEngine, RunError> {
    builder::MergeBuilder::from_manifest(config)?.build()
}

/// Build a MergeEngine from a ManifestConfig, allowing the caller to
/// further customize the MergeBuilder before it is built. This is a
/// natural hook point for swapping the sink or the header template based
/// on the parsed configuration.
pub fn build_engine_from_manifest_with<F>(
    config: ManifestConfig,
    customize: F,
) -> Result<MergeEngine, RunError>
where
    F: FnOnce(builder::MergeBuilder) -> builder::MergeBuilder,
{
    let builder = builder::MergeBuilder::from_manifest(config)?;
    let builder = customize(builder);
    builder.build()
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::MergeDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
