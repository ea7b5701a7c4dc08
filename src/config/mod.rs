//! Configuration types: run specifications and the manifest layer.

mod manifest;
mod spec;

pub use manifest::ManifestConfig;
pub use spec::{OutputMode, ScanOrder, SinkSpec, SourceSpec, SuffixFilter};
