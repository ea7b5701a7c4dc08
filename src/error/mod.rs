//! Error types and policies for merge runs.
//!
//! This module provides:
//! - `ErrorPolicy`: Controls whether an unreadable source aborts or is skipped
//! - `Stage`: Indicates where a failure occurred in the merge pipeline
//! - `StepError`: A single failure with context
//! - `RunError`: The collection of failures a build or run surfaced

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the run at the first source that cannot be opened
    #[default]
    FastFail,
    /// Skip sources that cannot be opened and record them in the report
    Skip,
}

impl ErrorPolicy {
    /// Parse a policy from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fast_fail" | "fastfail" => Some(ErrorPolicy::FastFail),
            "skip" => Some(ErrorPolicy::Skip),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while enumerating the target directory
    Scan,
    /// Error while opening a source stream
    Open,
    /// Error while copying source bytes
    Read,
    /// Error while opening or writing the sink
    Write,
    /// Error while interpreting a manifest
    Manifest,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Scan => write!(f, "Scan"),
            Stage::Open => write!(f, "Open"),
            Stage::Read => write!(f, "Read"),
            Stage::Write => write!(f, "Write"),
            Stage::Manifest => write!(f, "Manifest"),
        }
    }
}

#[derive(Debug)]
pub struct StepError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the target (file path, "-" for stdout, directory, etc.)
    pub target: String,
    /// The underlying error
    pub error: Box<dyn std::error::Error + Send + Sync>,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.target, self.error)
    }
}

impl std::error::Error for StepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

/// A failed merge build or run.
///
/// Under `ErrorPolicy::FastFail` this holds exactly the aborting error;
/// skipped sources are reported on `MergeReport`, not here.
#[derive(Debug, Error)]
pub struct RunError {
    /// Collection of individual errors
    pub errors: Vec<StepError>,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "merge encountered {} error(s):", self.errors.len())?;
        for (i, e) in self.errors.iter().enumerate() {
            writeln!(f, "  #{}: {}", i + 1, e)?;
        }
        Ok(())
    }
}

impl RunError {
    /// Create a run error with a single step error.
    pub fn single(error: StepError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Check if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl From<StepError> for RunError {
    fn from(error: StepError) -> Self {
        Self::single(error)
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
