//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{RunError, StepError};

/// A diagnostic wrapper for merge errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct MergeDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<StepError> for MergeDiagnostic {
    fn from(e: StepError) -> Self {
        MergeDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            source: Some(e.error),
            help: Some("Check the target directory, suffix filter and output path".into()),
            severity: Severity::Error,
        }
    }
}

impl From<RunError> for miette::Report {
    fn from(run: RunError) -> Self {
        miette::Report::new(MergeDiagnostic::from(run))
    }
}

impl From<RunError> for MergeDiagnostic {
    fn from(run: RunError) -> Self {
        let first = run.errors.into_iter().next();
        if let Some(e) = first {
            MergeDiagnostic::from(e)
        } else {
            MergeDiagnostic {
                message: "Unknown merge error".into(),
                source: None,
                help: None,
                severity: Severity::Error,
            }
        }
    }
}
