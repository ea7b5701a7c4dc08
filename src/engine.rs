//! Synchronous merge engine: one writer over an ordered source list.

use std::io::{Read, Write};

use crate::config::{OutputMode, SinkSpec, SourceSpec};
use crate::error::{ErrorPolicy, RunError, Stage, StepError};
use crate::header::HeaderTemplate;

/// Summary of a completed run.
#[derive(Debug, Default)]
pub struct MergeReport {
    /// Basenames merged, in write order.
    pub merged: Vec<String>,
    /// Content bytes copied from sources, headers and separators excluded.
    pub bytes_copied: u64,
    /// Sources skipped under `ErrorPolicy::Skip`.
    pub skipped: Vec<StepError>,
}

/// Synchronous engine concatenating every source into the sink.
///
/// Execution is strictly sequential: the sink is opened once, then each
/// source is opened, copied and closed in order.
#[derive(Debug)]
pub struct MergeEngine {
    sources: Vec<SourceSpec>,
    sink: SinkSpec,
    header: HeaderTemplate,
    error_policy: ErrorPolicy,
}

impl MergeEngine {
    /// Create a new merge engine.
    pub fn new(
        sources: Vec<SourceSpec>,
        sink: SinkSpec,
        header: HeaderTemplate,
        error_policy: ErrorPolicy,
    ) -> Self {
        Self {
            sources,
            sink,
            header,
            error_policy,
        }
    }

    /// Get the source specifications.
    pub fn sources(&self) -> &[SourceSpec] {
        &self.sources
    }

    /// Get the sink specification.
    pub fn sink(&self) -> &SinkSpec {
        &self.sink
    }

    /// Get the header template.
    pub fn header(&self) -> &HeaderTemplate {
        &self.header
    }

    /// Get the error policy.
    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// Run the merge.
    ///
    /// Opens the sink (truncating by default), then writes for each source:
    /// the rendered header line, the full source content, one separating
    /// newline. With no sources the sink still ends up truncated and the
    /// run succeeds with an empty report.
    ///
    /// Open failures follow the error policy. Read and write failures are
    /// fatal under both policies: once a header has been written, a source
    /// can no longer be unwritten.
    pub fn run(&self) -> Result<MergeReport, RunError> {
        let mut writer = self.open_sink()?;
        let mut report = MergeReport::default();

        for spec in &self.sources {
            let mut reader = match spec.source.open() {
                Ok(reader) => reader,
                Err(e) => {
                    let err = StepError {
                        stage: Stage::Open,
                        target: spec.raw.clone(),
                        error: Box::new(e),
                    };
                    match self.error_policy {
                        ErrorPolicy::FastFail => return Err(RunError::single(err)),
                        ErrorPolicy::Skip => {
                            report.skipped.push(err);
                            continue;
                        }
                    }
                }
            };

            let copied = self.append_source(spec, &mut *reader, &mut *writer)?;
            report.merged.push(spec.source.name().to_string());
            report.bytes_copied += copied;
        }

        writer.flush().map_err(|e| self.write_error(e))?;

        Ok(report)
    }

    /// Open the sink according to its output mode.
    fn open_sink(&self) -> Result<Box<dyn Write + Send>, RunError> {
        let result = match self.sink.mode {
            OutputMode::Truncate => self.sink.sink.open_truncate(),
            OutputMode::Append => self.sink.sink.open_append(),
        };

        result.map_err(|e| {
            RunError::single(StepError {
                stage: Stage::Open,
                target: self.sink.raw.clone(),
                error: Box::new(e),
            })
        })
    }

    /// Copy one source into the writer, delimited front and back.
    fn append_source(
        &self,
        spec: &SourceSpec,
        reader: &mut dyn Read,
        writer: &mut dyn Write,
    ) -> Result<u64, RunError> {
        let header = self.header.render(spec.source.name());
        writer
            .write_all(header.as_bytes())
            .map_err(|e| self.write_error(e))?;
        writer.write_all(b"\n").map_err(|e| self.write_error(e))?;

        let copied = std::io::copy(reader, writer).map_err(|e| {
            RunError::single(StepError {
                stage: Stage::Read,
                target: spec.raw.clone(),
                error: Box::new(e),
            })
        })?;

        // Separating newline; renders as a blank line whenever the source
        // content is itself newline-terminated.
        writer.write_all(b"\n").map_err(|e| self.write_error(e))?;

        Ok(copied)
    }

    fn write_error(&self, e: std::io::Error) -> RunError {
        RunError::single(StepError {
            stage: Stage::Write,
            target: self.sink.raw.clone(),
            error: Box::new(e),
        })
    }
}
