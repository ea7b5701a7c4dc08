//! Builder wiring a scanned directory (or explicit specs) into a MergeEngine.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{
    ManifestConfig, OutputMode, ScanOrder, SinkSpec, SourceSpec, SuffixFilter,
};
use crate::engine::MergeEngine;
use crate::error::{ErrorPolicy, RunError, Stage, StepError};
use crate::header::HeaderTemplate;
use crate::io::{FileSink, FileSource, StdoutSink};
use crate::scan::scan_directory;

/// Default output basename, written into the target directory.
pub const DEFAULT_OUTPUT_NAME: &str = "merged_output.txt";

#[derive(Debug)]
pub struct MergeBuilder {
    dir: PathBuf,
    suffix: SuffixFilter,
    output: String,
    order: ScanOrder,
    error_policy: ErrorPolicy,
    output_mode: OutputMode,
    header: HeaderTemplate,
    source_specs: Vec<SourceSpec>,
    sink_spec: Option<SinkSpec>,
}

impl MergeBuilder {
    pub fn new() -> Self {
        Self {
            dir: PathBuf::from("."),
            suffix: SuffixFilter::default(),
            output: DEFAULT_OUTPUT_NAME.to_string(),
            order: ScanOrder::default(),
            error_policy: ErrorPolicy::default(),
            output_mode: OutputMode::default(),
            header: HeaderTemplate::default(),
            source_specs: Vec::new(),
            sink_spec: None,
        }
    }

    /// Set the target directory to scan.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Set the suffix filter.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = SuffixFilter::new(suffix);
        self
    }

    /// Set the output path. "-" selects stdout; a relative path is
    /// interpreted inside the target directory.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the scan order.
    pub fn with_order(mut self, order: ScanOrder) -> Self {
        self.order = order;
        self
    }

    /// Set the error policy.
    pub fn with_mode(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Set the output mode.
    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    /// Set the header template.
    pub fn with_header(mut self, header: HeaderTemplate) -> Self {
        self.header = header;
        self
    }

    /// Add a pre-built source spec. When any explicit spec is present the
    /// directory is not scanned.
    pub fn add_source_spec(mut self, spec: SourceSpec) -> Self {
        self.source_specs.push(spec);
        self
    }

    /// Replace the sink with a pre-built spec.
    pub fn with_sink_spec(mut self, spec: SinkSpec) -> Self {
        self.sink_spec = Some(spec);
        self
    }

    /// Build the engine: resolve the sink, scan the target directory and
    /// wire every matched file as a source.
    ///
    /// Scanning happens before the output is touched, so a missing or
    /// unreadable target directory fails the build without producing any
    /// output.
    pub fn build(mut self) -> Result<MergeEngine, RunError> {
        let sink = match self.sink_spec.take() {
            Some(spec) => spec,
            None => self.resolve_sink(),
        };

        let sources = if self.source_specs.is_empty() {
            self.scan_sources(&sink)?
        } else {
            self.source_specs
        };

        Ok(MergeEngine::new(
            sources,
            sink,
            self.header,
            self.error_policy,
        ))
    }

    /// Build a MergeBuilder from a manifest configuration.
    pub fn from_manifest(config: ManifestConfig) -> Result<Self, RunError> {
        let mut builder = MergeBuilder::new();

        if let Some(dir) = config.dir {
            builder = builder.with_dir(dir);
        }
        if let Some(suffix) = config.suffix {
            builder = builder.with_suffix(suffix);
        }
        if let Some(output) = config.output {
            builder = builder.with_output(output);
        }
        if let Some(policy) = config.error_policy.as_deref() {
            builder = builder.with_mode(ErrorPolicy::from_str(policy).unwrap_or_default());
        }
        if let Some(order) = config.order.as_deref() {
            builder = builder.with_order(ScanOrder::from_str(order).unwrap_or_default());
        }
        if let Some(template) = config.header {
            let header = HeaderTemplate::new(template).map_err(|e| {
                RunError::single(StepError {
                    stage: Stage::Manifest,
                    target: "header".to_string(),
                    error: Box::new(e),
                })
            })?;
            builder = builder.with_header(header);
        }

        Ok(builder)
    }

    /// Resolve the configured output path into a sink spec.
    fn resolve_sink(&self) -> SinkSpec {
        if self.output == "-" {
            return SinkSpec::new("-", Arc::new(StdoutSink::new())).with_mode(self.output_mode);
        }

        let path = self.output_path();
        let raw = path.to_string_lossy().into_owned();
        SinkSpec::new(raw, Arc::new(FileSink::new(path))).with_mode(self.output_mode)
    }

    /// Full output path: relative outputs land inside the target directory.
    fn output_path(&self) -> PathBuf {
        let output = Path::new(&self.output);
        if output.is_absolute() {
            output.to_path_buf()
        } else {
            self.dir.join(output)
        }
    }

    /// Scan the target directory into source specs, keeping the output
    /// file out of its own merge.
    fn scan_sources(&self, sink: &SinkSpec) -> Result<Vec<SourceSpec>, RunError> {
        let output_path = self.output_path();
        let exclude = if sink.raw == "-" {
            None
        } else {
            Some(output_path.as_path())
        };

        let matched = scan_directory(&self.dir, &self.suffix, exclude, self.order).map_err(
            |e| {
                RunError::single(StepError {
                    stage: Stage::Scan,
                    target: self.dir.to_string_lossy().into_owned(),
                    error: Box::new(e),
                })
            },
        )?;

        Ok(matched
            .into_iter()
            .map(|source| {
                let raw = source.path.to_string_lossy().into_owned();
                SourceSpec::new(raw, Arc::new(FileSource::new(source.path)))
            })
            .collect())
    }
}

impl Default for MergeBuilder {
    fn default() -> Self {
        MergeBuilder::new()
    }
}
