//! Manifest configuration for defining a merge run in a file.

use serde::Deserialize;

/// Configuration for one merge run, loadable from YAML or JSON.
///
/// Every field is optional; missing fields fall back to the builder
/// defaults (current directory, `.rs`, `merged_output.txt`).
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestConfig {
    /// Target directory to scan
    #[serde(default)]
    pub dir: Option<String>,
    /// Suffix filter, with or without the leading dot
    #[serde(default)]
    pub suffix: Option<String>,
    /// Output path, "-" for stdout
    #[serde(default)]
    pub output: Option<String>,
    /// Error policy: "fast_fail" or "skip"
    #[serde(default)]
    pub error_policy: Option<String>,
    /// Scan order: "directory" or "lexicographic"
    #[serde(default)]
    pub order: Option<String>,
    /// Header template containing the "{name}" placeholder
    #[serde(default)]
    pub header: Option<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            dir: None,
            suffix: None,
            output: None,
            error_policy: None,
            order: None,
            header: None,
        }
    }
}

impl ManifestConfig {
    /// Create a new empty manifest configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target directory.
    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Set the suffix filter.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Set the output path.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Set the error policy.
    pub fn with_error_policy(mut self, policy: impl Into<String>) -> Self {
        self.error_policy = Some(policy.into());
        self
    }

    /// Set the scan order.
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Set the header template.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Load a manifest from a YAML reader.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_reader(reader: impl std::io::Read) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }

    /// Load a manifest from a JSON reader.
    #[cfg(feature = "json")]
    pub fn from_json_reader(reader: impl std::io::Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}
