//! Delimiter header rendering.

use thiserror::Error;

/// Placeholder substituted with the source basename.
const NAME_SLOT: &str = "{name}";

/// Default header shape: `--- FILE: <name> ---`.
pub const DEFAULT_HEADER_TEMPLATE: &str = "--- FILE: {name} ---";

/// Renders the delimiter line written before each merged source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
    template: String,
}

impl HeaderTemplate {
    /// Create a template. Fails when the `{name}` placeholder is missing.
    pub fn new(template: impl Into<String>) -> Result<Self, HeaderTemplateError> {
        let template = template.into();
        if !template.contains(NAME_SLOT) {
            return Err(HeaderTemplateError::MissingNameSlot);
        }
        Ok(Self { template })
    }

    /// The raw template string.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Render the header line for one source, without a trailing newline.
    pub fn render(&self, name: &str) -> String {
        self.template.replace(NAME_SLOT, name)
    }
}

impl Default for HeaderTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_HEADER_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderTemplateError {
    #[error("header template must contain the {{name}} placeholder")]
    MissingNameSlot,
}
