//! Port interfaces for the generation domain

use std::path::Path;

use crate::generation::{GenerationError, ServiceRecord};

/// Renders a template file against one service's naming data
pub trait TemplateRenderer: Send + Sync {
    /// Load, compile and execute the template at `template_path`
    fn render(&self, template_path: &Path, record: &ServiceRecord)
    -> Result<String, GenerationError>;
}

/// Canonicalizes rendered text into stably formatted source
pub trait SourceFormatter: Send + Sync {
    /// Format `source`, failing if it is not syntactically valid
    fn format(&self, source: &str) -> Result<String, GenerationError>;
}
