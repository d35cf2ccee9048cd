//! Tera-based template renderer implementation

use std::io::ErrorKind;
use std::path::Path;

use tera::{Context, Tera};

use crate::generation::{GenerationError, ServiceRecord, TemplateRenderer, error_chain};

/// Name the template is registered under inside Tera
const TEMPLATE_NAME: &str = "service_registry";

/// Tera-based template renderer.
///
/// Every call re-reads and recompiles the template; a plugin run is short
/// enough that caching buys nothing.
pub struct TeraTemplateRenderer;

impl TeraTemplateRenderer {
    pub fn new() -> Self {
        Self
    }

    fn load(&self, template_path: &Path) -> Result<String, GenerationError> {
        std::fs::read_to_string(template_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => GenerationError::TemplateNotFound(template_path.to_path_buf()),
            _ => GenerationError::TemplateRead {
                path: template_path.to_path_buf(),
                source: e,
            },
        })
    }
}

impl Default for TeraTemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for TeraTemplateRenderer {
    fn render(
        &self,
        template_path: &Path,
        record: &ServiceRecord,
    ) -> Result<String, GenerationError> {
        let content = self.load(template_path)?;

        // No .html suffix on the name, so autoescaping stays off
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, &content)
            .map_err(|e| GenerationError::TemplateParse(error_chain(&e)))?;

        let value = serde_json::to_value(record)
            .map_err(|e| GenerationError::TemplateExec(e.to_string()))?;
        let context = Context::from_value(value)
            .map_err(|e| GenerationError::TemplateExec(error_chain(&e)))?;

        let rendered = tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| GenerationError::TemplateExec(error_chain(&e)))?;

        tracing::trace!(
            template = %template_path.display(),
            service = %record.service_name,
            bytes = rendered.len(),
            "Rendered template"
        );

        Ok(rendered)
    }
}
