//! Generation orchestration - drives the per-file, per-service fan-out

use std::path::PathBuf;
use std::sync::Arc;

use crate::generation::{
    Artifact, GenerationError, PluginOptions, ProtoFile, ProtoService, ServiceRecord,
    SourceFormatter, TemplateRenderer,
};
use crate::infrastructure::{GeneratedFiles, RustFormatter, TeraTemplateRenderer, emit_path};

/// Orchestrates the code generation workflow
pub struct GenerationOrchestrator {
    template_renderer: Arc<dyn TemplateRenderer>,
    formatter: Arc<dyn SourceFormatter>,
}

impl GenerationOrchestrator {
    /// Create a new generation orchestrator
    pub fn new(
        template_renderer: Arc<dyn TemplateRenderer>,
        formatter: Arc<dyn SourceFormatter>,
    ) -> Self {
        Self {
            template_renderer,
            formatter,
        }
    }

    /// Execute a whole plugin run.
    ///
    /// Produces one artifact per service of every file marked for
    /// generation. The first failure aborts the run and nothing generated
    /// so far is returned.
    pub fn run(
        &self,
        parameter: &str,
        files: &[ProtoFile],
    ) -> Result<Vec<Artifact>, GenerationError> {
        let options = PluginOptions::parse(parameter)?;

        tracing::debug!(
            template = %options.template_file.display(),
            output_dir = %options.output_dir.display(),
            package_naming = %options.package_naming,
            file_naming = %options.file_naming,
            "Parsed plugin options"
        );

        let mut generated = GeneratedFiles::new();

        for file in files.iter().filter(|f| f.generate) {
            tracing::info!(
                file = %file.name,
                services = file.services.len(),
                "Generating service files"
            );

            for service in &file.services {
                let (path, content) = self
                    .generate_service(file, service, &options)
                    .map_err(|e| e.in_service(&file.name, &service.name))?;
                generated.emit(path, content);
            }
        }

        tracing::info!(count = generated.len(), "Generation complete");
        Ok(generated.into_artifacts())
    }

    fn generate_service(
        &self,
        file: &ProtoFile,
        service: &ProtoService,
        options: &PluginOptions,
    ) -> Result<(PathBuf, String), GenerationError> {
        let record = ServiceRecord::derive(file, service, options);
        tracing::debug!(
            service = %service.name,
            service_name = %record.service_name,
            proto_package_name = %record.proto_package_name,
            "Derived service record"
        );

        let rendered = self
            .template_renderer
            .render(&options.template_file, &record)?;
        let formatted = self.formatter.format(&rendered)?;
        let path = emit_path(&service.name, &record.service_name, options);

        Ok((path, formatted))
    }
}

impl Default for GenerationOrchestrator {
    fn default() -> Self {
        Self::new(
            Arc::new(TeraTemplateRenderer::new()),
            Arc::new(RustFormatter::new()),
        )
    }
}
