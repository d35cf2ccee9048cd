//! Use case for answering a single protoc plugin request

use std::io::{Read, Write};
use std::sync::Arc;

use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};

use crate::application::ApplicationError;
use crate::generation::{GenerationOrchestrator, error_chain};
use crate::protocols::protoc;

/// Use case for generating service files from a protoc request
pub struct GeneratePluginUseCase {
    generation_orchestrator: Arc<GenerationOrchestrator>,
}

impl GeneratePluginUseCase {
    pub fn new(generation_orchestrator: Arc<GenerationOrchestrator>) -> Self {
        Self {
            generation_orchestrator,
        }
    }

    /// Turn a request into a response.
    ///
    /// `parameter_override` replaces the request's own parameter string when
    /// set. Generation failures become an error response carrying no files.
    pub fn execute(
        &self,
        request: &CodeGeneratorRequest,
        parameter_override: Option<&str>,
    ) -> CodeGeneratorResponse {
        let parameter = parameter_override.unwrap_or_else(|| protoc::parameter(request));
        let files = protoc::proto_files(request);

        match self.generation_orchestrator.run(parameter, &files) {
            Ok(artifacts) => protoc::success_response(artifacts),
            Err(e) => {
                let message = error_chain(&e);
                tracing::error!(error = %message, "Generation failed");
                protoc::error_response(message)
            }
        }
    }

    /// Read a request from `input`, answer it, write the response to `output`
    pub fn run<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
        parameter_override: Option<&str>,
    ) -> Result<(), ApplicationError> {
        let request = protoc::read_request(input)?;
        tracing::debug!(
            files = request.proto_file.len(),
            targets = request.file_to_generate.len(),
            "Received CodeGeneratorRequest"
        );

        let response = self.execute(&request, parameter_override);
        protoc::write_response(output, &response)?;
        Ok(())
    }
}

impl Default for GeneratePluginUseCase {
    fn default() -> Self {
        Self::new(Arc::new(GenerationOrchestrator::default()))
    }
}
