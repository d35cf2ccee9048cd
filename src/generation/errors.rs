//! Error types for the generation domain

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating service files
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid plugin parameter: {0}")]
    Config(String),

    #[error("Template file does not exist: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Failed to read template file {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse template: {0}")]
    TemplateParse(String),

    #[error("Failed to execute template: {0}")]
    TemplateExec(String),

    #[error("Failed to format generated source: {0}")]
    Format(String),

    #[error("Generating {service} from {file}: {source}")]
    Service {
        file: String,
        service: String,
        #[source]
        source: Box<GenerationError>,
    },
}

impl GenerationError {
    /// Wrap this error with the file and service that were being processed
    pub fn in_service(self, file: &str, service: &str) -> Self {
        GenerationError::Service {
            file: file.to_string(),
            service: service.to_string(),
            source: Box::new(self),
        }
    }

    /// The underlying error, with any service context peeled off
    pub fn root(&self) -> &GenerationError {
        match self {
            GenerationError::Service { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Renders an error and its source chain as a single line, skipping causes
/// whose text already appears in the message.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}
