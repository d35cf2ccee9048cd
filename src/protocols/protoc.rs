//! protoc plugin protocol: a `CodeGeneratorRequest` arrives on stdin and a
//! `CodeGeneratorResponse` is expected on stdout.
//!
//! This module only marshals data. It reads the request, maps descriptors to
//! [`ProtoFile`]s and turns artifacts or an error message into a response.

use std::collections::HashSet;
use std::io::{Read, Write};

use prost::Message;
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use prost_types::FileDescriptorProto;

use crate::generation::utils::package_module_path;
use crate::generation::{Artifact, ProtoFile, ProtoService};
use crate::protocols::ProtocolError;

/// Read and decode a request from `reader` until EOF
pub fn read_request<R: Read>(mut reader: R) -> Result<CodeGeneratorRequest, ProtocolError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    Ok(CodeGeneratorRequest::decode(input.as_slice())?)
}

/// Encode `response` and write it to `writer`
pub fn write_response<W: Write>(
    mut writer: W,
    response: &CodeGeneratorResponse,
) -> Result<(), ProtocolError> {
    let mut output = Vec::with_capacity(response.encoded_len());
    response.encode(&mut output)?;
    writer.write_all(&output)?;
    writer.flush()?;
    Ok(())
}

/// The request's parameter string, empty when protoc sent none
pub fn parameter(request: &CodeGeneratorRequest) -> &str {
    request.parameter.as_deref().unwrap_or_default()
}

/// Map every descriptor in the request to a [`ProtoFile`].
///
/// Files outside `file_to_generate` are kept (marked `generate: false`) so
/// the pipeline sees the same set protoc sent.
pub fn proto_files(request: &CodeGeneratorRequest) -> Vec<ProtoFile> {
    let targets: HashSet<&str> = request
        .file_to_generate
        .iter()
        .map(String::as_str)
        .collect();

    request
        .proto_file
        .iter()
        .map(|descriptor| proto_file(descriptor, targets.contains(descriptor.name())))
        .collect()
}

fn proto_file(descriptor: &FileDescriptorProto, generate: bool) -> ProtoFile {
    let package = descriptor.package().to_string();
    ProtoFile {
        name: descriptor.name().to_string(),
        import_path: package_module_path(&package),
        package,
        generate,
        services: descriptor
            .service
            .iter()
            .map(|service| ProtoService::new(service.name()))
            .collect(),
    }
}

/// Response carrying the generated files
pub fn success_response(artifacts: Vec<Artifact>) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        file: artifacts
            .into_iter()
            .map(|artifact| File {
                name: Some(artifact.path.to_string_lossy().replace('\\', "/")),
                insertion_point: None,
                content: Some(artifact.content),
                generated_code_info: None,
            })
            .collect(),
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    }
}

/// Response reporting a failed run; protoc prints `message` and fails
pub fn error_response(message: impl Into<String>) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        error: Some(message.into()),
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    }
}
