//! Errors at the protoc plugin boundary

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("Failed to decode CodeGeneratorRequest: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("Failed to encode CodeGeneratorResponse: {0}")]
    Encode(#[from] prost::EncodeError),

    #[error("Plugin I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
