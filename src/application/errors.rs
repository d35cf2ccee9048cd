//! Application layer error types

use thiserror::Error;

/// Failures that prevent a response from reaching protoc at all.
///
/// Generation failures are not in here: they travel back to protoc inside
/// the response's `error` field.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Protocol error: {0}")]
    ProtocolError(#[from] crate::protocols::ProtocolError),
}
