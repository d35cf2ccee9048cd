//! Protocol module - the protoc plugin boundary
//!
//! Decodes what protoc sends, encodes what it expects back. No generation
//! logic lives here.

pub mod errors;
pub mod protoc;

pub use errors::*;
