//! Core types for the generation domain

use std::path::PathBuf;

/// A `.proto` file as handed over by protoc, reduced to what naming needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtoFile {
    /// Path of the file relative to the protoc include root
    pub name: String,
    /// Declared protobuf package, e.g. `proto.orders`
    pub package: String,
    /// Rust module path of the package's generated types, e.g. `proto::orders`
    pub import_path: String,
    /// Whether protoc asked for this file to be generated
    pub generate: bool,
    pub services: Vec<ProtoService>,
}

/// A service declared in a `.proto` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtoService {
    pub name: String,
}

impl ProtoService {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Generated artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}
