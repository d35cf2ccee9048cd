//! protoc plugin that renders one Rust source file per protobuf service.
//!
//! protoc hands the plugin a `CodeGeneratorRequest`; for every service in a
//! file marked for generation the plugin derives naming data, renders a
//! user-supplied Tera template against it, formats the result with
//! `prettyplease` and returns it as a generated file.
#![deny(unsafe_code)]

pub mod application;
pub mod generation;
pub mod infrastructure;
pub mod protocols;
