//! Output layer - where generated files are collected before protoc gets them

pub mod generated_files;

pub use generated_files::*;
