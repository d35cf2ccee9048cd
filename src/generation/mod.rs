//! Generation domain module - turns protobuf services into source files
//!
//! This module holds the core of the plugin: parsing the parameter string,
//! deriving per-service naming data, and orchestrating rendering, formatting
//! and emission for every service protoc asked for.

pub mod errors;
pub mod naming;
pub mod options;
pub mod orchestrator;
pub mod traits;
pub mod types;
pub mod utils;

pub use errors::*;
pub use naming::*;
pub use options::*;
pub use orchestrator::*;
pub use traits::*;
pub use types::*;
