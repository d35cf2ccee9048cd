//! Infrastructure layer - adapters for templates, formatting and output

pub mod generation;
pub mod output;

pub use generation::*;
pub use output::*;
