//! Generation infrastructure - concrete renderer and formatter

pub mod formatter;
pub mod template_renderer;

pub use formatter::RustFormatter;
pub use template_renderer::TeraTemplateRenderer;
