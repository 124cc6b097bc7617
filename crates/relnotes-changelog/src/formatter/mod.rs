//! Release notes formatters

mod html;
mod template;

pub use html::{compose_markdown, normalize_bullets, HtmlFormatter};
pub use template::wrap_document;
