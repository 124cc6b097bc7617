//! Relnotes Changelog - Release notes extraction and rendering
//!
//! This crate pulls the newest entry out of a `Release_Notes.md` style
//! changelog and renders it as a standalone HTML page for update feeds.

pub mod artifacts;
pub mod formatter;
pub mod parser;
pub mod types;

pub use artifacts::{extract_to_dir, render_in_dir};
pub use formatter::HtmlFormatter;
pub use parser::{extract_latest, parse_heading};
pub use types::{ExtractionResult, Heading, RenderedPage, VersionEntry};
