//! Flat-file hand-off between the extraction and rendering stages
//!
//! The extraction stage writes the newest version, previous version, title
//! and bullet block to separate files; the rendering stage reads the title
//! and bullet block back. Files are overwritten on every run.

use std::path::Path;

use relnotes_core::config::ArtifactsConfig;
use relnotes_core::{ArtifactError, Result};
use tracing::{debug, info, instrument};

use crate::formatter::HtmlFormatter;
use crate::parser::extract_latest_from;
use crate::types::{ExtractionResult, RenderedPage};

/// Read an artifact as UTF-8 text
pub fn read_artifact(path: &Path) -> std::result::Result<String, ArtifactError> {
    debug!(path = %path.display(), "reading artifact");
    std::fs::read_to_string(path).map_err(|e| ArtifactError::from_read(path, e))
}

/// Write an artifact, replacing any previous contents
pub fn write_artifact(path: &Path, contents: &str) -> std::result::Result<(), ArtifactError> {
    debug!(path = %path.display(), bytes = contents.len(), "writing artifact");
    std::fs::write(path, contents).map_err(|e| ArtifactError::from_write(path, e))
}

/// Run the extraction stage in `dir`.
///
/// The changelog is fully parsed before any output file is touched, so a
/// parse failure leaves the directory unchanged.
#[instrument(skip(dir, config), fields(dir = %dir.display()))]
pub fn extract_to_dir(dir: &Path, config: &ArtifactsConfig) -> Result<ExtractionResult> {
    let paths = config.resolve(dir);

    let content = read_artifact(&paths.changelog)?;
    let result = extract_latest_from(&content, &config.changelog)?;

    write_artifact(&paths.new_version, result.version())?;
    write_artifact(&paths.old_version, result.old_version())?;
    write_artifact(&paths.title, result.title())?;
    write_artifact(&paths.latest_changes, &result.changes_block())?;

    info!(
        version = %result.version(),
        old_version = %result.old_version(),
        changes = result.entry.change_count(),
        "extraction artifacts written"
    );
    Ok(result)
}

/// Run the rendering stage in `dir`.
#[instrument(skip(dir, config), fields(dir = %dir.display()))]
pub fn render_in_dir(dir: &Path, config: &ArtifactsConfig) -> Result<RenderedPage> {
    let paths = config.resolve(dir);

    let title = read_artifact(&paths.title)?;
    let changes = read_artifact(&paths.latest_changes)?;

    let page = HtmlFormatter::new().render(&title, &changes);
    write_artifact(&paths.html, &page.document)?;

    info!(title = %page.title, path = %paths.html.display(), "release notes page written");
    Ok(page)
}
