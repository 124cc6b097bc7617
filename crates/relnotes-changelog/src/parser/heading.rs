//! Version heading lines

use crate::types::Heading;

/// Prefix marking a heading line
pub const HEADING_PREFIX: &str = "# ";

/// Separator between version and title in a heading
pub const TITLE_SEPARATOR: &str = " - ";

/// Parse a `# <version>[ - <title>]` line.
///
/// Returns `None` when the trimmed line does not start with `# `. Only the
/// first ` - ` splits, so titles may contain the separator themselves.
pub fn parse_heading(line: &str) -> Option<Heading> {
    let content = line.trim().strip_prefix(HEADING_PREFIX)?;

    let heading = match content.split_once(TITLE_SEPARATOR) {
        Some((version, title)) => Heading {
            version: version.trim().to_string(),
            title: Some(title.trim().to_string()),
        },
        None => Heading {
            version: content.trim().to_string(),
            title: None,
        },
    };

    Some(heading)
}
