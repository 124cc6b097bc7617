//! Newest-entry extraction

use relnotes_core::config::DEFAULT_CHANGELOG_FILE;
use relnotes_core::ExtractError;
use tracing::{debug, info, instrument, warn};

use super::heading::parse_heading;
use crate::types::{ExtractionResult, VersionEntry};

/// Bullet markers recognised as change lines
const BULLET_MARKERS: [&str; 2] = ["* ", "- "];

/// Check whether a trimmed line is a change bullet
pub fn is_bullet(line: &str) -> bool {
    BULLET_MARKERS.iter().any(|marker| line.starts_with(marker))
}

/// Extract the newest entry from changelog text.
///
/// Errors name the default changelog file; use [`extract_latest_from`] to
/// report a different source.
pub fn extract_latest(content: &str) -> Result<ExtractionResult, ExtractError> {
    extract_latest_from(content, DEFAULT_CHANGELOG_FILE)
}

/// Extract the newest entry from changelog text read from `source`.
///
/// The first line must be a heading. Bullet lines after it are collected
/// until the next heading, whose version becomes the old version. Blank and
/// non-bullet lines in between are skipped.
#[instrument(skip(content), fields(content_len = content.len()))]
pub fn extract_latest_from(content: &str, source: &str) -> Result<ExtractionResult, ExtractError> {
    let mut lines = content.lines();

    let first = lines
        .next()
        .ok_or_else(|| ExtractError::EmptyInput(source.to_string()))?;
    let heading =
        parse_heading(first).ok_or_else(|| ExtractError::MalformedHeader(first.trim().to_string()))?;

    let mut entry = VersionEntry::new(heading.version.clone(), heading.title_or_default());
    let mut old_version = String::new();

    for line in lines {
        let line = line.trim();
        if is_bullet(line) {
            entry.add_change(line);
        } else if let Some(next) = parse_heading(line) {
            old_version = next.version;
            break;
        }
    }

    if semver::Version::parse(&entry.version).is_err() {
        warn!(version = %entry.version, "newest version is not a semantic version");
    }

    debug!(
        changes = entry.change_count(),
        old_version = %old_version,
        "changelog scanned"
    );
    info!(version = %entry.version, title = %entry.title, "extracted latest entry");

    Ok(ExtractionResult { entry, old_version })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_RELEASES: &str = "# 1.1.0 - New Feature\n* First change\n* Second change\n\n# 1.0.0 - Initial Release\n* Initial features\n";

    #[test]
    fn test_extract_two_releases() {
        let result = extract_latest(TWO_RELEASES).unwrap();

        assert_eq!(result.version(), "1.1.0");
        assert_eq!(result.old_version(), "1.0.0");
        assert_eq!(result.title(), "New Feature");
        assert_eq!(result.changes_block(), "* First change\n* Second change");
    }

    #[test]
    fn test_single_release_has_empty_old_version() {
        let result = extract_latest("# 1.0.0 - Initial Release\n* Initial features\n").unwrap();

        assert_eq!(result.old_version(), "");
        assert!(result.is_first_release());
        assert_eq!(result.changes_block(), "* Initial features");
    }

    #[test]
    fn test_old_version_is_second_heading() {
        let content = "# 3.0.0\n* c\n# 2.0.0 - Two\n* b\n# 1.0.0 - One\n* a\n";
        let result = extract_latest(content).unwrap();

        assert_eq!(result.old_version(), "2.0.0");
        assert_eq!(result.entry.changes, vec!["* c"]);
    }

    #[test]
    fn test_old_version_without_title() {
        let result = extract_latest("# 1.1.0 - Fixes\n- fix\n# 1.0.0\n").unwrap();
        assert_eq!(result.old_version(), "1.0.0");
    }

    #[test]
    fn test_default_title() {
        let result = extract_latest("# 2.0.0\n* Rewrite\n").unwrap();

        assert_eq!(result.version(), "2.0.0");
        assert_eq!(result.title(), "Version 2.0.0");
    }

    #[test]
    fn test_empty_input() {
        let err = extract_latest("").unwrap_err();
        assert!(matches!(err, ExtractError::EmptyInput(ref name) if name == "Release_Notes.md"));
    }

    #[test]
    fn test_empty_input_names_source() {
        let err = extract_latest_from("", "CHANGES.md").unwrap_err();
        assert_eq!(err.to_string(), "CHANGES.md is empty");
    }

    #[test]
    fn test_malformed_header() {
        let err = extract_latest("1.0.0 - Initial Release\n* a\n").unwrap_err();
        assert!(matches!(err, ExtractError::MalformedHeader(_)));
    }

    #[test]
    fn test_blank_first_line_is_malformed() {
        let err = extract_latest("\n# 1.0.0\n").unwrap_err();
        assert!(matches!(err, ExtractError::MalformedHeader(_)));
    }

    #[test]
    fn test_non_bullet_lines_ignored() {
        let content = "# 1.2.0 - Polish\nSome prose about the release.\n\n* Kept\n  indented text\n-not a bullet\n*also not\n  - Indented dash\n";
        let result = extract_latest(content).unwrap();

        assert_eq!(result.entry.changes, vec!["* Kept", "- Indented dash"]);
    }

    #[test]
    fn test_mixed_markers_keep_order() {
        let result = extract_latest("# 1.0.0\n- one\n* two\n- three\n").unwrap();
        assert_eq!(result.changes_block(), "- one\n* two\n- three");
    }

    #[test]
    fn test_inline_markup_preserved() {
        let result =
            extract_latest("# 1.0.0\n* **Bold** fix for `code` and [link](https://example.com)\n")
                .unwrap();
        assert_eq!(
            result.changes_block(),
            "* **Bold** fix for `code` and [link](https://example.com)"
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "# 1.1.0 - New Feature\r\n* First change\r\n\r\n# 1.0.0 - Initial Release\r\n";
        let result = extract_latest(content).unwrap();

        assert_eq!(result.title(), "New Feature");
        assert_eq!(result.changes_block(), "* First change");
        assert_eq!(result.old_version(), "1.0.0");
    }

    #[test]
    fn test_heading_only() {
        let result = extract_latest("# 0.1.0 - Preview").unwrap();
        assert_eq!(result.changes_block(), "");
        assert_eq!(result.entry.change_count(), 0);
    }

    #[test]
    fn test_non_semver_version_is_accepted() {
        let result = extract_latest("# 2024.06 - June\n* a\n").unwrap();
        assert_eq!(result.version(), "2024.06");
    }
}
