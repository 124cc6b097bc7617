//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::defaults::{
    DEFAULT_CHANGELOG_FILE, DEFAULT_CHANGES_FILE, DEFAULT_HTML_FILE, DEFAULT_NEW_VERSION_FILE,
    DEFAULT_OLD_VERSION_FILE, DEFAULT_TITLE_FILE,
};

/// Main configuration for relnotes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File names used by both stages
    pub artifacts: ArtifactsConfig,
}

/// File names of the changelog, the intermediate flat files and the HTML output.
///
/// Relative names resolve against the working directory of the stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactsConfig {
    /// Changelog to extract from
    pub changelog: String,
    /// Newest version string
    pub new_version: String,
    /// Previous version string
    pub old_version: String,
    /// Newest entry title
    pub title: String,
    /// Newest entry bullet block
    pub latest_changes: String,
    /// Rendered HTML document
    pub html: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            changelog: DEFAULT_CHANGELOG_FILE.to_string(),
            new_version: DEFAULT_NEW_VERSION_FILE.to_string(),
            old_version: DEFAULT_OLD_VERSION_FILE.to_string(),
            title: DEFAULT_TITLE_FILE.to_string(),
            latest_changes: DEFAULT_CHANGES_FILE.to_string(),
            html: DEFAULT_HTML_FILE.to_string(),
        }
    }
}

impl ArtifactsConfig {
    /// All configured names keyed by their field path, in declaration order
    pub fn named_files(&self) -> [(&'static str, &str); 6] {
        [
            ("artifacts.changelog", self.changelog.as_str()),
            ("artifacts.new_version", self.new_version.as_str()),
            ("artifacts.old_version", self.old_version.as_str()),
            ("artifacts.title", self.title.as_str()),
            ("artifacts.latest_changes", self.latest_changes.as_str()),
            ("artifacts.html", self.html.as_str()),
        ]
    }

    /// Resolve every file against a working directory
    pub fn resolve(&self, dir: &Path) -> ArtifactPaths {
        ArtifactPaths {
            changelog: dir.join(&self.changelog),
            new_version: dir.join(&self.new_version),
            old_version: dir.join(&self.old_version),
            title: dir.join(&self.title),
            latest_changes: dir.join(&self.latest_changes),
            html: dir.join(&self.html),
        }
    }
}

/// Absolute locations of every artifact for one working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub changelog: PathBuf,
    pub new_version: PathBuf,
    pub old_version: PathBuf,
    pub title: PathBuf,
    pub latest_changes: PathBuf,
    pub html: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_names() {
        let artifacts = ArtifactsConfig::default();
        assert_eq!(artifacts.changelog, "Release_Notes.md");
        assert_eq!(artifacts.new_version, "new_version");
        assert_eq!(artifacts.old_version, "old_version");
        assert_eq!(artifacts.title, "title");
        assert_eq!(artifacts.latest_changes, "latest_changes");
        assert_eq!(artifacts.html, "latest_changes.html");
    }

    #[test]
    fn test_resolve() {
        let paths = ArtifactsConfig::default().resolve(Path::new("/work"));
        assert_eq!(paths.changelog, PathBuf::from("/work/Release_Notes.md"));
        assert_eq!(paths.html, PathBuf::from("/work/latest_changes.html"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[artifacts]\nchangelog = \"CHANGES.md\"\n").unwrap();
        assert_eq!(config.artifacts.changelog, "CHANGES.md");
        assert_eq!(config.artifacts.title, "title");
    }
}
