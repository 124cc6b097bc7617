//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "relnotes.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "relnotes.yaml";

/// Changelog read by the extraction stage
pub const DEFAULT_CHANGELOG_FILE: &str = "Release_Notes.md";

/// Flat file holding the newest version string
pub const DEFAULT_NEW_VERSION_FILE: &str = "new_version";

/// Flat file holding the previous version string
pub const DEFAULT_OLD_VERSION_FILE: &str = "old_version";

/// Flat file holding the newest entry's title
pub const DEFAULT_TITLE_FILE: &str = "title";

/// Flat file holding the newest entry's bullet block
pub const DEFAULT_CHANGES_FILE: &str = "latest_changes";

/// Rendered HTML document
pub const DEFAULT_HTML_FILE: &str = "latest_changes.html";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".relnotes.toml",
        ".relnotes.yaml",
    ]
}
