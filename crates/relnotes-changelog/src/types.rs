//! Release notes types

use serde::{Deserialize, Serialize};

/// A parsed `# <version>[ - <title>]` heading line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Version token before the first ` - `
    pub version: String,
    /// Title after the first ` - `, if present
    pub title: Option<String>,
}

impl Heading {
    /// The explicit title, or `Version <version>` when the heading has none
    pub fn title_or_default(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("Version {}", self.version),
        }
    }
}

/// One version block of the changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Version string
    pub version: String,
    /// Entry title
    pub title: String,
    /// Bullet lines, markers and inline markup preserved
    pub changes: Vec<String>,
}

impl VersionEntry {
    /// Create an entry with no changes
    pub fn new(version: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            title: title.into(),
            changes: Vec::new(),
        }
    }

    /// Add a bullet line
    pub fn add_change(&mut self, line: impl Into<String>) {
        self.changes.push(line.into());
    }

    /// Bullet lines joined with newlines
    pub fn changes_block(&self) -> String {
        self.changes.join("\n")
    }

    /// Number of bullet lines
    pub fn change_count(&self) -> usize {
        self.changes.len()
    }
}

/// Newest entry of a changelog together with the version that preceded it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// The newest entry
    #[serde(flatten)]
    pub entry: VersionEntry,
    /// Version of the second heading, empty when there is none
    pub old_version: String,
}

impl ExtractionResult {
    /// Newest version string
    pub fn version(&self) -> &str {
        &self.entry.version
    }

    /// Newest entry title
    pub fn title(&self) -> &str {
        &self.entry.title
    }

    /// Previous version string (may be empty)
    pub fn old_version(&self) -> &str {
        &self.old_version
    }

    /// Bullet block as written to the `latest_changes` file
    pub fn changes_block(&self) -> String {
        self.entry.changes_block()
    }

    /// True when the changelog has a single version block
    pub fn is_first_release(&self) -> bool {
        self.old_version.is_empty()
    }
}

/// A rendered release notes page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Page title
    pub title: String,
    /// HTML converted from the markdown body
    pub body_html: String,
    /// Complete HTML document
    pub document: String,
}
