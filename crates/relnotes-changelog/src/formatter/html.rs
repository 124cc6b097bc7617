//! Markdown to HTML release notes formatter

use pulldown_cmark::{html, Options, Parser};
use tracing::{debug, instrument};

use super::template::wrap_document;
use crate::types::RenderedPage;

/// Build the markdown page body: a level-1 title, a blank line, then the changes.
pub fn compose_markdown(title: &str, changes: &str) -> String {
    format!("# {}\n\n{}", title.trim(), normalize_bullets(changes.trim()))
}

/// Rewrite `- ` bullets as `* ` so adjacent bullets form one list.
///
/// CommonMark starts a new list whenever the marker character changes. A
/// leading `#` in bullet text is escaped so it stays text instead of becoming
/// a heading nested in the list item. A bullet reading `* * *` is still a
/// thematic break and renders as `<hr />`.
pub fn normalize_bullets(changes: &str) -> String {
    changes
        .lines()
        .map(|line| {
            match line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
                Some(rest) if rest.starts_with('#') => format!("* \\{}", rest),
                Some(rest) => format!("* {}", rest),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a title and bullet block to a standalone HTML page
///
/// Conversion is plain CommonMark with no extensions enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Create a new formatter
    pub fn new() -> Self {
        Self
    }

    /// Convert markdown to an HTML fragment
    pub fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Options::empty());
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }

    /// Render the release notes page
    #[instrument(skip(self, title, changes), fields(title = %title.trim()))]
    pub fn render(&self, title: &str, changes: &str) -> RenderedPage {
        let title = title.trim().to_string();
        let markdown = compose_markdown(&title, changes);
        let body_html = self.to_html(&markdown).trim_end().to_string();
        let document = wrap_document(&title, &body_html);

        debug!(
            body_len = body_html.len(),
            document_len = document.len(),
            "release notes page rendered"
        );

        RenderedPage {
            title,
            body_html,
            document,
        }
    }
}
