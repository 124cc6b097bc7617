//! Fixed HTML page skeleton

/// Wrap a rendered body in the standalone release notes page.
///
/// The title is inserted verbatim into `<title>`. Styles are fixed.
pub fn wrap_document(title: &str, body_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            padding: 20px;
            max-width: 600px;
            margin: 0 auto;
            color: #333;
        }}
        h1 {{
            font-size: 1.5em;
            border-bottom: 1px solid #eee;
            padding-bottom: 10px;
        }}
        ul {{
            padding-left: 20px;
        }}
        li {{
            margin: 8px 0;
        }}
    </style>
</head>
<body>
{body_html}
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_contents() {
        let page = wrap_document("New Feature", "<h1>New Feature</h1>");

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<meta charset=\"utf-8\">"));
        assert!(page.contains("<title>New Feature</title>"));
        assert!(page.contains("max-width: 600px;"));
        assert!(page.contains("border-bottom: 1px solid #eee;"));
        assert!(page.contains("margin: 8px 0;"));
    }

    #[test]
    fn test_body_inserted_once() {
        let page = wrap_document("T", "<p>body</p>");
        assert_eq!(page.matches("<p>body</p>").count(), 1);
        assert!(page.contains("<body>\n<p>body</p>\n</body>"));
    }

    #[test]
    fn test_title_is_not_escaped() {
        let page = wrap_document("Fish & Chips", "");
        assert!(page.contains("<title>Fish & Chips</title>"));
    }
}
