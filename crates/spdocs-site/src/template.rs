//! HTML page template for built pages.

use std::fmt::Write;
use std::path::Path;

use spdocs_renderer::{SWITCHER_SCRIPT, escape_html};

/// All data needed to render a standalone page.
pub struct PageData<'a> {
    pub title: &'a str,
    pub site_title: &'a str,
    pub html_content: &'a str,
}

/// Minimal styling for the content blocks.
const BLOCK_STYLES: &str = "\
.sp-bar { display: flex; gap: 0.25rem; border-bottom: 1px solid #ccc; margin-bottom: 0.5rem; }
.sp-bar-item { border: none; background: none; padding: 0.4rem 0.8rem; cursor: pointer; }
.sp-bar-item.sp-active { border-bottom: 2px solid #1565c0; font-weight: 600; }
.sp-details { margin: 1rem 0; }
.rr-btn { font-family: monospace; padding: 0 0.3rem; border-radius: 0.25rem; background: #eee; }
";

/// Render a complete HTML page with the tab switcher inlined.
pub fn render_page(page: &PageData<'_>) -> String {
    let mut html = String::with_capacity(page.html_content.len() + SWITCHER_SCRIPT.len() + 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    if page.title == page.site_title {
        let _ = writeln!(html, "<title>{}</title>", escape_html(page.title));
    } else {
        let _ = writeln!(
            html,
            "<title>{} - {}</title>",
            escape_html(page.title),
            escape_html(page.site_title)
        );
    }
    let _ = writeln!(html, "<style>\n{BLOCK_STYLES}</style>");
    html.push_str("</head>\n<body>\n<main>\n");

    html.push_str(page.html_content);
    if !page.html_content.ends_with('\n') {
        html.push('\n');
    }

    html.push_str("</main>\n<script>\n");
    html.push_str(SWITCHER_SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");

    html
}

/// Title for a page without an H1: its file stem in title case.
pub fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| titlecase_from_slug(&s.to_string_lossy()))
        .unwrap_or_default()
}

/// Convert a slug (kebab-case or `snake_case`) to title case.
fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_page() {
        let html = render_page(&PageData {
            title: "Packaging",
            site_title: "Developer Guide",
            html_content: "<h1>Packaging</h1>",
        });

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Packaging - Developer Guide</title>"));
        assert!(html.contains("<main>\n<h1>Packaging</h1>\n</main>"));
        assert!(html.contains("function activateTab("));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render_page(&PageData {
            title: "A & B",
            site_title: "A & B",
            html_content: "",
        });
        assert!(html.contains("<title>A &amp; B</title>"));
    }

    #[test]
    fn test_title_from_path() {
        assert_eq!(title_from_path(Path::new("docs/setup-guide.md")), "Setup Guide");
        assert_eq!(title_from_path(Path::new("gha_basic.md")), "Gha Basic");
    }
}
