//! HTML view of review results.

use std::fmt::Write;

use spdocs_renderer::escape_html;

use crate::{CheckResult, CheckState, ReviewError, ReviewReport, RepoTarget};

/// Render the results heading, a link that reopens this review and the
/// two-level family/check list.
///
/// # Example
///
/// ```
/// use spdocs_review::{render_report, RepoTarget, ReviewReport};
///
/// let report = ReviewReport::from_json(r#"{"results": [
///     {"name": "PY001", "family": "general", "description": "Has a pyproject.toml", "result": true}
/// ]}"#).unwrap();
/// let target = RepoTarget::new("scikit-hep/hist", "main").unwrap();
///
/// let html = render_report(&report, &target);
/// assert!(html.starts_with("<h2 class=\"rr-heading\">Results for scikit-hep/hist@main</h2>"));
/// assert!(html.contains("check_box"));
/// ```
#[must_use]
pub fn render_report(report: &ReviewReport, target: &RepoTarget) -> String {
    let mut html = String::with_capacity(256 + report.results.len() * 256);

    let _ = writeln!(
        html,
        "<h2 class=\"rr-heading\">Results for {}</h2>",
        escape_html(&target.to_string())
    );
    let _ = writeln!(
        html,
        "<p class=\"rr-permalink\"><a href=\"?{}\">Link to these results</a></p>",
        escape_html(&target.to_query())
    );
    html.push_str("<ul class=\"rr-results\">\n");

    for family in report.grouped() {
        let _ = writeln!(
            html,
            "<li class=\"rr-family\" id=\"family-{}\">",
            escape_html(family.key)
        );
        let _ = writeln!(
            html,
            "<span class=\"rr-family-name\">{}</span>",
            escape_html(family.name)
        );
        if let Some(description) = family.description {
            let _ = writeln!(
                html,
                "<p class=\"rr-family-description\">{}</p>",
                escape_html(description)
            );
        }
        html.push_str("<ul>\n");
        for result in family.results {
            render_result(&mut html, result);
        }
        html.push_str("</ul>\n</li>\n");
    }

    html.push_str("</ul>\n");
    html
}

/// Render a review failure in place of the results.
#[must_use]
pub fn render_error(error: &ReviewError) -> String {
    format!(
        "<p class=\"rr-error\" role=\"alert\">{}</p>\n",
        escape_html(&error.to_string())
    )
}

fn render_result(html: &mut String, result: &CheckResult) {
    let _ = write!(
        html,
        "<li class=\"rr-result {}\"><span class=\"rr-icon material-icons\">{}</span> ",
        result.state.css_class(),
        result.state.icon()
    );

    let name = escape_html(&result.name);
    if result.url.is_empty() {
        html.push_str(&name);
    } else {
        let _ = write!(html, "<a href=\"{}\">{name}</a>", escape_html(&result.url));
    }
    let _ = write!(html, ": {}", escape_html(&result.description));

    match result.state {
        CheckState::Skipped => {
            html.push_str(" <span class=\"rr-skipped-note\">[skipped]</span>");
            if !result.skip_reason.is_empty() {
                let _ = write!(
                    html,
                    " <span class=\"rr-skip-reason\">{}</span>",
                    escape_html(&result.skip_reason)
                );
            }
        }
        CheckState::Failed if !result.err_msg.is_empty() => {
            // err_msg is HTML produced by the review run
            let _ = write!(html, "\n<div class=\"rr-details\">{}</div>\n", result.err_msg);
        }
        CheckState::Failed | CheckState::Passed => {}
    }

    html.push_str("</li>\n");
}
