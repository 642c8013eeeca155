//! HTML for tab bars and tab bodies.
//!
//! The switcher script and [`TabPage::apply_to_html`](super::TabPage::apply_to_html)
//! rely on these exact opening tags.

use std::fmt::Write;

use super::{ACTIVE_CLASS, BAR_CLASS, BUTTON_CLASS, TAB_CLASS, TabGroup};
use crate::util::escape_html;

/// Opening tag of a tab body.
pub(crate) fn body_open(group: &str, label: &str, visible: bool) -> String {
    let group = escape_html(group);
    let label = escape_html(label);
    let hidden = if visible { "" } else { " hidden" };
    format!(
        r#"<div class="{TAB_CLASS} {group}-{label}-tab" role="tabpanel" data-tab-group="{group}" data-tab-label="{label}"{hidden}>"#
    )
}

/// Opening tag of a bar button.
pub(crate) fn button_open(group: &str, label: &str, active: bool) -> String {
    let group = escape_html(group);
    let label = escape_html(label);
    let active_class = if active {
        format!(" {ACTIVE_CLASS}")
    } else {
        String::new()
    };
    format!(
        r#"<button type="button" class="{BUTTON_CLASS} {group}-{label}-btn{active_class}" role="tab" aria-selected="{active}" data-tab-group="{group}" data-tab-label="{label}">"#
    )
}

/// Render a complete tab body around already-processed markdown.
///
/// Blank lines around the body keep pulldown-cmark parsing it as markdown,
/// and the trailing newline ends the HTML block before whatever follows.
pub(crate) fn render_body(group: &str, label: &str, visible: bool, body: &str) -> String {
    format!(
        "{}\n\n{}\n\n</div>\n",
        body_open(group, label, visible),
        body.trim_end_matches('\n')
    )
}

/// Render the selector bar for a finished group; the first button is active.
pub(crate) fn render_bar(group: &TabGroup) -> String {
    let mut output = String::with_capacity(128 + group.entries.len() * 192);

    let _ = writeln!(
        output,
        r#"<div class="{BAR_CLASS}" role="tablist" data-tab-group="{}">"#,
        escape_html(&group.name)
    );
    for (idx, entry) in group.entries.iter().enumerate() {
        let _ = writeln!(
            output,
            "{}{}</button>",
            button_open(&group.name, &entry.label, idx == 0),
            escape_html(&entry.title)
        );
    }
    output.push_str("</div>");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::TabEntry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_body_open_visible_and_hidden() {
        assert_eq!(
            body_open("default", "pip", true),
            r#"<div class="sp-tab default-pip-tab" role="tabpanel" data-tab-group="default" data-tab-label="pip">"#
        );
        assert!(body_open("default", "pip", false).ends_with(r#"data-tab-label="pip" hidden>"#));
    }

    #[test]
    fn test_button_open_active() {
        assert_eq!(
            button_open("backend", "hatch", true),
            r#"<button type="button" class="sp-bar-item backend-hatch-btn sp-active" role="tab" aria-selected="true" data-tab-group="backend" data-tab-label="hatch">"#
        );
        assert!(button_open("backend", "flit", false).contains(r#"aria-selected="false""#));
    }

    #[test]
    fn test_render_bar() {
        let mut group = TabGroup::new("default", true);
        group.register(TabEntry::parse("pip Pip").unwrap());
        group.register(TabEntry::parse("conda <Conda>").unwrap());

        let bar = render_bar(&group);
        let lines: Vec<&str> = bar.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            r#"<div class="sp-bar" role="tablist" data-tab-group="default">"#
        );
        assert!(lines[1].contains("sp-active"));
        assert!(lines[1].ends_with(">Pip</button>"));
        assert!(!lines[2].contains("sp-active"));
        assert!(lines[2].ends_with(">&lt;Conda&gt;</button>"));
        assert_eq!(lines[3], "</div>");
    }

    #[test]
    fn test_render_body_spacing() {
        let html = render_body("default", "pip", false, "Some *text*\n");
        assert!(html.ends_with("hidden>\n\nSome *text*\n\n</div>\n"));
    }
}
