//! Client-side tab switching.
//!
//! The browser script and [`TabPage`] implement the same state machine:
//! activating `(label, group)` shows the bodies of `group` labelled `label`,
//! marks the matching buttons active and hides or deactivates the rest of
//! that group. Other groups never change. An activation whose label has no
//! body in the group changes nothing.
//!
//! On page load every `tabs` query value is applied in order to each group
//! that owns the label.

use url::form_urlencoded;

use super::markup::{body_open, button_open};
use super::TabGroup;
use crate::directive::Replacements;

/// Browser implementation of the switcher, inlined into built pages.
pub const SWITCHER_SCRIPT: &str = include_str!("../../assets/tabs.js");

/// Name of the query parameter selecting tabs on page load.
const QUERY_KEY: &str = "tabs";

/// What a switchable element is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabElementKind {
    /// A tab body (`role="tabpanel"`); shown means not hidden.
    Body,
    /// A bar button (`role="tab"`); shown means active.
    Button,
}

/// One switchable element of a rendered page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabElement {
    pub kind: TabElementKind,
    pub group: String,
    pub label: String,
    /// Current state: visible for bodies, active for buttons.
    pub shown: bool,
    /// State the element was rendered with.
    rendered: bool,
}

/// Switcher state of one rendered page.
///
/// # Example
///
/// ```
/// use spdocs_renderer::{TabEntry, TabGroup, TabPage};
///
/// let mut group = TabGroup::new("default", true);
/// group.register(TabEntry::parse("pip Pip").unwrap());
/// group.register(TabEntry::parse("uv uv").unwrap());
///
/// let mut page = TabPage::from_groups(&[group]);
/// assert_eq!(page.active_label("default"), Some("pip"));
///
/// page.activate_from_query("?tabs=uv");
/// assert!(page.is_visible("default", "uv"));
/// assert!(!page.is_visible("default", "pip"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabPage {
    elements: Vec<TabElement>,
}

impl TabPage {
    /// Build the initial state of a page from its rendered groups: the first
    /// tab of each block is shown.
    #[must_use]
    pub fn from_groups(groups: &[TabGroup]) -> Self {
        let mut elements = Vec::new();
        for group in groups {
            for (idx, entry) in group.entries.iter().enumerate() {
                let kinds: &[TabElementKind] = if group.has_bar {
                    &[TabElementKind::Body, TabElementKind::Button]
                } else {
                    &[TabElementKind::Body]
                };
                for &kind in kinds {
                    elements.push(TabElement {
                        kind,
                        group: group.name.clone(),
                        label: entry.label.clone(),
                        shown: idx == 0,
                        rendered: idx == 0,
                    });
                }
            }
        }
        Self { elements }
    }

    /// All switchable elements, group by group in the order the groups
    /// closed (a nested group precedes the group containing it), bodies
    /// before buttons per tab.
    #[must_use]
    pub fn elements(&self) -> &[TabElement] {
        &self.elements
    }

    /// Show `label` within `group`.
    ///
    /// Returns `false` and changes nothing when the group has no body with
    /// that label.
    pub fn activate_tab(&mut self, label: &str, group: &str) -> bool {
        let known = self
            .elements
            .iter()
            .any(|e| e.kind == TabElementKind::Body && e.group == group && e.label == label);
        if !known {
            tracing::debug!(group, label, "No tab to activate");
            return false;
        }

        for element in self.elements.iter_mut().filter(|e| e.group == group) {
            element.shown = element.label == label;
        }
        true
    }

    /// Apply every `tabs` value of a query string (with or without the
    /// leading `?`) to each group that owns the label.
    ///
    /// Returns the number of group activations performed.
    pub fn activate_from_query(&mut self, query: &str) -> usize {
        let query = query.strip_prefix('?').unwrap_or(query);
        let labels: Vec<String> = form_urlencoded::parse(query.as_bytes())
            .filter(|(key, _)| key == QUERY_KEY)
            .map(|(_, value)| value.into_owned())
            .collect();
        self.activate_labels(labels.iter().map(String::as_str))
    }

    /// Apply labels in order to each group that owns them.
    ///
    /// Returns the number of group activations performed.
    pub fn activate_labels<'a>(&mut self, labels: impl IntoIterator<Item = &'a str>) -> usize {
        let mut applied = 0;
        for label in labels {
            for group in self.groups_owning(label) {
                if self.activate_tab(label, &group) {
                    applied += 1;
                }
            }
        }
        applied
    }

    /// Whether a body with this label is shown in `group`.
    #[must_use]
    pub fn is_visible(&self, group: &str, label: &str) -> bool {
        self.elements.iter().any(|e| {
            e.kind == TabElementKind::Body && e.group == group && e.label == label && e.shown
        })
    }

    /// Label of the first shown body in `group`.
    #[must_use]
    pub fn active_label(&self, group: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|e| e.kind == TabElementKind::Body && e.group == group && e.shown)
            .map(|e| e.label.as_str())
    }

    /// Rewrite the opening tags in `html` (as rendered for these groups) to
    /// reflect the current state.
    ///
    /// Returns the number of distinct tags rewritten.
    pub fn apply_to_html(&self, html: &mut String) -> usize {
        let mut replacements = Replacements::new();
        for element in self.elements.iter().filter(|e| e.shown != e.rendered) {
            let (from, to) = match element.kind {
                TabElementKind::Body => (
                    body_open(&element.group, &element.label, element.rendered),
                    body_open(&element.group, &element.label, element.shown),
                ),
                TabElementKind::Button => (
                    button_open(&element.group, &element.label, element.rendered),
                    button_open(&element.group, &element.label, element.shown),
                ),
            };
            replacements.add(from, to);
        }
        if replacements.is_empty() {
            return 0;
        }
        let rewritten = replacements.len();
        replacements.apply(html);
        rewritten
    }

    fn groups_owning(&self, label: &str) -> Vec<String> {
        let mut groups: Vec<String> = Vec::new();
        for element in &self.elements {
            if element.kind == TabElementKind::Body
                && element.label == label
                && !groups.contains(&element.group)
            {
                groups.push(element.group.clone());
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::DirectiveProcessor;
    use crate::tabs::{RenderedGroups, TabDirective, TabEntry, TabsDirective};
    use pretty_assertions::assert_eq;

    fn group(name: &str, has_bar: bool, labels: &[&str]) -> TabGroup {
        let mut group = TabGroup::new(name, has_bar);
        for label in labels {
            group.register(TabEntry::parse(label).unwrap());
        }
        group
    }

    fn installer_and_os() -> TabPage {
        TabPage::from_groups(&[
            group("installer", true, &["pip", "conda", "uv"]),
            group("os", false, &["linux", "macos"]),
        ])
    }

    #[test]
    fn test_initial_state() {
        let page = installer_and_os();
        assert_eq!(page.elements().len(), 8);
        assert_eq!(page.active_label("installer"), Some("pip"));
        assert_eq!(page.active_label("os"), Some("linux"));
        assert!(!page.is_visible("installer", "conda"));
    }

    #[test]
    fn test_activate_shows_exactly_one_in_group() {
        let mut page = installer_and_os();
        assert!(page.activate_tab("conda", "installer"));

        let shown: Vec<(&str, TabElementKind)> = page
            .elements()
            .iter()
            .filter(|e| e.group == "installer" && e.shown)
            .map(|e| (e.label.as_str(), e.kind))
            .collect();
        assert_eq!(
            shown,
            vec![
                ("conda", TabElementKind::Body),
                ("conda", TabElementKind::Button)
            ]
        );
    }

    #[test]
    fn test_activate_leaves_other_groups_alone() {
        let mut page = installer_and_os();
        page.activate_tab("uv", "installer");
        assert_eq!(page.active_label("os"), Some("linux"));
    }

    #[test]
    fn test_unknown_label_is_noop() {
        let mut page = installer_and_os();
        let before = page.clone();
        assert!(!page.activate_tab("poetry", "installer"));
        assert_eq!(page, before);
    }

    #[test]
    fn test_label_from_other_group_is_noop() {
        let mut page = installer_and_os();
        assert!(!page.activate_tab("macos", "installer"));
        assert_eq!(page.active_label("installer"), Some("pip"));
    }

    #[test]
    fn test_query_applies_to_owning_groups() {
        let mut page = installer_and_os();
        let applied = page.activate_from_query("?tabs=uv&tabs=macos&tabs=nothing&other=pip");
        assert_eq!(applied, 2);
        assert_eq!(page.active_label("installer"), Some("uv"));
        assert_eq!(page.active_label("os"), Some("macos"));
    }

    #[test]
    fn test_query_values_apply_in_order() {
        let mut page = installer_and_os();
        page.activate_from_query("tabs=uv&tabs=conda");
        assert_eq!(page.active_label("installer"), Some("conda"));
    }

    #[test]
    fn test_query_label_shared_by_groups() {
        let mut page = TabPage::from_groups(&[
            group("install", true, &["pip", "uv"]),
            group("run", true, &["pip", "uv"]),
        ]);
        assert_eq!(page.activate_from_query("tabs=uv"), 2);
        assert_eq!(page.active_label("install"), Some("uv"));
        assert_eq!(page.active_label("run"), Some("uv"));
    }

    #[test]
    fn test_query_is_percent_decoded() {
        let mut page = TabPage::from_groups(&[group("default", true, &["a", "c++"])]);
        page.activate_from_query("tabs=c%2B%2B");
        assert_eq!(page.active_label("default"), Some("c++"));
    }

    #[test]
    fn test_apply_to_html_matches_fresh_render() {
        let mut processor = DirectiveProcessor::new()
            .with_container(TabsDirective::new())
            .with_container(TabDirective);
        let mut html = processor
            .process(":::tabs\n:::tab[pip Pip]\nA\n:::\n:::tab[uv uv]\nB\n:::\n:::")
            .unwrap();
        let groups = processor.scope().get::<RenderedGroups>().unwrap().0.clone();

        let mut page = TabPage::from_groups(&groups);
        page.activate_tab("uv", "default");
        assert_eq!(page.apply_to_html(&mut html), 4);

        assert!(html.contains(r#"data-tab-label="pip" hidden>"#));
        assert!(!html.contains(r#"data-tab-label="uv" hidden>"#));
        assert!(html.contains("default-uv-btn sp-active"));
        assert!(!html.contains("default-pip-btn sp-active"));
        assert_eq!(html.matches("sp-active").count(), 1);
    }

    #[test]
    fn test_nested_group_elements_come_first() {
        let mut processor = DirectiveProcessor::new()
            .with_container(TabsDirective::new())
            .with_container(TabDirective);
        processor
            .process(":::tabs[outer]\n:::tab[a]\n:::tabs[inner]\n:::tab[x]\nX\n:::\n:::\n:::\n:::")
            .unwrap();
        let groups = processor.scope().get::<RenderedGroups>().unwrap().0.clone();

        let page = TabPage::from_groups(&groups);
        let order: Vec<(&str, &str, TabElementKind)> = page
            .elements()
            .iter()
            .map(|e| (e.group.as_str(), e.label.as_str(), e.kind))
            .collect();
        assert_eq!(
            order,
            vec![
                ("inner", "x", TabElementKind::Body),
                ("inner", "x", TabElementKind::Button),
                ("outer", "a", TabElementKind::Body),
                ("outer", "a", TabElementKind::Button),
            ]
        );
    }

    #[test]
    fn test_apply_to_html_without_changes() {
        let page = installer_and_os();
        let mut html = "<p>untouched</p>".to_owned();
        assert_eq!(page.apply_to_html(&mut html), 0);
        assert_eq!(html, "<p>untouched</p>");
    }

    #[test]
    fn test_script_exposes_activate_tab() {
        assert!(SWITCHER_SCRIPT.contains("function activateTab(label, group"));
        assert!(SWITCHER_SCRIPT.contains("data-tab-group"));
    }
}
