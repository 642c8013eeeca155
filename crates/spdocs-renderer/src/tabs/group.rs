//! Tab registrations collected while a tab block renders.

use crate::directive::UsageError;
use crate::util::strip_quotes;

/// One registered tab: the label identifies it, the title is shown on its button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabEntry {
    /// Short token used in class names and the `tabs` query parameter.
    pub label: String,
    /// Button text.
    pub title: String,
}

impl TabEntry {
    /// Parse `label title...`, splitting on the first run of whitespace.
    ///
    /// The title may be quoted; without a title the label is used.
    ///
    /// # Example
    ///
    /// ```
    /// use spdocs_renderer::TabEntry;
    ///
    /// let entry = TabEntry::parse("conda  \"Conda (recommended)\"").unwrap();
    /// assert_eq!(entry.label, "conda");
    /// assert_eq!(entry.title, "Conda (recommended)");
    /// ```
    pub fn parse(spec: &str) -> Result<Self, UsageError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(UsageError::new("requires a label"));
        }

        let (label, title) = match spec.split_once(char::is_whitespace) {
            Some((label, rest)) => (label, strip_quotes(rest.trim())),
            None => (spec, spec),
        };

        Ok(Self {
            label: label.to_owned(),
            title: title.to_owned(),
        })
    }
}

/// An ordered set of tabs sharing one switcher namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabGroup {
    /// Group name (`default` unless the block names one).
    pub name: String,
    /// Entries in document order.
    pub entries: Vec<TabEntry>,
    /// Whether the block emitted a selector bar (`tabs`) or not (`tabbodies`).
    pub has_bar: bool,
}

impl TabGroup {
    /// Create an empty group.
    #[must_use]
    pub fn new(name: impl Into<String>, has_bar: bool) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            has_bar,
        }
    }

    /// Append an entry. Returns `true` if it is the first one in the group.
    ///
    /// Duplicate labels are accepted; the switcher treats them as copies.
    pub fn register(&mut self, entry: TabEntry) -> bool {
        self.entries.push(entry);
        self.entries.len() == 1
    }
}

/// Groups of the `tabs`/`tabbodies` blocks currently rendering, innermost last.
#[derive(Debug, Default)]
pub(crate) struct OpenGroups(pub(crate) Vec<TabGroup>);

/// A `tab` block that has started but not yet closed.
#[derive(Debug)]
pub(crate) struct OpenTab {
    pub(crate) group: String,
    pub(crate) label: String,
    pub(crate) visible: bool,
}

/// Open `tab` blocks, innermost last.
#[derive(Debug, Default)]
pub(crate) struct OpenTabs(pub(crate) Vec<OpenTab>);

/// Finished tab groups of one render, in the order their blocks closed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedGroups(pub Vec<TabGroup>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_and_title() {
        let entry = TabEntry::parse("pip Plain pip").unwrap();
        assert_eq!(entry.label, "pip");
        assert_eq!(entry.title, "Plain pip");
    }

    #[test]
    fn test_parse_label_only() {
        let entry = TabEntry::parse("  uv ").unwrap();
        assert_eq!(entry.label, "uv");
        assert_eq!(entry.title, "uv");
    }

    #[test]
    fn test_parse_splits_on_tabs_too() {
        let entry = TabEntry::parse("hatch\tHatchling").unwrap();
        assert_eq!(entry.label, "hatch");
        assert_eq!(entry.title, "Hatchling");
    }

    #[test]
    fn test_parse_empty_is_error() {
        let err = TabEntry::parse("   ").unwrap_err();
        assert_eq!(err.to_string(), "requires a label");
    }

    #[test]
    fn test_register_reports_first() {
        let mut group = TabGroup::new("default", true);
        assert!(group.register(TabEntry::parse("a A").unwrap()));
        assert!(!group.register(TabEntry::parse("b B").unwrap()));
        assert!(!group.register(TabEntry::parse("a Again").unwrap()));
        assert_eq!(group.entries.len(), 3);
    }
}
