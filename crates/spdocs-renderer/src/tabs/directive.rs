//! Container directives for tab blocks.
//!
//! `tabs` and `tabbodies` open a [`TabGroup`] in the render scope; each nested
//! `tab` registers with the innermost open group as it starts. When the group
//! block closes all of its tabs have rendered, so the bar can be built from
//! the finished list and placed in front of the bodies.

use crate::directive::{ContainerDirective, DirectiveArgs, DirectiveContext, UsageError};
use crate::util::strip_quotes;

use super::group::{OpenGroups, OpenTab, OpenTabs, RenderedGroups, TabEntry, TabGroup};
use super::markup::{render_bar, render_body};
use super::DEFAULT_GROUP;

/// Container directive for `tabs` (with a selector bar) and `tabbodies`
/// (bodies only).
///
/// # Example
///
/// ```
/// use spdocs_renderer::directive::DirectiveProcessor;
/// use spdocs_renderer::{TabDirective, TabsDirective};
///
/// let mut processor = DirectiveProcessor::new()
///     .with_container(TabsDirective::new())
///     .with_container(TabDirective);
///
/// let output = processor.process(":::tabs\n:::tab[pip Pip]\nA\n:::\n:::tab[uv uv]\nB\n:::\n:::").unwrap();
/// assert_eq!(output.matches("<button").count(), 2);
/// assert!(output.find("<button").unwrap() < output.find("default-pip-tab").unwrap());
/// ```
pub struct TabsDirective {
    name: &'static str,
    has_bar: bool,
    default_group: String,
}

impl TabsDirective {
    /// `tabs`: bodies preceded by a selector bar.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "tabs",
            has_bar: true,
            default_group: DEFAULT_GROUP.to_owned(),
        }
    }

    /// `tabbodies`: bodies only, for pages that place the bar elsewhere or
    /// switch only through the query string.
    #[must_use]
    pub fn bodies() -> Self {
        Self {
            name: "tabbodies",
            has_bar: false,
            ..Self::new()
        }
    }

    /// Group used when the block names none.
    #[must_use]
    pub fn with_default_group(mut self, group: impl Into<String>) -> Self {
        self.default_group = group.into();
        self
    }

    fn group_name(&self, args: &DirectiveArgs) -> Result<String, UsageError> {
        let name = args
            .content_or_none()
            .map_or(self.default_group.as_str(), strip_quotes);
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(UsageError::new(format!(
                "group name must be a single word, got {name:?}"
            )));
        }
        Ok(name.to_owned())
    }
}

impl Default for TabsDirective {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerDirective for TabsDirective {
    fn name(&self) -> &str {
        self.name
    }

    fn start(&mut self, args: &DirectiveArgs, ctx: &mut DirectiveContext) -> Result<(), UsageError> {
        let group = TabGroup::new(self.group_name(args)?, self.has_bar);
        ctx.scope.get_or_default::<OpenGroups>().0.push(group);
        Ok(())
    }

    fn end(
        &mut self,
        _args: DirectiveArgs,
        body: String,
        ctx: &mut DirectiveContext,
    ) -> Result<String, UsageError> {
        let group = ctx
            .scope
            .get_mut::<OpenGroups>()
            .and_then(|open| open.0.pop())
            .ok_or_else(|| UsageError::new("closed without an open tab group"))?;

        if group.entries.is_empty() {
            tracing::warn!(location = %ctx.location(), group = %group.name, "Tab block contains no tabs");
        }

        let body = body.trim_end_matches('\n');
        let html = if self.has_bar && !group.entries.is_empty() {
            format!("{}\n\n{body}\n", render_bar(&group))
        } else {
            format!("{body}\n")
        };

        ctx.scope.get_or_default::<RenderedGroups>().0.push(group);
        Ok(html)
    }
}

/// Container directive for a single `tab` inside `tabs` or `tabbodies`.
///
/// Syntax: `:::tab[label Title text]`.
pub struct TabDirective;

impl ContainerDirective for TabDirective {
    fn name(&self) -> &'static str {
        "tab"
    }

    fn start(&mut self, args: &DirectiveArgs, ctx: &mut DirectiveContext) -> Result<(), UsageError> {
        let Some(group) = ctx
            .scope
            .get_mut::<OpenGroups>()
            .and_then(|open| open.0.last_mut())
        else {
            return Err(UsageError::new("must be nested in tabs or tabbodies"));
        };

        let entry = TabEntry::parse(&args.content)?;
        let open = OpenTab {
            group: group.name.clone(),
            label: entry.label.clone(),
            visible: group.register(entry),
        };
        ctx.scope.get_or_default::<OpenTabs>().0.push(open);
        Ok(())
    }

    fn end(
        &mut self,
        _args: DirectiveArgs,
        body: String,
        ctx: &mut DirectiveContext,
    ) -> Result<String, UsageError> {
        let tab = ctx
            .scope
            .get_mut::<OpenTabs>()
            .and_then(|open| open.0.pop())
            .ok_or_else(|| UsageError::new("closed without being opened"))?;

        Ok(render_body(&tab.group, &tab.label, tab.visible, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::DirectiveProcessor;
    use pretty_assertions::assert_eq;

    fn processor() -> DirectiveProcessor {
        DirectiveProcessor::new()
            .with_container(TabsDirective::new())
            .with_container(TabsDirective::bodies())
            .with_container(TabDirective)
    }

    fn groups(processor: &DirectiveProcessor) -> Vec<TabGroup> {
        processor
            .scope()
            .get::<RenderedGroups>()
            .map(|g| g.0.clone())
            .unwrap_or_default()
    }

    const THREE_TABS: &str = "\
:::tabs[installer]
:::tab[pip Pip]
pip install package
:::
:::tab[conda Conda]
conda install package
:::
:::tab[uv uv]
uv add package
:::
:::
";

    #[test]
    fn test_n_tabs_give_n_buttons_and_n_bodies() {
        let mut processor = processor();
        let output = processor.process(THREE_TABS).unwrap();

        assert_eq!(output.matches(r#"<button type="button""#).count(), 3);
        assert_eq!(output.matches(r#"role="tabpanel""#).count(), 3);
        assert_eq!(output.matches(r#"data-tab-group="installer""#).count(), 7);

        let pip = output.find("installer-pip-tab").unwrap();
        let conda = output.find("installer-conda-tab").unwrap();
        let uv = output.find("installer-uv-tab").unwrap();
        assert!(pip < conda && conda < uv);
    }

    #[test]
    fn test_first_tab_visible_and_active() {
        let mut processor = processor();
        let output = processor.process(THREE_TABS).unwrap();

        assert_eq!(output.matches(" hidden>").count(), 2);
        assert!(!output.contains(r#"data-tab-label="pip" hidden>"#));
        assert_eq!(output.matches("sp-active").count(), 1);
        assert!(output.contains("installer-pip-btn sp-active"));
    }

    #[test]
    fn test_bar_precedes_bodies() {
        let mut processor = processor();
        let output = processor.process(THREE_TABS).unwrap();

        let bar_end = output.find("</div>\n\n").unwrap();
        let first_body = output.find(r#"role="tabpanel""#).unwrap();
        assert!(output.starts_with(r#"<div class="sp-bar""#));
        assert!(bar_end < first_body);
    }

    #[test]
    fn test_groups_are_reported() {
        let mut processor = processor();
        processor.process(THREE_TABS).unwrap();

        let groups = groups(&processor);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "installer");
        assert!(groups[0].has_bar);
        let labels: Vec<&str> = groups[0].entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["pip", "conda", "uv"]);
    }

    #[test]
    fn test_default_group_name() {
        let mut processor = processor();
        let output = processor
            .process(":::tabs\n:::tab[a A]\nx\n:::\n:::")
            .unwrap();
        assert!(output.contains(r#"class="sp-tab default-a-tab""#));
    }

    #[test]
    fn test_configured_default_group() {
        let mut processor = DirectiveProcessor::new()
            .with_container(TabsDirective::new().with_default_group("guide"))
            .with_container(TabDirective);
        processor.process(":::tabs\n:::tab[a]\n:::\n:::").unwrap();
        assert_eq!(groups(&processor)[0].name, "guide");
    }

    #[test]
    fn test_tabbodies_has_no_bar() {
        let mut processor = processor();
        let output = processor
            .process(":::tabbodies[os]\n:::tab[linux Linux]\nL\n:::\n:::tab[macos macOS]\nM\n:::\n:::")
            .unwrap();

        assert!(!output.contains("<button"));
        assert!(!output.contains("sp-bar"));
        assert_eq!(output.matches(r#"role="tabpanel""#).count(), 2);
        assert!(output.contains(r#"data-tab-label="macos" hidden>"#));
        assert!(!groups(&processor)[0].has_bar);
    }

    #[test]
    fn test_tab_outside_tabs_is_usage_error() {
        let mut processor = processor();
        let err = processor
            .process("Intro\n\n:::tab[pip Pip]\ncontent\n:::")
            .unwrap_err();

        assert_eq!(err.name, "tab");
        assert_eq!(err.line, 3);
        assert!(err.message.contains("must be nested"));
    }

    #[test]
    fn test_tab_after_closed_tabs_is_usage_error() {
        let mut processor = processor();
        let err = processor
            .process(":::tabs\n:::tab[a]\n:::\n:::\n:::tab[b]\n:::")
            .unwrap_err();
        assert_eq!(err.line, 5);
    }

    #[test]
    fn test_tab_without_label_is_usage_error() {
        let mut processor = processor();
        let err = processor.process(":::tabs\n:::tab\n:::\n:::").unwrap_err();
        assert!(err.message.contains("requires a label"));
    }

    #[test]
    fn test_group_with_whitespace_is_usage_error() {
        let mut processor = processor();
        let err = processor
            .process(":::tabs[\"two words\"]\n:::")
            .unwrap_err();
        assert_eq!(err.name, "tabs");
    }

    #[test]
    fn test_nested_groups_are_independent() {
        let mut processor = processor();
        let input = "\
:::tabs[outer]
:::tab[a A]
:::tabs[inner]
:::tab[x X]
:::
:::tab[y Y]
:::
:::
:::
:::tab[b B]
:::
:::
";
        let output = processor.process(input).unwrap();

        let groups = groups(&processor);
        assert_eq!(groups[0].name, "inner");
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[1].name, "outer");
        assert_eq!(groups[1].entries.len(), 2);

        // First of each group is visible
        assert!(output.contains(r#"data-tab-label="x">"#));
        assert!(output.contains(r#"data-tab-label="y" hidden>"#));
        assert!(output.contains(r#"data-tab-label="a">"#));
        assert!(output.contains(r#"data-tab-label="b" hidden>"#));
    }

    #[test]
    fn test_sibling_groups_start_fresh() {
        let mut processor = processor();
        let input = ":::tabs\n:::tab[a]\n:::\n:::\n\n:::tabs\n:::tab[b]\n:::\n:::\n";
        let output = processor.process(input).unwrap();

        // Both first tabs are visible: registrations do not carry over
        assert_eq!(output.matches(" hidden>").count(), 0);
        assert_eq!(output.matches("sp-active").count(), 2);
    }

    #[test]
    fn test_duplicate_labels_both_render() {
        let mut processor = processor();
        let output = processor
            .process(":::tabs\n:::tab[a One]\n:::\n:::tab[a Two]\n:::\n:::")
            .unwrap();
        assert_eq!(output.matches("default-a-tab").count(), 2);
        assert_eq!(output.matches("default-a-btn").count(), 2);
    }

    #[test]
    fn test_repeated_renders_are_identical() {
        let mut processor = processor();
        let first = processor.process(THREE_TABS).unwrap();
        let second = processor.process(THREE_TABS).unwrap();
        assert_eq!(first, second);
        assert_eq!(groups(&processor).len(), 1);
    }

    #[test]
    fn test_failed_render_does_not_leak_into_next() {
        let mut processor = processor();
        processor
            .process(":::tabs\n:::tab[a]\n:::tab\n:::\n:::\n:::")
            .unwrap_err();

        let output = processor.process(THREE_TABS).unwrap();
        assert_eq!(output.matches(" hidden>").count(), 2);
        assert!(output.contains("installer-pip-btn sp-active"));
    }
}
