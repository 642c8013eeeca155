//! Page renderer: directive expansion followed by markdown rendering.

use std::path::PathBuf;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

use crate::blocks::{BadgeDirective, DetailsDirective};
use crate::directive::{DirectiveError, DirectiveProcessor, DirectiveProcessorConfig};
use crate::tabs::{DEFAULT_GROUP, RenderedGroups, TabDirective, TabGroup, TabPage, TabsDirective};

/// Result of rendering one page.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML fragment.
    pub html: String,
    /// Text of the first H1 heading, if any.
    pub title: Option<String>,
    /// Tab groups in the order their blocks closed.
    pub groups: Vec<TabGroup>,
    /// Directive warnings (stray or unclosed blocks).
    pub warnings: Vec<String>,
}

impl RenderResult {
    /// Switcher state for this page, first tab of every group shown.
    #[must_use]
    pub fn tab_page(&self) -> TabPage {
        TabPage::from_groups(&self.groups)
    }
}

/// Markdown renderer with every content block registered.
///
/// # Example
///
/// ```
/// use spdocs_renderer::PageRenderer;
///
/// let mut renderer = PageRenderer::new();
/// let result = renderer
///     .render("# Install\n\n:::tabs\n:::tab[pip Pip]\n`pip install x`\n:::\n:::\n")
///     .unwrap();
///
/// assert_eq!(result.title.as_deref(), Some("Install"));
/// assert!(result.html.contains("<code>pip install x</code>"));
/// assert_eq!(result.groups.len(), 1);
/// ```
pub struct PageRenderer {
    processor: DirectiveProcessor,
    gfm: bool,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer {
    /// Create a renderer using the `default` tab group.
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_group(DEFAULT_GROUP)
    }

    /// Create a renderer whose unnamed tab blocks use `group`.
    #[must_use]
    pub fn with_default_group(group: &str) -> Self {
        let processor = DirectiveProcessor::with_config(DirectiveProcessorConfig::new())
            .with_container(TabsDirective::new().with_default_group(group))
            .with_container(TabsDirective::bodies().with_default_group(group))
            .with_container(TabDirective)
            .with_container(DetailsDirective)
            .with_inline(BadgeDirective);
        Self {
            processor,
            gfm: true,
        }
    }

    /// Set the source path reported in errors and warnings.
    #[must_use]
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.set_source_path(Some(path.into()));
        self
    }

    /// Change the source path for subsequent renders.
    pub fn set_source_path(&mut self, path: Option<PathBuf>) {
        self.processor.set_source_path(path);
    }

    /// Enable or disable GitHub Flavored Markdown extensions.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Render a markdown document to an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns the first [`DirectiveError`] raised by a block.
    pub fn render(&mut self, markdown: &str) -> Result<RenderResult, DirectiveError> {
        let expanded = self.processor.process(markdown)?;
        let warnings = self.processor.warnings().to_vec();
        let groups = self
            .processor
            .scope_mut()
            .remove::<RenderedGroups>()
            .map(|g| g.0)
            .unwrap_or_default();

        let events: Vec<Event<'_>> = Parser::new_ext(&expanded, self.options()).collect();
        let title = extract_title(&events);

        let mut html = String::with_capacity(expanded.len() * 3 / 2);
        html::push_html(&mut html, events.into_iter());

        Ok(RenderResult {
            html,
            title,
            groups,
            warnings,
        })
    }

    fn options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }
}

/// Plain text of the first H1 heading.
fn extract_title(events: &[Event<'_>]) -> Option<String> {
    let mut title: Option<String> = None;
    for event in events {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if title.is_none() => title = Some(String::new()),
            Event::Text(text) | Event::Code(text) => {
                if let Some(buf) = title.as_mut() {
                    buf.push_str(text);
                }
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let text = title.unwrap_or_default();
                let trimmed = text.trim();
                return (!trimmed.is_empty()).then(|| trimmed.to_owned());
            }
            _ => {}
        }
    }
    None
}
