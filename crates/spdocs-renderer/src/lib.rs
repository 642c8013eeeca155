//! Markdown rendering with the guide's content blocks.
//!
//! Pages are written in markdown extended with `CommonMark` generic
//! directives:
//!
//! - `:::details[Title]` ... `:::`: a collapsible block,
//! - `:::tabs[group]` / `:::tabbodies[group]` with nested `:::tab[label Title]`:
//!   switchable panes, with or without a selector bar,
//! - `:rr[CODE]`: an inline review badge.
//!
//! [`PageRenderer`] expands the blocks with the [`directive`] processor and
//! renders the result with pulldown-cmark. Tab state is modelled by
//! [`TabPage`], which mirrors the [`SWITCHER_SCRIPT`] shipped to browsers.
//!
//! # Example
//!
//! ```
//! use spdocs_renderer::PageRenderer;
//!
//! let markdown = "# Setup\n\n:::details[Why?]\nBecause.\n:::\n";
//! let result = PageRenderer::new().render(markdown).unwrap();
//!
//! assert_eq!(result.title.as_deref(), Some("Setup"));
//! assert!(result.html.contains("<details"));
//! ```

mod blocks;
pub mod directive;
mod renderer;
mod tabs;
mod util;

pub use blocks::{BadgeDirective, DetailsDirective};
pub use renderer::{PageRenderer, RenderResult};
pub use tabs::{
    DEFAULT_GROUP, RenderedGroups, SWITCHER_SCRIPT, TabDirective, TabElement, TabElementKind,
    TabEntry, TabGroup, TabPage, TabsDirective,
};
pub use util::escape_html;
