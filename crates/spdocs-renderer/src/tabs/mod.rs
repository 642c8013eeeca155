//! Grouped, switchable tab blocks.
//!
//! ```markdown
//! :::tabs[installer]
//! :::tab[pip Pip]
//! pip install package
//! :::
//! :::tab[uv uv]
//! uv add package
//! :::
//! :::
//! ```
//!
//! `tabs` emits a selector bar followed by the bodies; `tabbodies` emits the
//! bodies only. Every body and button carries `data-tab-group` and
//! `data-tab-label` so the [`SWITCHER_SCRIPT`] can toggle them, and
//! [`TabPage`] models the same transitions on the server side.

mod directive;
mod group;
mod markup;
mod switcher;

pub use directive::{TabDirective, TabsDirective};
pub use group::{RenderedGroups, TabEntry, TabGroup};
pub use switcher::{SWITCHER_SCRIPT, TabElement, TabElementKind, TabPage};

/// Group name used when a `tabs`/`tabbodies` block names none.
pub const DEFAULT_GROUP: &str = "default";

pub(crate) const TAB_CLASS: &str = "sp-tab";
pub(crate) const BAR_CLASS: &str = "sp-bar";
pub(crate) const BUTTON_CLASS: &str = "sp-bar-item";
pub(crate) const ACTIVE_CLASS: &str = "sp-active";
