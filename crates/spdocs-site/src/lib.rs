//! Static HTML site generation for spdocs.
//!
//! [`StaticSiteBuilder`] walks the source directory, renders each markdown
//! page with [`spdocs_renderer::PageRenderer`] and writes a standalone page
//! with the tab switcher inlined.

mod builder;
mod scanner;
mod template;

pub use builder::{BuildConfig, BuildError, BuildReport, BuiltPage, StaticSiteBuilder};
