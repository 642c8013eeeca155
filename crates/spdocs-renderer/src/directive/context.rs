//! Directive processing context.
//!
//! Gives handlers the source location and the render-scoped shared state.

use std::path::Path;

use super::RenderScope;

/// Context passed to directive handlers.
///
/// The context is created by [`DirectiveProcessor`](super::DirectiveProcessor)
/// for each directive call and provides:
///
/// - Source file and line for error messages
/// - The [`RenderScope`] shared by all handlers for the current render
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use spdocs_renderer::directive::{DirectiveContext, RenderScope};
///
/// let mut scope = RenderScope::new();
/// let ctx = DirectiveContext {
///     source_path: Some(Path::new("docs/guides/packaging.md")),
///     line: 42,
///     scope: &mut scope,
/// };
///
/// assert_eq!(ctx.location(), "docs/guides/packaging.md:42");
/// ```
pub struct DirectiveContext<'a> {
    /// Path to the source file being rendered (if known).
    pub source_path: Option<&'a Path>,
    /// Line number where the directive appears (1-indexed).
    pub line: usize,
    /// State shared between handlers for the current render.
    pub scope: &'a mut RenderScope,
}

impl DirectiveContext<'_> {
    /// Human-readable source location: `path:line`, or `line N` without a path.
    #[must_use]
    pub fn location(&self) -> String {
        location(self.source_path, self.line)
    }
}

/// Format a source location.
pub(crate) fn location(source_path: Option<&Path>, line: usize) -> String {
    match source_path {
        Some(path) => format!("{}:{line}", path.display()),
        None => format!("line {line}"),
    }
}
