//! Inline directive output.

/// Output from an inline directive handler.
///
/// - [`Html`](Self::Html): HTML that passes through pulldown-cmark unchanged
/// - [`Skip`](Self::Skip): leave the directive text as written
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectiveOutput {
    /// Inline HTML replacing the directive.
    Html(String),
    /// Don't handle this directive (pass through unchanged).
    Skip,
}

impl DirectiveOutput {
    /// Create an HTML output.
    ///
    /// # Example
    ///
    /// ```
    /// use spdocs_renderer::directive::DirectiveOutput;
    ///
    /// let output = DirectiveOutput::html("<kbd>Ctrl+C</kbd>");
    /// assert!(matches!(output, DirectiveOutput::Html(_)));
    /// ```
    #[must_use]
    pub fn html(s: impl Into<String>) -> Self {
        Self::Html(s.into())
    }
}
