//! Directive errors.

/// Invalid use of a directive by a page author.
///
/// Returned by handlers; the processor attaches the directive name and
/// source line before reporting it as a [`DirectiveError`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct UsageError(pub String);

impl UsageError {
    /// Create a usage error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A usage error located in the source document.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{location}: '{name}' {message}")]
pub struct DirectiveError {
    /// Directive name (e.g., "tab").
    pub name: String,
    /// Source file and line (`guide.md:12`), or `line 12` when the file is unknown.
    pub location: String,
    /// Line number where the directive appears (1-indexed).
    pub line: usize,
    /// What was wrong.
    pub message: String,
}
