//! Container directive trait.
//!
//! Container directives use triple-colon syntax: `:::name` ... `:::`

use super::{DirectiveArgs, DirectiveContext, UsageError};

/// Handler for container directives: `:::name` ... `:::`
///
/// Containers render inside-out. When the opening line is read the processor
/// calls [`start`](Self::start) and begins collecting the block's body in a
/// fresh frame; nested directives render into that frame. At the closing
/// `:::` the finished body is handed to [`end`](Self::end), whose return
/// value replaces the whole block in the enclosing output.
///
/// State that nested handlers need (e.g. the tab registrations of the
/// enclosing `tabs` block) goes into [`DirectiveContext::scope`].
///
/// # Example
///
/// ```
/// use spdocs_renderer::directive::{
///     ContainerDirective, DirectiveArgs, DirectiveContext, UsageError,
/// };
///
/// struct NoteDirective;
///
/// impl ContainerDirective for NoteDirective {
///     fn name(&self) -> &str { "note" }
///
///     fn end(
///         &mut self,
///         _args: DirectiveArgs,
///         body: String,
///         _ctx: &mut DirectiveContext,
///     ) -> Result<String, UsageError> {
///         Ok(format!("<div class=\"note\">\n\n{body}\n</div>\n"))
///     }
/// }
/// ```
pub trait ContainerDirective: Send {
    /// Directive name, matched against `:::name`.
    fn name(&self) -> &str;

    /// Handle the opening line, before any of the body renders.
    fn start(&mut self, _args: &DirectiveArgs, _ctx: &mut DirectiveContext) -> Result<(), UsageError> {
        Ok(())
    }

    /// Handle the closing line with the fully rendered body.
    ///
    /// **Invariant**: the processor calls `end()` exactly once for every
    /// successful `start()`, innermost block first.
    ///
    /// HTML output should end with a newline. The processor appends one more,
    /// leaving the blank line that closes a CommonMark HTML block.
    fn end(
        &mut self,
        args: DirectiveArgs,
        body: String,
        ctx: &mut DirectiveContext,
    ) -> Result<String, UsageError>;
}
