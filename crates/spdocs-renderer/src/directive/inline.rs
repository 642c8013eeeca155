//! Inline directive trait.
//!
//! Inline directives use single-colon syntax: `:name[content]{attrs}`

use super::{DirectiveArgs, DirectiveContext, DirectiveOutput, UsageError};

/// Handler for inline directives: `:name[content]{attrs}`
///
/// Inline directives appear within text flow and produce inline HTML elements.
/// They are expanded before pulldown-cmark parsing, so a returned
/// [`UsageError`] aborts the render before any HTML is produced.
///
/// # Example
///
/// ```
/// use spdocs_renderer::directive::{
///     DirectiveArgs, DirectiveContext, DirectiveOutput, InlineDirective, UsageError,
/// };
///
/// struct KbdDirective;
///
/// impl InlineDirective for KbdDirective {
///     fn name(&self) -> &str { "kbd" }
///
///     fn process(
///         &mut self,
///         args: DirectiveArgs,
///         _ctx: &mut DirectiveContext,
///     ) -> Result<DirectiveOutput, UsageError> {
///         Ok(DirectiveOutput::html(format!("<kbd>{}</kbd>", args.content)))
///     }
/// }
/// ```
pub trait InlineDirective: Send {
    /// Directive name, matched against `:name[...]`.
    fn name(&self) -> &str;

    /// Expand the directive.
    fn process(
        &mut self,
        args: DirectiveArgs,
        ctx: &mut DirectiveContext,
    ) -> Result<DirectiveOutput, UsageError>;
}
