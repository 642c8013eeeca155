//! Inline review badge.

use crate::directive::{DirectiveArgs, DirectiveContext, DirectiveOutput, InlineDirective, UsageError};
use crate::util::escape_html;

/// Inline directive rendering an inert badge for a review check code.
///
/// Syntax: `:rr[PY001]`.
///
/// # Example
///
/// ```
/// use spdocs_renderer::directive::DirectiveProcessor;
/// use spdocs_renderer::BadgeDirective;
///
/// let mut processor = DirectiveProcessor::new().with_inline(BadgeDirective);
///
/// let output = processor.process("Check :rr[PY001] first.").unwrap();
/// assert_eq!(output, r#"Check <span class="rr-btn" id="PY001">PY001</span> first."#);
/// ```
pub struct BadgeDirective;

impl InlineDirective for BadgeDirective {
    fn name(&self) -> &'static str {
        "rr"
    }

    fn process(
        &mut self,
        args: DirectiveArgs,
        _ctx: &mut DirectiveContext,
    ) -> Result<DirectiveOutput, UsageError> {
        let code = args.content.trim();
        if code.is_empty() {
            return Err(UsageError::new("requires a code"));
        }
        if code.contains(char::is_whitespace) {
            return Err(UsageError::new(format!(
                "code must not contain whitespace, got {code:?}"
            )));
        }

        let code = escape_html(code);
        Ok(DirectiveOutput::html(format!(
            r#"<span class="rr-btn" id="{code}">{code}</span>"#
        )))
    }
}
