//! Collapsible `details` container.

use crate::directive::{ContainerDirective, DirectiveArgs, DirectiveContext, UsageError};
use crate::util::escape_html;

const DEFAULT_TITLE: &str = "Details";

/// Container directive wrapping its body in `<details>`.
///
/// Syntax: `:::details[Summary text]{open .extra-class}`. The bracket content
/// becomes the `<summary>`; `{open}` renders the block expanded.
///
/// # Example
///
/// ```
/// use spdocs_renderer::directive::DirectiveProcessor;
/// use spdocs_renderer::DetailsDirective;
///
/// let mut processor = DirectiveProcessor::new().with_container(DetailsDirective);
///
/// let output = processor.process(":::details[Show output]\nHello\n:::").unwrap();
/// assert!(output.starts_with(r#"<details class="sp-details">"#));
/// assert!(output.contains("<summary>Show output</summary>"));
/// ```
pub struct DetailsDirective;

impl ContainerDirective for DetailsDirective {
    fn name(&self) -> &'static str {
        "details"
    }

    fn end(
        &mut self,
        args: DirectiveArgs,
        body: String,
        _ctx: &mut DirectiveContext,
    ) -> Result<String, UsageError> {
        let title = escape_html(args.content_or_none().unwrap_or(DEFAULT_TITLE));

        let mut class = String::from("sp-details");
        for extra in &args.classes {
            class.push(' ');
            class.push_str(&escape_html(extra));
        }
        let open = if args.flag("open") { " open" } else { "" };

        Ok(format!(
            "<details class=\"{class}\"{open}>\n<summary>{title}</summary>\n\n{}\n\n</details>\n",
            body.trim_end_matches('\n')
        ))
    }
}
