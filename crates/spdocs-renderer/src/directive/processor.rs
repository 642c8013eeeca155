//! Directive processor for `CommonMark` directives.
//!
//! Expands directives line by line before the markdown is handed to
//! pulldown-cmark. Container blocks render inside-out through a frame stack.

use std::path::{Path, PathBuf};

use super::context::location;
use super::fence::FenceTracker;
use super::parser::{ParsedDirective, parse_container_line, parse_line};
use super::{
    ContainerDirective, DirectiveArgs, DirectiveContext, DirectiveError, DirectiveOutput,
    InlineDirective, RenderScope, UsageError,
};

/// Configuration for the directive processor.
#[derive(Debug, Default)]
pub struct DirectiveProcessorConfig {
    /// Path to the source file being rendered (if known), used in messages.
    pub source_path: Option<PathBuf>,
}

impl DirectiveProcessorConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source file path.
    #[must_use]
    pub fn with_source_path(mut self, source_path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(source_path.into());
        self
    }
}

/// An open container block collecting its body.
struct Frame {
    name: String,
    args: DirectiveArgs,
    /// Line of the opening directive.
    line: usize,
    kind: FrameKind,
    body: String,
}

enum FrameKind {
    /// Registered handler at this index.
    Handler(usize),
    /// No handler: re-emit the block as written.
    Passthrough { opening: String },
}

/// Processor for `CommonMark` directives.
///
/// Each [`process`](Self::process) call starts from a clean slate: the frame
/// stack, the [`RenderScope`] and the warnings of the previous call are
/// discarded. After a call, [`scope`](Self::scope) still holds whatever the
/// handlers left there, so callers can read per-render results.
///
/// # Example
///
/// ```
/// use spdocs_renderer::directive::{
///     DirectiveArgs, DirectiveContext, DirectiveOutput, DirectiveProcessor, InlineDirective,
///     UsageError,
/// };
///
/// struct KbdDirective;
///
/// impl InlineDirective for KbdDirective {
///     fn name(&self) -> &str { "kbd" }
///     fn process(
///         &mut self,
///         args: DirectiveArgs,
///         _ctx: &mut DirectiveContext,
///     ) -> Result<DirectiveOutput, UsageError> {
///         Ok(DirectiveOutput::html(format!("<kbd>{}</kbd>", args.content)))
///     }
/// }
///
/// let mut processor = DirectiveProcessor::new().with_inline(KbdDirective);
///
/// let output = processor.process("Press :kbd[Ctrl+C] to copy.").unwrap();
/// assert_eq!(output, "Press <kbd>Ctrl+C</kbd> to copy.");
/// ```
pub struct DirectiveProcessor {
    config: DirectiveProcessorConfig,
    inline_handlers: Vec<Box<dyn InlineDirective>>,
    container_handlers: Vec<Box<dyn ContainerDirective>>,
    fence: FenceTracker,
    frames: Vec<Frame>,
    output: String,
    scope: RenderScope,
    warnings: Vec<String>,
}

impl Default for DirectiveProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveProcessor {
    /// Create a new directive processor with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DirectiveProcessorConfig::default())
    }

    /// Create a new directive processor with custom configuration.
    #[must_use]
    pub fn with_config(config: DirectiveProcessorConfig) -> Self {
        Self {
            config,
            inline_handlers: Vec::new(),
            container_handlers: Vec::new(),
            fence: FenceTracker::new(),
            frames: Vec::new(),
            output: String::new(),
            scope: RenderScope::new(),
            warnings: Vec::new(),
        }
    }

    /// Register an inline directive handler.
    #[must_use]
    pub fn with_inline<D: InlineDirective + 'static>(mut self, handler: D) -> Self {
        self.inline_handlers.push(Box::new(handler));
        self
    }

    /// Register a container directive handler.
    #[must_use]
    pub fn with_container<D: ContainerDirective + 'static>(mut self, handler: D) -> Self {
        self.container_handlers.push(Box::new(handler));
        self
    }

    /// Change the source path reported in messages for subsequent renders.
    pub fn set_source_path(&mut self, source_path: Option<PathBuf>) {
        self.config.source_path = source_path;
    }

    /// Expand all directives in `input`.
    ///
    /// Unknown directives pass through unchanged. Unclosed containers are
    /// closed at end of input with a warning.
    ///
    /// # Errors
    ///
    /// Returns the first [`DirectiveError`] raised by a handler; no partial
    /// output is returned.
    pub fn process(&mut self, input: &str) -> Result<String, DirectiveError> {
        self.reset();
        let result = self.process_lines(input);
        self.frames.clear();
        self.output.clear();
        result
    }

    /// Warnings from the last [`process`](Self::process) call.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// State left by handlers during the last [`process`](Self::process) call.
    #[must_use]
    pub fn scope(&self) -> &RenderScope {
        &self.scope
    }

    /// Mutable access to the render scope, e.g. to take results out of it.
    pub fn scope_mut(&mut self) -> &mut RenderScope {
        &mut self.scope
    }

    fn reset(&mut self) {
        self.fence = FenceTracker::new();
        self.frames.clear();
        self.output.clear();
        self.scope.clear();
        self.warnings.clear();
    }

    fn process_lines(&mut self, input: &str) -> Result<String, DirectiveError> {
        for (idx, line) in input.lines().enumerate() {
            self.process_line(line, idx + 1)?;
        }

        self.finalize()?;

        let mut output = std::mem::take(&mut self.output);
        if !input.ends_with('\n') && output.ends_with('\n') {
            output.pop();
        }
        Ok(output)
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<(), DirectiveError> {
        self.fence.update(line);

        // Skip directive processing inside code fences
        if self.fence.in_fence() {
            self.emit_line(line);
            return Ok(());
        }

        match parse_container_line(line) {
            Some(ParsedDirective::ContainerStart { name, args }) => {
                self.open_container(line, name, args, line_num)
            }
            Some(ParsedDirective::ContainerEnd) => self.close_container(line, line_num),
            _ => {
                let expanded = self.expand_inline(line, line_num)?;
                self.emit_line(&expanded);
                Ok(())
            }
        }
    }

    fn expand_inline(&mut self, line: &str, line_num: usize) -> Result<String, DirectiveError> {
        let mut result = String::with_capacity(line.len());
        let mut remaining = line;

        while let Some((directive, start, end)) = parse_line(remaining) {
            result.push_str(&remaining[..start]);

            match self.dispatch_inline(directive, line_num)? {
                DirectiveOutput::Html(html) => result.push_str(&html),
                DirectiveOutput::Skip => result.push_str(&remaining[start..end]),
            }

            remaining = &remaining[end..];
        }

        result.push_str(remaining);
        Ok(result)
    }

    fn dispatch_inline(
        &mut self,
        directive: ParsedDirective,
        line_num: usize,
    ) -> Result<DirectiveOutput, DirectiveError> {
        let ParsedDirective::Inline { name, args } = directive else {
            return Ok(DirectiveOutput::Skip);
        };
        let Some(idx) = self.inline_handlers.iter().position(|h| h.name() == name) else {
            return Ok(DirectiveOutput::Skip);
        };

        let source_path = self.config.source_path.as_deref();
        let mut ctx = DirectiveContext {
            source_path,
            line: line_num,
            scope: &mut self.scope,
        };
        self.inline_handlers[idx]
            .process(args, &mut ctx)
            .map_err(|err| locate(source_path, &name, line_num, err))
    }

    fn open_container(
        &mut self,
        line: &str,
        name: String,
        args: DirectiveArgs,
        line_num: usize,
    ) -> Result<(), DirectiveError> {
        let kind = match self.container_handlers.iter().position(|h| h.name() == name) {
            Some(idx) => {
                let source_path = self.config.source_path.as_deref();
                let mut ctx = DirectiveContext {
                    source_path,
                    line: line_num,
                    scope: &mut self.scope,
                };
                self.container_handlers[idx]
                    .start(&args, &mut ctx)
                    .map_err(|err| locate(source_path, &name, line_num, err))?;
                FrameKind::Handler(idx)
            }
            None => {
                tracing::debug!(directive = %name, line = line_num, "No handler, passing container through");
                FrameKind::Passthrough {
                    opening: line.to_owned(),
                }
            }
        };

        self.frames.push(Frame {
            name,
            args,
            line: line_num,
            kind,
            body: String::new(),
        });
        Ok(())
    }

    fn close_container(&mut self, line: &str, line_num: usize) -> Result<(), DirectiveError> {
        let Some(frame) = self.frames.pop() else {
            let loc = location(self.config.source_path.as_deref(), line_num);
            self.warnings
                .push(format!("{loc}: stray ::: with no opening directive"));
            self.emit_line(line);
            return Ok(());
        };

        let rendered = self.finish_frame(frame, Some(line))?;
        self.emit_line(&rendered);
        Ok(())
    }

    /// Render a finished frame. `closing` is `None` when closed implicitly.
    fn finish_frame(&mut self, frame: Frame, closing: Option<&str>) -> Result<String, DirectiveError> {
        match frame.kind {
            FrameKind::Passthrough { opening } => Ok(match closing {
                Some(closing) => format!("{opening}\n{}{closing}", frame.body),
                None => format!("{opening}\n{}", frame.body.trim_end_matches('\n')),
            }),
            FrameKind::Handler(idx) => {
                let source_path = self.config.source_path.as_deref();
                let mut ctx = DirectiveContext {
                    source_path,
                    line: frame.line,
                    scope: &mut self.scope,
                };
                self.container_handlers[idx]
                    .end(frame.args, frame.body, &mut ctx)
                    .map_err(|err| locate(source_path, &frame.name, frame.line, err))
            }
        }
    }

    fn finalize(&mut self) -> Result<(), DirectiveError> {
        while let Some(frame) = self.frames.pop() {
            let loc = location(self.config.source_path.as_deref(), frame.line);
            self.warnings.push(format!(
                "{loc}: unclosed container directive :::{} (missing closing :::)",
                frame.name
            ));
            let rendered = self.finish_frame(frame, None)?;
            self.emit_line(&rendered);
        }
        Ok(())
    }

    /// Append a line to the innermost open frame, or to the document.
    fn emit_line(&mut self, text: &str) {
        let buffer = match self.frames.last_mut() {
            Some(frame) => &mut frame.body,
            None => &mut self.output,
        };
        buffer.push_str(text);
        buffer.push('\n');
    }
}

/// Attach the directive name and source location to a handler error.
fn locate(source_path: Option<&Path>, name: &str, line: usize, err: UsageError) -> DirectiveError {
    DirectiveError {
        name: name.to_owned(),
        location: location(source_path, line),
        line,
        message: err.0,
    }
}
