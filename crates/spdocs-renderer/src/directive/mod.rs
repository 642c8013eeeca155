//! Pluggable directives for `CommonMark` directive syntax.
//!
//! Handles inline directives (`:name[content]{attrs}`) and container
//! directives (`:::name` ... `:::`). Leaf directives (`::name`) are
//! recognized and left as written.
//!
//! # Rendering model
//!
//! Directives are expanded before pulldown-cmark sees the document.
//! Containers render inside-out: the processor collects each block's body in
//! a frame, nested blocks render into that frame, and the block's handler
//! receives the finished body when the block closes. Handlers that need to
//! cooperate (a `tab` registering with its enclosing `tabs`) share state
//! through the [`RenderScope`] carried by the [`DirectiveContext`]; the scope
//! is reset for every document.
//!
//! Handlers report author mistakes as [`UsageError`]; the processor stops and
//! returns a [`DirectiveError`] with the source location.

mod args;
mod container;
mod context;
mod error;
mod fence;
mod inline;
mod output;
mod parser;
mod processor;
mod replacements;
mod scope;

pub use args::DirectiveArgs;
pub use container::ContainerDirective;
pub use context::DirectiveContext;
pub use error::{DirectiveError, UsageError};
pub use inline::InlineDirective;
pub use output::DirectiveOutput;
pub use processor::{DirectiveProcessor, DirectiveProcessorConfig};
pub use replacements::Replacements;
pub use scope::RenderScope;
