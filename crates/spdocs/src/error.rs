//! CLI error types.

use spdocs_config::ConfigError;
use spdocs_renderer::directive::DirectiveError;
use spdocs_review::ReviewError;
use spdocs_site::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Directive(#[from] DirectiveError),

    #[error("{0}")]
    Review(#[from] ReviewError),
}
