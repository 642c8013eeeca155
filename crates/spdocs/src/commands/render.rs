//! `spdocs render` command implementation.

use std::path::PathBuf;

use clap::Args;
use spdocs_config::Config;
use spdocs_renderer::PageRenderer;

use super::write_output;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    file: PathBuf,

    /// Tab label to show initially, as the `tabs` query parameter would (repeatable).
    #[arg(long = "tabs", value_name = "LABEL")]
    tabs: Vec<String>,

    /// Path to configuration file (default: auto-discover spdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the fragment to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        let markdown = std::fs::read_to_string(&self.file)?;
        let mut renderer = PageRenderer::with_default_group(&config.tabs.default_group)
            .with_source_path(&self.file)
            .with_gfm(config.site_resolved.gfm);
        let mut result = renderer.render(&markdown)?;

        for warning in &result.warnings {
            output.warning(warning);
        }

        if !self.tabs.is_empty() {
            let mut page = result.tab_page();
            let applied = page.activate_labels(self.tabs.iter().map(String::as_str));
            if applied == 0 {
                output.warning(&format!(
                    "No tab group has any of the labels: {}",
                    self.tabs.join(", ")
                ));
            }
            let rewritten = page.apply_to_html(&mut result.html);
            tracing::debug!(rewritten, "Applied initial tab state");
        }

        write_output(self.output.as_deref(), &result.html)
    }
}
