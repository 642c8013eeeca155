//! `spdocs build` command implementation.

use std::path::PathBuf;

use clap::Args;
use spdocs_config::{CliSettings, Config};
use spdocs_site::{BuildConfig, StaticSiteBuilder};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover spdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Site title used in every page title (overrides config).
    #[arg(short, long)]
    title: Option<String>,

    /// Enable verbose output (per-page progress).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            title: self.title,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let build_config = BuildConfig::from(&config);

        output.info(&format!("Source: {}", build_config.source_dir.display()));
        output.info(&format!("Output: {}", build_config.output_dir.display()));

        let report = StaticSiteBuilder::new(build_config.clone()).build()?;

        if self.verbose {
            for page in &report.pages {
                output.page(&page.title, &page.output);
            }
        }
        for warning in &report.warnings {
            output.warning(warning);
        }
        output.success(&format!(
            "Built {} page(s) to {}",
            report.pages.len(),
            build_config.output_dir.display()
        ));
        Ok(())
    }
}
