//! `spdocs review` command implementation.

use std::path::PathBuf;

use clap::Args;
use spdocs_review::{RepoTarget, ReviewError, ReviewReport, render_error, render_report};

use super::write_output;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the review command.
#[derive(Args)]
pub(crate) struct ReviewArgs {
    /// JSON file with saved review results or `{"error": "..."}`.
    results: PathBuf,

    /// Reviewed repository, e.g. `scikit-hep/hist`.
    #[arg(long, required_unless_present = "query")]
    repo: Option<String>,

    /// Reviewed branch.
    #[arg(long, required_unless_present = "query")]
    branch: Option<String>,

    /// Take repository and branch from a results page query string,
    /// e.g. `repo=scikit-hep/hist&branch=main`.
    #[arg(long, conflicts_with_all = ["repo", "branch"])]
    query: Option<String>,

    /// Write the HTML to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ReviewArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let target = match &self.query {
            Some(query) => RepoTarget::from_query(query)?,
            None => RepoTarget::new(
                self.repo.unwrap_or_default(),
                self.branch.unwrap_or_default(),
            )?,
        };
        let json = std::fs::read_to_string(&self.results)?;

        let html = match ReviewReport::from_json(&json) {
            Ok(report) => {
                tracing::info!(results = report.results.len(), target = %target, "Rendering review");
                render_report(&report, &target)
            }
            Err(err @ ReviewError::Json(_)) => return Err(err.into()),
            Err(err) => {
                output.warning(&format!("Review of {target} failed: {err}"));
                render_error(&err)
            }
        };

        write_output(self.output.as_deref(), &html)
    }
}
