//! spdocs CLI - developer guide site builder.
//!
//! Provides commands for:
//! - `build`: Render the markdown pages into a static HTML site
//! - `render`: Print one page as an HTML fragment
//! - `review`: Render saved repo-review results

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, RenderArgs, ReviewArgs};
use output::Output;

/// spdocs - developer guide site builder.
#[derive(Parser)]
#[command(name = "spdocs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site from the markdown source directory.
    Build(BuildArgs),
    /// Render a single markdown page to stdout.
    Render(RenderArgs),
    /// Render saved repo-review results as HTML.
    Review(ReviewArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Render(args) => args.execute(),
        Commands::Review(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
