//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod render;
pub(crate) mod review;

pub(crate) use build::BuildArgs;
pub(crate) use render::RenderArgs;
pub(crate) use review::ReviewArgs;

use std::io::Write;
use std::path::Path;

use crate::error::CliError;

/// Write `content` to `path`, or to stdout when no path is given.
fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, content)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
