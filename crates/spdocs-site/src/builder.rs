//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};

use spdocs_config::Config;
use spdocs_renderer::directive::DirectiveError;
use spdocs_renderer::{DEFAULT_GROUP, PageRenderer};

use crate::scanner::Scanner;
use crate::template::{PageData, render_page, title_from_path};

/// Configuration for static site building.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Directory scanned for markdown pages.
    pub source_dir: PathBuf,
    /// Directory the HTML pages are written to.
    pub output_dir: PathBuf,
    /// Site title appended to page titles.
    pub site_title: String,
    /// Group for tab blocks that name none.
    pub default_group: String,
    /// Render GitHub Flavored Markdown extensions.
    pub gfm: bool,
}

impl BuildConfig {
    /// Create a build configuration with the default tab group.
    #[must_use]
    pub fn new(source_dir: PathBuf, output_dir: PathBuf, site_title: impl Into<String>) -> Self {
        Self {
            source_dir,
            output_dir,
            site_title: site_title.into(),
            default_group: DEFAULT_GROUP.to_owned(),
            gfm: true,
        }
    }
}

impl From<&Config> for BuildConfig {
    fn from(config: &Config) -> Self {
        Self {
            source_dir: config.site_resolved.source_dir.clone(),
            output_dir: config.site_resolved.output_dir.clone(),
            site_title: config.site_resolved.title.clone(),
            default_group: config.tabs.default_group.clone(),
            gfm: config.site_resolved.gfm,
        }
    }
}

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Source directory does not exist.
    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    /// Reading or writing a file failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A content block was used incorrectly; the build stops at the first one.
    #[error(transparent)]
    Directive(#[from] DirectiveError),
}

impl BuildError {
    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A page written by the builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltPage {
    /// Markdown source file.
    pub source: PathBuf,
    /// HTML file written.
    pub output: PathBuf,
    pub title: String,
}

/// Summary of a finished build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Pages in build order.
    pub pages: Vec<BuiltPage>,
    /// Directive warnings across all pages, prefixed with their location.
    pub warnings: Vec<String>,
}

/// Builds a directory of markdown pages into standalone HTML pages.
pub struct StaticSiteBuilder {
    config: BuildConfig,
}

impl StaticSiteBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Render every page under the source directory into the output directory.
    ///
    /// # Errors
    ///
    /// Returns the first I/O failure or content block error; pages written
    /// before it stay on disk.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let source_dir = &self.config.source_dir;
        if !source_dir.is_dir() {
            return Err(BuildError::SourceNotFound(source_dir.clone()));
        }

        let pages = Scanner::new(source_dir.clone())
            .scan()
            .map_err(BuildError::io(source_dir))?;
        tracing::info!(count = pages.len(), source = %source_dir.display(), "Building site");

        let mut renderer =
            PageRenderer::with_default_group(&self.config.default_group).with_gfm(self.config.gfm);
        let mut report = BuildReport::default();

        for page in pages {
            let markdown = fs::read_to_string(&page.source).map_err(BuildError::io(&page.source))?;

            renderer.set_source_path(Some(page.relative.clone()));
            let result = renderer.render(&markdown)?;

            let title = result
                .title
                .unwrap_or_else(|| title_from_path(&page.relative));
            let html = render_page(&PageData {
                title: &title,
                site_title: &self.config.site_title,
                html_content: &result.html,
            });

            let output = self.config.output_dir.join(page.output_relative());
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent).map_err(BuildError::io(parent))?;
            }
            fs::write(&output, html).map_err(BuildError::io(&output))?;
            tracing::debug!(
                source = %page.relative.display(),
                groups = result.groups.len(),
                warnings = result.warnings.len(),
                "Rendered page"
            );

            report.warnings.extend(result.warnings);
            report.pages.push(BuiltPage {
                source: page.source,
                output,
                title,
            });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn builder(root: &Path) -> StaticSiteBuilder {
        StaticSiteBuilder::new(BuildConfig::new(
            root.join("docs"),
            root.join("_site"),
            "Developer Guide",
        ))
    }

    #[test]
    fn test_build_writes_mirrored_pages() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(docs.join("guides")).unwrap();
        fs::write(docs.join("index.md"), "# Welcome\n\nHello.").unwrap();
        fs::write(
            docs.join("guides").join("packaging-simple.md"),
            ":::tabs\n:::tab[hatch Hatchling]\nhatch\n:::\n:::tab[pdm PDM]\npdm\n:::\n:::\n",
        )
        .unwrap();

        let report = builder(temp_dir.path()).build().unwrap();

        assert_eq!(report.pages.len(), 2);
        assert_eq!(report.pages[0].title, "Packaging Simple");
        assert_eq!(report.pages[1].title, "Welcome");

        let site = temp_dir.path().join("_site");
        let guide = fs::read_to_string(site.join("guides").join("packaging-simple.html")).unwrap();
        assert!(guide.contains("<title>Packaging Simple - Developer Guide</title>"));
        assert_eq!(guide.matches("<button").count(), 2);
        assert!(guide.contains("function activateTab("));

        let index = fs::read_to_string(site.join("index.html")).unwrap();
        assert!(index.contains("<h1>Welcome</h1>"));
    }

    #[test]
    fn test_build_stops_at_usage_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("bad.md"), "# Bad\n\nSee :rr[two words].\n").unwrap();

        let err = builder(temp_dir.path()).build().unwrap_err();

        assert!(matches!(err, BuildError::Directive(_)));
        assert_eq!(err.to_string(), "bad.md:3: 'rr' code must not contain whitespace, got \"two words\"");
    }

    #[test]
    fn test_build_collects_warnings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("page.md"), "text\n:::\n").unwrap();

        let report = builder(temp_dir.path()).build().unwrap();

        assert_eq!(report.warnings, vec!["page.md:2: stray ::: with no opening directive"]);
    }

    #[test]
    fn test_build_without_gfm() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("table.md"), "| a | b |\n|---|---|\n| 1 | 2 |\n").unwrap();

        builder(temp_dir.path()).build().unwrap();
        let page = fs::read_to_string(temp_dir.path().join("_site").join("table.html")).unwrap();
        assert!(page.contains("<table>"));

        let plain = BuildConfig {
            gfm: false,
            ..BuildConfig::new(
                temp_dir.path().join("docs"),
                temp_dir.path().join("_site"),
                "Developer Guide",
            )
        };
        StaticSiteBuilder::new(plain).build().unwrap();
        let page = fs::read_to_string(temp_dir.path().join("_site").join("table.html")).unwrap();
        assert!(!page.contains("<table>"));
    }

    #[test]
    fn test_build_missing_source_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = builder(temp_dir.path()).build().unwrap_err();
        assert!(matches!(err, BuildError::SourceNotFound(_)));
    }

    #[test]
    fn test_build_config_from_config() {
        let config = Config::default();
        let build = BuildConfig::from(&config);
        assert_eq!(build.default_group, "default");
        assert_eq!(build.site_title, "Developer Guide");
        assert_eq!(build.source_dir, PathBuf::from("./docs"));
        assert!(build.gfm);
    }
}
