//! Markdown page discovery by filesystem walking.

use std::fs;
use std::path::{Path, PathBuf};

/// A markdown page found under the source directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PageRef {
    /// Absolute path of the `.md` file.
    pub source: PathBuf,
    /// Path relative to the source directory, e.g. `guides/packaging.md`.
    pub relative: PathBuf,
}

impl PageRef {
    /// Output path relative to the output directory: same location, `.html`.
    pub fn output_relative(&self) -> PathBuf {
        self.relative.with_extension("html")
    }
}

/// Walks a source directory for markdown pages.
///
/// Hidden files and directories are skipped. Results are sorted by relative
/// path so builds are deterministic.
pub(crate) struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    pub fn scan(&self) -> std::io::Result<Vec<PageRef>> {
        let mut pages = Vec::new();
        self.scan_directory(&self.source_dir, &mut pages)?;
        pages.sort_by(|a, b| a.relative.cmp(&b.relative));
        Ok(pages)
    }

    fn scan_directory(&self, dir_path: &Path, pages: &mut Vec<PageRef>) -> std::io::Result<()> {
        for entry in fs::read_dir(dir_path)? {
            let entry = entry?;
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }

            let path = entry.path();
            if entry.file_type()?.is_dir() {
                self.scan_directory(&path, pages)?;
            } else if path.extension().is_some_and(|e| e == "md")
                && let Ok(relative) = path.strip_prefix(&self.source_dir)
            {
                pages.push(PageRef {
                    relative: relative.to_path_buf(),
                    source: path,
                });
            }
        }
        Ok(())
    }
}
