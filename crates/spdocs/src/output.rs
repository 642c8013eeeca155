//! Colored terminal output on stderr.

use std::path::Path;

use console::{Style, Term};

/// Terminal output formatter.
///
/// Everything goes to stderr so `render` and `review` can stream HTML to stdout.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    dim: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            dim: Style::new().dim(),
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        self.styled(&self.green, msg);
    }

    /// Print a warning, e.g. a directive warning with its location (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        self.styled(&self.yellow, &format!("warning: {msg}"));
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        self.styled(&self.red, msg);
    }

    /// Print one written page: its title, then the output path dimmed.
    pub(crate) fn page(&self, title: &str, path: &Path) {
        let _ = self.term.write_line(&format!(
            "  {title} {}",
            self.dim.apply_to(path.display())
        ));
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}
