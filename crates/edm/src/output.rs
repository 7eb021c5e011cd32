//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Status messages go to stderr; command results go to stdout.
pub(crate) struct Output {
    term: Term,
    out: Term,
    red: Style,
    cyan_bold: Style,
    dim: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            out: Term::stdout(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a section heading to stdout (cyan bold).
    pub(crate) fn heading(&self, indent: usize, msg: &str) {
        let line = format!("{}{}", "  ".repeat(indent), self.cyan_bold.apply_to(msg));
        let _ = self.out.write_line(&line);
    }

    /// Print a page entry to stdout with its link dimmed.
    pub(crate) fn entry(&self, indent: usize, name: &str, link: &str) {
        let line = format!(
            "{}{name} {}",
            "  ".repeat(indent),
            self.dim.apply_to(link)
        );
        let _ = self.out.write_line(&line);
    }
}
