//! Output formatting

use console::{style, Term};
use serde::Serialize;
use siteswap::Point;

use crate::error::CliResult;

/// Writes human-readable results to stdout.
#[derive(Debug)]
pub struct Reporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stdout(),
            use_color,
            quiet,
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("✓").green().bold().to_string()
        } else {
            "OK".to_string()
        };

        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("ℹ").blue().bold().to_string()
        } else {
            "INFO".to_string()
        };

        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a section header
    pub fn header(&self, title: &str) {
        if self.quiet {
            return;
        }

        let styled = if self.use_color {
            style(title).bold().underlined().to_string()
        } else {
            format!("=== {title} ===")
        };

        let _ = self.term.write_line(&styled);
    }

    /// Print a `label: value` line with the label dimmed
    pub fn field(&self, label: &str, value: &str) {
        let label = if self.use_color {
            style(format!("{label}:")).dim().to_string()
        } else {
            format!("{label}:")
        };
        let _ = self.term.write_line(&format!("{label} {value}"));
    }

    /// Print a data line; shown even in quiet mode
    pub fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }
}

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `(x, y)` with two decimals.
#[must_use]
pub fn format_point(p: Point) -> String {
    format!("({:.2}, {:.2})", p.x, p.y)
}
