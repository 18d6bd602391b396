//! Terminal output formatting for the spritegen CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs, written to
//! stderr. stdout is reserved for machine-readable output such as `list`.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Progress line with a green verb, e.g. `  Generating hero (32x32)`.
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Completion line with a green verb.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// Format a string as cyan (for paths).
    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Pluralize a count: `plural(1, "asset", "assets")` → "1 asset".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "frame", "frames"), "0 frames");
        assert_eq!(plural(1, "frame", "frames"), "1 frame");
        assert_eq!(plural(27, "asset", "assets"), "27 assets");
    }

    #[test]
    fn test_display_path_absolute() {
        let p = Path::new("/nonexistent/path/to/hero.png");
        assert_eq!(display_path(p), "/nonexistent/path/to/hero.png");
    }

    #[test]
    fn test_display_path_relative_to_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(display_path(&cwd.join("assets")), "assets");
        assert_eq!(display_path(&cwd), ".");
    }

    #[test]
    fn test_plain_formatting_without_colour() {
        let printer = Printer { color: false };
        assert_eq!(printer.dim("x"), "x");
        assert_eq!(printer.cyan("assets"), "assets");

        let printer = Printer { color: true };
        assert_eq!(printer.dim("x"), "\x1b[2mx\x1b[0m");
    }
}
