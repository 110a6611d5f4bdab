//! Terminal styling for user-facing messages.

use colored::Colorize;

/// Immutable styling choice handed to everything that prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, |s| s.bold().to_string())
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(text, |s| s.cyan().to_string())
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |s| s.green().to_string())
    }

    pub fn warn(&self, text: &str) -> String {
        self.paint(text, |s| s.yellow().to_string())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |s| s.red().to_string())
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> String) -> String {
        if self.color {
            style(text)
        } else {
            text.to_string()
        }
    }
}
