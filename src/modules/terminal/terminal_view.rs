use std::io::{self, Stdout, Write};

use crate::shared::view::PageView;

/// Plain-text rendering of a page for the command line
pub struct TerminalView<W: Write + Send> {
    out: W,
    autocomplete: Vec<String>,
}

impl TerminalView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            autocomplete: Vec::new(),
        }
    }

    /// Up to `limit` directory names containing `fragment`, ignoring case
    pub fn suggestions(&self, fragment: &str, limit: usize) -> Vec<&str> {
        let needle = fragment.to_lowercase();
        self.autocomplete
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .take(limit)
            .map(String::as_str)
            .collect()
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> PageView for TerminalView<W> {
    fn toast(&mut self, message: &str) {
        self.emit(&format!(">> {}", message));
    }

    fn set_autocomplete(&mut self, names: &[String]) {
        tracing::debug!("Autocomplete source holds {} names", names.len());
        self.autocomplete = names.to_vec();
    }

    fn render_rows(&mut self, rows: &[String]) {
        if rows.is_empty() {
            self.emit("(no reports)");
            return;
        }
        for (i, row) in rows.iter().enumerate() {
            self.emit(&format!("[{:>3}] {}", i, row));
        }
    }

    fn show_modal(&mut self, body: &str) {
        let width = body.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let rule = "-".repeat(width);
        self.emit(&rule);
        self.emit(body);
        self.emit(&rule);
    }

    fn hide_row(&mut self, index: usize) {
        self.emit(&format!("[{:>3}] (removed)", index));
    }

    fn clear_form(&mut self) {
        tracing::debug!("Form cleared");
    }
}
