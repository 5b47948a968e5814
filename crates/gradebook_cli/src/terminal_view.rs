//! Line-oriented `SubjectView` for terminals.

use gradebook_core::{Subject, SubjectView};
use log::warn;
use std::io::Write;

/// Prints session changes to any writer, usually stdout.
pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Writes one free-form line (prompts, errors, help text).
    pub fn message(&mut self, text: &str) {
        self.write_line(format_args!("{text}"));
    }

    fn write_line(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out, "{args}").and_then(|()| self.out.flush()) {
            warn!("event=view_write module=cli status=error error={}", err);
        }
    }
}

impl<W: Write> SubjectView for TerminalView<W> {
    fn clear_subjects(&mut self) {
        self.write_line(format_args!("-- subjects --"));
    }

    fn render_subject(&mut self, subject: &Subject) {
        self.write_line(format_args!("  {}", subject.display_line()));
    }

    fn set_totals(&mut self, total_marks_text: &str, percentage_text: &str) {
        self.write_line(format_args!("{total_marks_text}"));
        if !percentage_text.is_empty() {
            self.write_line(format_args!("{percentage_text}"));
        }
    }

    fn clear_inputs(&mut self) {}
}
