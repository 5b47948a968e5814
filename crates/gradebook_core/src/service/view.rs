//! Display boundary driven by the gradebook service.
//!
//! # Responsibility
//! - Let any front end (terminal, desktop form, test double) receive
//!   render/totals/clear signals without the core knowing about widgets.

use crate::model::subject::Subject;

/// Callbacks a front end implements to mirror session state.
pub trait SubjectView {
    /// Removes every rendered subject line.
    fn clear_subjects(&mut self);
    /// Adds one visual line for `subject`, see [`Subject::display_line`].
    fn render_subject(&mut self, subject: &Subject);
    /// Shows the two result lines of a totals request.
    fn set_totals(&mut self, total_marks_text: &str, percentage_text: &str);
    /// Clears the subject/marks input fields after a successful add.
    fn clear_inputs(&mut self);
}

/// In-memory view that records every signal; used by tests and headless
/// callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingView {
    pub lines: Vec<String>,
    pub totals: Option<(String, String)>,
    pub input_clears: usize,
}

impl SubjectView for RecordingView {
    fn clear_subjects(&mut self) {
        self.lines.clear();
    }

    fn render_subject(&mut self, subject: &Subject) {
        self.lines.push(subject.display_line());
    }

    fn set_totals(&mut self, total_marks_text: &str, percentage_text: &str) {
        self.totals = Some((total_marks_text.to_string(), percentage_text.to_string()));
    }

    fn clear_inputs(&mut self) {
        self.input_clears += 1;
    }
}
