//! Active-user session and grade aggregation.
//!
//! # Responsibility
//! - Hold the ordered in-memory list of one owner's subjects.
//! - Compute total marks and percentage from that list only.
//!
//! # Invariants
//! - `subjects` is the store snapshot taken at load time followed by every
//!   record appended since, in that order.
//! - Percentage assumes each subject is scored out of 100.

use crate::model::subject::Subject;
use serde::{Deserialize, Serialize};

const MAX_MARKS_PER_SUBJECT: i64 = 100;
const PERCENTAGE_DECIMALS: usize = 2;

/// Text shown when a session has no subjects.
pub const NO_SUBJECTS_TEXT: &str = "No subjects added.";

/// In-memory view of one owner's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    owner: String,
    subjects: Vec<Subject>,
}

impl Session {
    /// Creates an empty session for `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            subjects: Vec::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Replaces the list with a freshly loaded store snapshot.
    pub(crate) fn replace_subjects(&mut self, subjects: Vec<Subject>) {
        self.subjects = subjects;
    }

    /// Appends one record after the existing ones.
    pub(crate) fn push(&mut self, subject: Subject) {
        self.subjects.push(subject);
    }

    /// Aggregates the in-memory list.
    ///
    /// `percentage = total / (count * 100) * 100`, so values above 100 or
    /// below 0 pass straight through when marks are out of range.
    pub fn results(&self) -> GradeResults {
        let total_marks = self
            .subjects
            .iter()
            .map(|subject| i64::from(subject.marks))
            .sum::<i64>();
        let total_subjects = self.subjects.len();

        let percentage = if total_subjects == 0 {
            None
        } else {
            let max_total = total_subjects as i64 * MAX_MARKS_PER_SUBJECT;
            Some((total_marks as f64 / max_total as f64) * 100.0)
        };

        GradeResults {
            total_marks,
            total_subjects,
            percentage,
        }
    }
}

/// Aggregate over a session's subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeResults {
    pub total_marks: i64,
    pub total_subjects: usize,
    /// `None` when there are no subjects.
    pub percentage: Option<f64>,
}

impl GradeResults {
    pub fn has_subjects(&self) -> bool {
        self.total_subjects > 0
    }

    /// Returns the total-marks display line.
    pub fn total_marks_text(&self) -> String {
        if self.has_subjects() {
            format!("Total Marks: {}", self.total_marks)
        } else {
            NO_SUBJECTS_TEXT.to_string()
        }
    }

    /// Returns the percentage display line with two decimal digits.
    pub fn percentage_text(&self) -> String {
        match self.percentage {
            Some(percentage) => format!(
                "Total Percentage: {}%",
                format_half_up(percentage, PERCENTAGE_DECIMALS)
            ),
            None => String::new(),
        }
    }
}

/// Formats `value` with `decimals` fraction digits, rounding ties away from
/// zero.
///
/// Rounding works on the shortest decimal form of `value` (what `{}` prints),
/// so `87.625` becomes `87.63` even though `{:.2}` would print `87.62`.
fn format_half_up(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{value:.decimals$}");
    }

    let shortest = format!("{}", value.abs());
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|digit| *digit >= b'5');

    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.extend(frac_part.bytes().take(decimals));
    digits.resize(int_part.len() + decimals, b'0');

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split_at = digits.len() - decimals;
    let mut text = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        text.push('-');
    }
    text.extend(digits[..split_at].iter().map(|digit| char::from(*digit)));
    if decimals > 0 {
        text.push('.');
        text.extend(digits[split_at..].iter().map(|digit| char::from(*digit)));
    }
    text
}
