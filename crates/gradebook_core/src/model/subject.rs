//! Subject record model.
//!
//! # Responsibility
//! - Define the `(owner, name, marks)` triple shared by store and session.
//! - Provide the one-line display projection used by views.
//!
//! # Invariants
//! - `owner` and `name` are non-blank.
//! - `marks` carries no range constraint; negative and >100 values are valid.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One recorded subject score for an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Username the record is scoped to.
    pub owner: String,
    /// Subject name exactly as entered (not trimmed).
    pub name: String,
    pub marks: i32,
}

/// Validation error for subject record invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectValidationError {
    BlankOwner,
    BlankName,
}

impl Display for SubjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankOwner => write!(f, "subject owner must not be blank"),
            Self::BlankName => write!(f, "subject name must not be blank"),
        }
    }
}

impl Error for SubjectValidationError {}

impl Subject {
    pub fn new(owner: impl Into<String>, name: impl Into<String>, marks: i32) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            marks,
        }
    }

    /// Checks record invariants.
    ///
    /// Only blankness is checked; marks are accepted as-is.
    pub fn validate(&self) -> Result<(), SubjectValidationError> {
        if self.owner.trim().is_empty() {
            return Err(SubjectValidationError::BlankOwner);
        }
        if self.name.trim().is_empty() {
            return Err(SubjectValidationError::BlankName);
        }
        Ok(())
    }

    /// Returns the list line rendered for this record, e.g. `Math: 77 marks`.
    pub fn display_line(&self) -> String {
        format!("{}: {} marks", self.name, self.marks)
    }
}

#[cfg(test)]
mod tests {
    use super::{Subject, SubjectValidationError};

    #[test]
    fn display_line_matches_list_format() {
        let subject = Subject::new("alice", "Math", 77);
        assert_eq!(subject.display_line(), "Math: 77 marks");
    }

    #[test]
    fn display_line_keeps_negative_marks() {
        let subject = Subject::new("alice", "Chemistry", -5);
        assert_eq!(subject.display_line(), "Chemistry: -5 marks");
    }

    #[test]
    fn validate_rejects_blank_fields() {
        assert_eq!(
            Subject::new(" ", "Math", 1).validate(),
            Err(SubjectValidationError::BlankOwner)
        );
        assert_eq!(
            Subject::new("alice", "\t", 1).validate(),
            Err(SubjectValidationError::BlankName)
        );
    }

    #[test]
    fn validate_accepts_out_of_range_marks() {
        assert!(Subject::new("alice", "Math", 150).validate().is_ok());
        assert!(Subject::new("alice", "Math", -20).validate().is_ok());
    }
}
