//! Gradebook session use-case service.
//!
//! # Responsibility
//! - Own the active session and its in-memory subject list.
//! - Validate raw form input and write new subjects through to the store.
//! - Compute totals from memory and push every change to the view.
//!
//! # Invariants
//! - Totals are computed from the session list only, never re-read from store.
//! - A rejected input never mutates the session.
//! - Under `WriteThroughPolicy::Atomic`, a failed store append never reaches
//!   the session or the view.

use crate::model::session::{GradeResults, Session};
use crate::model::subject::Subject;
use crate::repo::subject_repo::{RepoError, SubjectRepository};
use crate::service::view::SubjectView;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Malformed form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Subject name or marks is empty or whitespace-only.
    MissingField,
    /// Marks text is not an integer.
    NotANumber,
}

impl ValidationError {
    fn reason_code(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::NotANumber => "not_a_number",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField => write!(f, "missing field"),
            Self::NotANumber => write!(f, "not a number"),
        }
    }
}

impl Error for ValidationError {}

/// Service error for gradebook use-cases.
#[derive(Debug)]
pub enum ServiceError {
    Validation(ValidationError),
    /// Store write failed and the record was not added.
    Store(RepoError),
    /// No user has been set as active yet.
    NoActiveSession,
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "subject store failed: {err}"),
            Self::NoActiveSession => write!(f, "no active session"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::NoActiveSession => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Store(value)
    }
}

/// How a failed store append affects the in-memory session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteThroughPolicy {
    /// The record is only added to the session once the store accepted it.
    #[default]
    Atomic,
    /// The record is added to the session even when the store write failed;
    /// the failure is only logged.
    Legacy,
}

/// Result of a successful `add_record` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub subject: Subject,
    /// `false` only under `WriteThroughPolicy::Legacy` after a store failure.
    pub persisted: bool,
}

/// Validates raw form input into a subject name and marks.
///
/// The name is checked after trimming but returned untouched. Marks are
/// parsed without trimming, so `" 50"` is not a number.
pub fn parse_subject_input(
    subject_name_raw: &str,
    marks_raw: &str,
) -> Result<(String, i32), ValidationError> {
    if subject_name_raw.trim().is_empty() || marks_raw.trim().is_empty() {
        return Err(ValidationError::MissingField);
    }

    let marks = marks_raw
        .parse::<i32>()
        .map_err(|_| ValidationError::NotANumber)?;
    Ok((subject_name_raw.to_string(), marks))
}

/// Session aggregator over a subject store and a view.
pub struct GradebookService<R: SubjectRepository, V: SubjectView> {
    repo: R,
    view: V,
    policy: WriteThroughPolicy,
    session: Option<Session>,
}

impl<R: SubjectRepository, V: SubjectView> GradebookService<R, V> {
    /// Creates a service with no active session and the atomic policy.
    pub fn new(repo: R, view: V) -> Self {
        Self {
            repo,
            view,
            policy: WriteThroughPolicy::default(),
            session: None,
        }
    }

    pub fn with_policy(mut self, policy: WriteThroughPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> WriteThroughPolicy {
        self.policy
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Sets the active user and loads their subjects.
    pub fn set_logged_in_user(&mut self, username: impl Into<String>) -> &Session {
        self.start_session(username)
    }

    /// Starts (or restarts) a session for `owner`.
    ///
    /// A store failure is logged and degrades to an empty session.
    pub fn start_session(&mut self, owner: impl Into<String>) -> &Session {
        let mut session = Session::new(owner);
        self.view.clear_subjects();

        match self.repo.load_all(session.owner()) {
            Ok(subjects) => {
                for subject in &subjects {
                    self.view.render_subject(subject);
                }
                session.replace_subjects(subjects);
                info!(
                    "event=session_start module=service status=ok subjects={}",
                    session.len()
                );
            }
            Err(err) => {
                warn!(
                    "event=session_start module=service status=degraded subjects=0 error={}",
                    err
                );
            }
        }

        self.session.insert(session)
    }

    /// Validates and adds one subject for the active owner.
    ///
    /// # Errors
    /// - `Validation` when a field is blank or marks is not an integer.
    /// - `NoActiveSession` before `set_logged_in_user`.
    /// - `Store` when the append fails under the atomic policy.
    pub fn add_record(
        &mut self,
        subject_name_raw: &str,
        marks_raw: &str,
    ) -> ServiceResult<AddOutcome> {
        let (name, marks) = match parse_subject_input(subject_name_raw, marks_raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(
                    "event=subject_add module=service status=rejected reason={}",
                    err.reason_code()
                );
                return Err(err.into());
            }
        };

        let session = self.session.as_mut().ok_or(ServiceError::NoActiveSession)?;
        let persisted = match self.repo.append(session.owner(), &name, marks) {
            Ok(()) => true,
            Err(err) => match self.policy {
                WriteThroughPolicy::Atomic => return Err(err.into()),
                WriteThroughPolicy::Legacy => {
                    error!(
                        "event=subject_add module=service status=unpersisted policy=legacy error={}",
                        err
                    );
                    false
                }
            },
        };

        let subject = Subject::new(session.owner(), name, marks);
        session.push(subject.clone());
        self.view.render_subject(&subject);
        self.view.clear_inputs();
        info!(
            "event=subject_add module=service status=ok persisted={} subjects={}",
            persisted,
            session.len()
        );

        Ok(AddOutcome { subject, persisted })
    }

    /// Computes totals from the in-memory list and pushes them to the view.
    ///
    /// Without an active session this reports "no subjects".
    pub fn calculate_results(&mut self) -> GradeResults {
        let results = match &self.session {
            Some(session) => session.results(),
            None => GradeResults {
                total_marks: 0,
                total_subjects: 0,
                percentage: None,
            },
        };

        self.view
            .set_totals(&results.total_marks_text(), &results.percentage_text());
        results
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_subject_input, ValidationError};

    #[test]
    fn parse_rejects_blank_fields() {
        assert_eq!(
            parse_subject_input("", "50"),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            parse_subject_input("  ", "50"),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            parse_subject_input("Math", " \t"),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn parse_rejects_non_integer_marks() {
        for raw in ["abc", "7.5", "1e2", " 50", "50 ", "99999999999"] {
            assert_eq!(
                parse_subject_input("Math", raw),
                Err(ValidationError::NotANumber),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn parse_keeps_name_untrimmed_and_accepts_signed_marks() {
        assert_eq!(
            parse_subject_input(" Math ", "-12"),
            Ok((" Math ".to_string(), -12))
        );
        assert_eq!(parse_subject_input("Art", "+7"), Ok(("Art".to_string(), 7)));
    }

    #[test]
    fn validation_messages_are_stable() {
        assert_eq!(ValidationError::MissingField.to_string(), "missing field");
        assert_eq!(ValidationError::NotANumber.to_string(), "not a number");
    }
}
