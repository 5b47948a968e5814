//! Core domain logic for the gradebook.
//! Owns the per-user subject store and the session aggregation rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{ConnectionProvider, DbError, DbResult, FileConnectionProvider};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::session::{GradeResults, Session, NO_SUBJECTS_TEXT};
pub use model::subject::{Subject, SubjectValidationError};
pub use repo::subject_repo::{RepoError, RepoResult, SqliteSubjectRepository, SubjectRepository};
pub use service::gradebook_service::{
    parse_subject_input, AddOutcome, GradebookService, ServiceError, ServiceResult,
    ValidationError, WriteThroughPolicy,
};
pub use service::view::{RecordingView, SubjectView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
