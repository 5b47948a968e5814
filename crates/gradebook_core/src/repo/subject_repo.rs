//! Subject repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Append subject rows and read back all rows of one owner.
//! - Acquire one connection per call and release it on every exit path.
//!
//! # Invariants
//! - Input non-emptiness is enforced by callers, not here.
//! - Read paths return every stored row; malformed rows are logged, not
//!   dropped.
//! - Rows come back in insertion order.

use crate::db::{ConnectionProvider, DbError};
use crate::model::subject::Subject;
use log::{debug, error, warn};
use rusqlite::params;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const SUBJECT_INSERT_SQL: &str =
    "INSERT INTO subjects (username, subject_name, marks) VALUES (?1, ?2, ?3);";
const SUBJECT_SELECT_BY_OWNER_SQL: &str =
    "SELECT subject_name, marks FROM subjects WHERE username = ?1 ORDER BY rowid ASC;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Store error for subject persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted subject data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the per-owner subject store.
pub trait SubjectRepository {
    /// Inserts one durable row.
    fn append(&self, owner: &str, subject_name: &str, marks: i32) -> RepoResult<()>;
    /// Returns every row of `owner`, oldest first.
    fn load_all(&self, owner: &str) -> RepoResult<Vec<Subject>>;
}

impl<R: SubjectRepository + ?Sized> SubjectRepository for &R {
    fn append(&self, owner: &str, subject_name: &str, marks: i32) -> RepoResult<()> {
        (**self).append(owner, subject_name, marks)
    }

    fn load_all(&self, owner: &str) -> RepoResult<Vec<Subject>> {
        (**self).load_all(owner)
    }
}

/// SQLite-backed subject repository.
pub struct SqliteSubjectRepository<P: ConnectionProvider> {
    provider: P,
}

impl<P: ConnectionProvider> SqliteSubjectRepository<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: ConnectionProvider> SubjectRepository for SqliteSubjectRepository<P> {
    fn append(&self, owner: &str, subject_name: &str, marks: i32) -> RepoResult<()> {
        let started_at = Instant::now();
        let result = insert_subject(&self.provider, owner, subject_name, marks);

        match &result {
            Ok(()) => debug!(
                "event=subject_append module=repo status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=subject_append module=repo status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }

        result
    }

    fn load_all(&self, owner: &str) -> RepoResult<Vec<Subject>> {
        let started_at = Instant::now();
        let result = select_subjects(&self.provider, owner);

        match &result {
            Ok(subjects) => debug!(
                "event=subject_load_all module=repo status=ok duration_ms={} rows={}",
                started_at.elapsed().as_millis(),
                subjects.len()
            ),
            Err(err) => error!(
                "event=subject_load_all module=repo status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }

        result
    }
}

fn insert_subject(
    provider: &impl ConnectionProvider,
    owner: &str,
    subject_name: &str,
    marks: i32,
) -> RepoResult<()> {
    let conn = provider.acquire()?;
    conn.execute(SUBJECT_INSERT_SQL, params![owner, subject_name, marks])?;
    Ok(())
}

fn select_subjects(provider: &impl ConnectionProvider, owner: &str) -> RepoResult<Vec<Subject>> {
    let conn = provider.acquire()?;
    let mut stmt = conn.prepare(SUBJECT_SELECT_BY_OWNER_SQL)?;
    let mut rows = stmt.query([owner])?;
    let mut subjects = Vec::new();
    let mut malformed_rows = 0usize;

    while let Some(row) = rows.next()? {
        let subject = Subject::new(
            owner,
            row.get::<_, String>("subject_name")?,
            row.get::<_, i32>("marks")?,
        );
        if subject.validate().is_err() {
            malformed_rows += 1;
        }
        subjects.push(subject);
    }

    if malformed_rows > 0 {
        warn!(
            "event=subject_load_all module=repo status=malformed_rows count={}",
            malformed_rows
        );
    }

    Ok(subjects)
}
