//! Scoped connection acquisition for store calls.
//!
//! # Responsibility
//! - Hand out one fully bootstrapped connection per store operation.
//!
//! # Invariants
//! - The caller owns the returned connection; dropping it releases the
//!   underlying handle on every exit path, success or failure.

use super::{open_db, DbResult};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Source of short-lived SQLite connections.
///
/// Implementations may pool internally as long as each `acquire` hands back
/// a connection the caller can drop when its statement is done.
pub trait ConnectionProvider {
    fn acquire(&self) -> DbResult<Connection>;
}

/// Opens the database file anew on every `acquire`.
#[derive(Debug, Clone)]
pub struct FileConnectionProvider {
    path: PathBuf,
}

impl FileConnectionProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConnectionProvider for FileConnectionProvider {
    fn acquire(&self) -> DbResult<Connection> {
        open_db(&self.path)
    }
}

impl<P: ConnectionProvider + ?Sized> ConnectionProvider for &P {
    fn acquire(&self) -> DbResult<Connection> {
        (**self).acquire()
    }
}
