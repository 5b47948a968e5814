//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the append/read-all contract of the subject store.
//! - Isolate SQLite query details from session orchestration.
//!
//! # Invariants
//! - Repository APIs never mutate or delete existing rows.
//! - An owner without rows is an empty result, never an error.

pub mod subject_repo;
