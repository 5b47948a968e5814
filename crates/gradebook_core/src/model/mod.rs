//! Domain model for per-user gradebook records.
//!
//! # Responsibility
//! - Define the immutable subject record persisted by the store.
//! - Define the in-memory session view aggregated by the service layer.
//!
//! # Invariants
//! - Records are never edited or removed once created.
//! - A session only ever holds records of its own owner.

pub mod session;
pub mod subject;
