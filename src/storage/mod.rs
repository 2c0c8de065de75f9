//! Term storage
//!
//! One SQLite table, `terms`, holds every glossary entry. The four list
//! attributes are stored as JSON text and only decoded at this boundary.
//!
//! # Design Principles
//!
//! - The database handle is constructed explicitly and owned by the store
//! - One connection per operation, released on every exit path
//! - Concurrency control is left to SQLite's own transactions
//! - Name uniqueness is backed by a UNIQUE constraint

mod database;
mod errors;
mod record;
mod term_store;

pub use database::{Database, MEMORY_PATH};
pub use errors::{StoreError, StoreResult};
pub use term_store::TermStore;
