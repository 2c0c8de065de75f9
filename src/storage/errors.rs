//! # Storage Errors
//!
//! Failures raised by the term store and the database handle.

use thiserror::Error;

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be opened
    #[error("Failed to open database at {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A unique key already exists
    #[error("Term '{0}' already exists")]
    Conflict(String),

    /// A persisted row could not be decoded into a term
    #[error("Corrupt row {id}: {reason}")]
    Corrupt { id: i64, reason: String },

    /// A list attribute could not be encoded or decoded
    #[error("List column codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// Any other engine failure
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    /// Whether the engine rejected a write because of a UNIQUE constraint
    pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
        matches!(
            err,
            rusqlite::Error::SqliteFailure(e, _)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        )
    }
}
