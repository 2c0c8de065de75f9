//! Database handle
//!
//! Explicitly constructed and passed to the store. Every operation acquires
//! its own connection through [`Database::connect`]; the connection is
//! closed when it goes out of scope, on success and failure alike.
//!
//! In-memory databases use a named shared-cache URI so separate connections
//! see the same data. An anchor connection is held for the handle's lifetime
//! because SQLite discards a shared in-memory database once its last
//! connection closes.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};

/// Path value that selects an in-memory database
pub const MEMORY_PATH: &str = ":memory:";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS terms (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        description TEXT NOT NULL,
        rendering_type TEXT NOT NULL,
        frameworks TEXT NOT NULL,
        use_cases TEXT NOT NULL,
        advantages TEXT NOT NULL,
        disadvantages TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS ix_terms_name ON terms (name);
";

#[derive(Debug, Clone)]
enum Target {
    File(PathBuf),
    Memory(String),
}

/// Handle to the glossary database
#[derive(Debug)]
pub struct Database {
    target: Target,
    _anchor: Option<Mutex<Connection>>,
}

impl Database {
    /// Opens (creating if needed) an on-disk database and ensures the schema
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if path.as_os_str() == MEMORY_PATH {
            return Self::open_in_memory();
        }

        let db = Self {
            target: Target::File(path.to_path_buf()),
            _anchor: None,
        };
        db.connect()?.execute_batch(SCHEMA)?;
        Ok(db)
    }

    /// Opens a private in-memory database
    pub fn open_in_memory() -> StoreResult<Self> {
        let uri = format!("file:glossary-{}?mode=memory&cache=shared", Uuid::new_v4());
        let target = Target::Memory(uri);
        let anchor = open_connection(&target)?;
        anchor.execute_batch(SCHEMA)?;

        Ok(Self {
            target,
            _anchor: Some(Mutex::new(anchor)),
        })
    }

    /// Acquires a connection scoped to one operation
    pub fn connect(&self) -> StoreResult<Connection> {
        open_connection(&self.target)
    }

    /// Human-readable location of the database
    pub fn location(&self) -> String {
        match &self.target {
            Target::File(path) => path.display().to_string(),
            Target::Memory(_) => MEMORY_PATH.to_string(),
        }
    }
}

fn open_connection(target: &Target) -> StoreResult<Connection> {
    let (conn, location) = match target {
        Target::File(path) => (Connection::open(path), path.display().to_string()),
        Target::Memory(uri) => (
            Connection::open_with_flags(
                uri,
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_CREATE
                    | OpenFlags::SQLITE_OPEN_URI,
            ),
            uri.clone(),
        ),
    };

    let conn = conn.map_err(|source| StoreError::Open {
        path: location,
        source,
    })?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
}
