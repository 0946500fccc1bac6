//! Key-value storage boundary.
//!
//! # Responsibility
//! - Define the persistence seam the note store writes through.
//! - Provide a durable SQLite implementation and an in-memory one.
//!
//! # Invariants
//! - Writes are synchronous and full-value; last write wins.
//! - A key holds at most one text value.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryKeyValueStorage;
pub use sqlite::SqliteKeyValueStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer error for key-value read/write operations.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Persistence seam for serialized application state.
///
/// Models a browser-style local key-value store: text keys, text values,
/// synchronous access, no transactions across keys.
pub trait KeyValueStorage {
    /// Reads the value stored under `key`, if any.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
    /// Removes the value stored under `key`. Missing keys are a no-op.
    fn remove(&self, key: &str) -> StorageResult<()>;
}
