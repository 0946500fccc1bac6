//! In-memory key-value storage.
//!
//! # Responsibility
//! - Back tests and ephemeral sessions with a HashMap-based store.
//!
//! # Invariants
//! - Behavior matches `SqliteKeyValueStorage` for read/write/remove.
//! - Values do not survive the process.

use super::{KeyValueStorage, StorageResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// HashMap-backed storage with the same contract as the SQLite store.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl KeyValueStorage for MemoryKeyValueStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries().remove(key);
        Ok(())
    }
}
