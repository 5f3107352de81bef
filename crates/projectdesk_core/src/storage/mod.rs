//! Persistent key-value storage boundary.
//!
//! # Responsibility
//! - Define the storage contract the state store persists through.
//! - Provide an in-memory backend and a SQLite-backed durable backend.
//!
//! # Invariants
//! - `set` overwrites any prior value for the key (last writer wins).
//! - Backends never interpret the stored value; it is an opaque string.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod sqlite;

pub use sqlite::{open_store_db, open_store_db_in_memory, SqliteStorage};

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure raised by a storage backend.
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

/// String-keyed persistent storage, shaped after the browser localStorage
/// contract the original snapshot was written against.
pub trait StateStorage {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// Process-local storage backend. Backs tests and the degraded in-memory
/// mode the store falls into when durable writes fail.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStorage, StateStorage};

    #[test]
    fn memory_storage_get_absent_key_returns_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("missing").unwrap(), None);
    }

    #[test]
    fn memory_storage_set_overwrites_prior_value() {
        let mut storage = MemoryStorage::new();
        storage.set("state", "first").unwrap();
        storage.set("state", "second").unwrap();
        assert_eq!(storage.get("state").unwrap().as_deref(), Some("second"));
    }
}
