//! Key-value store adapter
//!
//! All persisted state lives under four independent string keys, each
//! holding one JSON document. The store is an explicit dependency injected
//! into every repository, never an ambient global. There are no
//! transactions and no atomicity across keys; the system assumes a single
//! synchronous caller.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::DomainError;

/// JSON array of Book
pub const BOOKS_KEY: &str = "library_books";
/// JSON array of User
pub const USERS_KEY: &str = "library_users";
/// JSON array of Rental
pub const RENTALS_KEY: &str = "library_rentals";
/// The current-session User, absent when logged out
pub const SESSION_KEY: &str = "library_user";

/// Minimal persistence contract: JSON text per string key.
///
/// Methods take `&self` so implementations can use interior mutability.
pub trait KeyValueStore: Send + Sync {
    /// Stored JSON text, or `None` when the key is absent
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Insert or overwrite the value for `key`
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Remove the entry; succeeds even when the key is absent
    fn remove(&self, key: &str) -> Result<(), DomainError>;

    fn contains(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Read and deserialize one entry. A corrupted entry is logged and treated
/// as absent so the caller can fall back to seed data or an empty
/// collection.
pub fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, DomainError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!("Ignoring corrupted entry '{}': {}", key, e);
            Ok(None)
        }
    }
}

/// Serialize and write one entry
pub fn write_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), DomainError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// File-per-key store rooted at a data directory. Persists across runs on
/// the same machine; invisible anywhere else.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open (creating if needed) the data directory
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DomainError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store, the test double for repository and service tests
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, DomainError> {
        self.entries
            .lock()
            .map_err(|_| DomainError::Storage("store mutex poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DomainError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());
        assert!(!store.contains("k").unwrap());

        store.set("k", "[1,2,3]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[1,2,3]"));
        assert!(store.contains("k").unwrap());

        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
        // Removing an absent key is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("libraryflow-test-{}", Uuid::new_v4()));
        let store = JsonFileStore::open(&dir).unwrap();

        assert!(store.get(BOOKS_KEY).unwrap().is_none());
        store.set(BOOKS_KEY, "[]").unwrap();
        assert_eq!(store.get(BOOKS_KEY).unwrap().as_deref(), Some("[]"));

        // A second store over the same directory sees the same data
        let reopened = JsonFileStore::open(&dir).unwrap();
        assert_eq!(reopened.get(BOOKS_KEY).unwrap().as_deref(), Some("[]"));

        store.remove(BOOKS_KEY).unwrap();
        assert!(store.get(BOOKS_KEY).unwrap().is_none());
        store.remove(BOOKS_KEY).unwrap();

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn read_json_treats_corrupted_entry_as_absent() {
        let store = MemoryStore::new();
        store.set(USERS_KEY, "not json at all").unwrap();
        let users: Option<Vec<crate::models::User>> = read_json(&store, USERS_KEY).unwrap();
        assert!(users.is_none());
    }

    #[test]
    fn write_json_then_read_json() {
        let store = MemoryStore::new();
        write_json(&store, RENTALS_KEY, &Vec::<crate::models::Rental>::new()).unwrap();
        let rentals: Option<Vec<crate::models::Rental>> =
            read_json(&store, RENTALS_KEY).unwrap();
        assert_eq!(rentals.unwrap().len(), 0);
    }
}
