//! Typed key-value storage for view preferences.
//!
//! Stands in for browser local storage: string keys, JSON values, and an
//! injectable backend so tests can swap in memory or fail on purpose.

mod backend;
mod memory;
mod sqlite;

pub use backend::PreferenceStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Preference storage error type.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),
    #[error("deserialization error: {0}")]
    Deserialization(serde_json::Error),
    #[error("quota exceeded writing {key}: {size} bytes over a {quota} byte quota")]
    QuotaExceeded {
        key: String,
        size: usize,
        quota: usize,
    },
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Typed preference provider.
///
/// Wraps a `PreferenceStore` with typed serialization via serde_json.
///
/// # Example
///
/// ```
/// use portal_table::store::{MemoryStore, PreferenceProvider};
///
/// let prefs = PreferenceProvider::new(MemoryStore::new());
/// prefs.set("theme", &"dark").unwrap();
/// assert_eq!(prefs.get::<String>("theme").unwrap().as_deref(), Some("dark"));
/// assert_eq!(prefs.get_or("missing", 7u32).unwrap(), 7);
/// ```
#[derive(Clone)]
pub struct PreferenceProvider {
    backend: Arc<dyn PreferenceStore>,
}

impl PreferenceProvider {
    /// Create a new preference provider with the given backend.
    pub fn new(backend: impl PreferenceStore + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Create a provider over an already shared backend.
    pub fn from_shared(backend: Arc<dyn PreferenceStore>) -> Self {
        Self { backend }
    }

    /// Get a typed value for a key.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PreferenceError> {
        match self.backend.get_bytes(key)? {
            Some(bytes) => Ok(Some(
                serde_json::from_slice(&bytes).map_err(PreferenceError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Get a typed value for a key, returning a default if not found.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, PreferenceError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Set a typed value for a key.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), PreferenceError> {
        let bytes = serde_json::to_vec(value).map_err(PreferenceError::Serialization)?;
        self.backend.set_bytes(key, bytes)
    }

    /// Delete a key.
    pub fn delete(&self, key: &str) -> Result<(), PreferenceError> {
        self.backend.delete(key)
    }

    /// Get all keys matching a prefix.
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, PreferenceError> {
        self.backend.keys_with_prefix(prefix)
    }
}

impl fmt::Debug for PreferenceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceProvider").finish_non_exhaustive()
    }
}
