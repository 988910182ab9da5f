//! In-memory preference store using DashMap

use std::sync::Mutex;

use dashmap::DashMap;

use super::PreferenceError;
use super::PreferenceStore;

/// An in-memory preference store backed by a concurrent hash map.
///
/// Data is lost when the process exits. An optional byte quota mimics the
/// size limit of browser storage: a write that would push the total size of
/// keys plus values over the quota fails with
/// [`PreferenceError::QuotaExceeded`] and leaves the store unchanged.
/// Quota-checked writes are serialized so concurrent writers cannot jointly
/// overshoot it.
///
/// # Example
///
/// ```
/// use portal_table::store::{MemoryStore, PreferenceStore};
///
/// let store = MemoryStore::with_quota(16);
/// assert!(store.set_bytes("k", b"small".to_vec()).is_ok());
/// assert!(store.set_bytes("k2", vec![0; 64]).is_err());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    store: DashMap<String, Vec<u8>>,
    quota: Option<usize>,
    writes: Mutex<()>,
}

impl MemoryStore {
    /// Creates a new empty store with no quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty store that holds at most `quota` bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            store: DashMap::new(),
            quota: Some(quota),
            writes: Mutex::new(()),
        }
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Total bytes used by keys and values.
    pub fn used_bytes(&self) -> usize {
        self.used_bytes_except("")
    }

    /// Total bytes used by keys and values, excluding `skip_key`.
    fn used_bytes_except(&self, skip_key: &str) -> usize {
        self.store
            .iter()
            .filter(|entry| entry.key() != skip_key)
            .map(|entry| entry.key().len() + entry.value().len())
            .sum()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, PreferenceError> {
        Ok(self.store.get(key).map(|entry| entry.value().clone()))
    }

    fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), PreferenceError> {
        let Some(quota) = self.quota else {
            self.store.insert(key.to_string(), value);
            return Ok(());
        };

        let _guard = self.writes.lock().map_err(|_| PreferenceError::LockPoisoned)?;
        let size = self.used_bytes_except(key) + key.len() + value.len();
        if size > quota {
            return Err(PreferenceError::QuotaExceeded {
                key: key.to_string(),
                size,
                quota,
            });
        }
        self.store.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PreferenceError> {
        self.store.remove(key);
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, PreferenceError> {
        let mut keys: Vec<String> = self
            .store
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect();
        keys.sort();
        Ok(keys)
    }
}
