//! Preference store trait.

use super::PreferenceError;

/// Backend trait for preference storage.
///
/// Implementations handle raw byte storage/retrieval.
/// The `PreferenceProvider` wraps this with typed JSON serialization.
pub trait PreferenceStore: Send + Sync {
    /// Get raw bytes for a key.
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, PreferenceError>;

    /// Set raw bytes for a key.
    fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), PreferenceError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), PreferenceError>;

    /// Get all keys matching a prefix.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, PreferenceError>;
}
