//! Namespaced view preferences for one kind of table.

use log::warn;

use crate::pagination::StoredPagination;
use crate::sort::SortConfig;
use crate::store::PreferenceError;
use crate::store::PreferenceProvider;

/// Persisted sort and page-size preferences under a namespace.
///
/// Two entries are kept per namespace: `<namespace>_sort` holding the
/// [`SortConfig`] and `<namespace>_pagination` holding
/// `{"itemsPerPage": n}`. The `try_*` methods report storage failures; the
/// plain methods log them and carry on, which is what the table view uses.
///
/// # Example
///
/// ```
/// use portal_table::store::{MemoryStore, PreferenceProvider};
/// use portal_table::{SortConfig, TablePreferences};
///
/// let prefs = TablePreferences::new("events", PreferenceProvider::new(MemoryStore::new()));
/// prefs.save(Some(&SortConfig::desc("starts_at")), 25);
///
/// assert_eq!(prefs.sort_key(), "events_sort");
/// assert_eq!(prefs.load_sort(), Some(SortConfig::desc("starts_at")));
/// assert_eq!(prefs.load_items_per_page(), Some(25));
/// ```
#[derive(Debug, Clone)]
pub struct TablePreferences {
    namespace: String,
    provider: PreferenceProvider,
}

impl TablePreferences {
    pub fn new(namespace: impl Into<String>, provider: PreferenceProvider) -> Self {
        Self {
            namespace: namespace.into(),
            provider,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Storage key of the sort entry.
    pub fn sort_key(&self) -> String {
        format!("{}_sort", self.namespace)
    }

    /// Storage key of the page-size entry.
    pub fn pagination_key(&self) -> String {
        format!("{}_pagination", self.namespace)
    }

    pub fn try_load_sort(&self) -> Result<Option<SortConfig>, PreferenceError> {
        self.provider.get(&self.sort_key())
    }

    pub fn try_load_items_per_page(&self) -> Result<Option<usize>, PreferenceError> {
        Ok(self
            .provider
            .get::<StoredPagination>(&self.pagination_key())?
            .map(|stored| stored.items_per_page))
    }

    /// Write both entries. A `None` sort removes the sort entry.
    pub fn try_save(
        &self,
        sort: Option<&SortConfig>,
        items_per_page: usize,
    ) -> Result<(), PreferenceError> {
        match sort {
            Some(sort) => self.provider.set(&self.sort_key(), sort)?,
            None => self.provider.delete(&self.sort_key())?,
        }
        self.provider
            .set(&self.pagination_key(), &StoredPagination { items_per_page })
    }

    /// Remove both entries.
    pub fn try_clear(&self) -> Result<(), PreferenceError> {
        self.provider.delete(&self.sort_key())?;
        self.provider.delete(&self.pagination_key())
    }

    /// Stored sort, or `None` if absent or unreadable.
    pub fn load_sort(&self) -> Option<SortConfig> {
        self.try_load_sort().unwrap_or_else(|e| {
            warn!("Ignoring stored sort for '{}': {}", self.namespace, e);
            None
        })
    }

    /// Stored page size, or `None` if absent or unreadable.
    pub fn load_items_per_page(&self) -> Option<usize> {
        self.try_load_items_per_page().unwrap_or_else(|e| {
            warn!("Ignoring stored page size for '{}': {}", self.namespace, e);
            None
        })
    }

    /// Best-effort [`try_save`](Self::try_save).
    pub fn save(&self, sort: Option<&SortConfig>, items_per_page: usize) {
        if let Err(e) = self.try_save(sort, items_per_page) {
            warn!("Failed to persist preferences for '{}': {}", self.namespace, e);
        }
    }

    /// Best-effort [`try_clear`](Self::try_clear).
    pub fn clear(&self) {
        if let Err(e) = self.try_clear() {
            warn!("Failed to clear preferences for '{}': {}", self.namespace, e);
        }
    }
}
