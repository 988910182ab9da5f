//! Table view configuration

use crate::pagination::PageSizes;
use crate::prefs::TablePreferences;
use crate::sort::SortConfig;

/// Construction-time settings for a [`TableView`](crate::TableView).
///
/// Unset fields fall back to page 1, 10 rows per page, the default page-size
/// set, no sort and no persistence.
///
/// # Example
///
/// ```
/// use portal_table::store::{MemoryStore, PreferenceProvider};
/// use portal_table::{PageSizes, SortConfig, TableConfig, TablePreferences};
///
/// let provider = PreferenceProvider::new(MemoryStore::new());
/// let config = TableConfig::default()
///     .with_initial_sort(SortConfig::asc("title"))
///     .with_items_per_page(20)
///     .with_page_sizes(PageSizes::new([10, 20, 50]))
///     .with_preferences(TablePreferences::new("policies", provider));
///
/// assert_eq!(config.items_per_page, Some(20));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableConfig {
    /// Sort to apply when nothing is persisted.
    pub initial_sort: Option<SortConfig>,

    /// Page to open on. Clamped against the data.
    ///
    /// Default: 1
    pub initial_page: Option<usize>,

    /// Rows per page. Added to `page_sizes` if it is not already a member.
    ///
    /// Default: 10
    pub items_per_page: Option<usize>,

    /// Allowed rows-per-page values.
    pub page_sizes: PageSizes,

    /// Where to persist sort and page size. `None` keeps state in memory.
    pub preferences: Option<TablePreferences>,
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial sort.
    pub fn with_initial_sort(mut self, sort: SortConfig) -> Self {
        self.initial_sort = Some(sort);
        self
    }

    /// Sets the initial page.
    pub fn with_initial_page(mut self, page: usize) -> Self {
        self.initial_page = Some(page);
        self
    }

    /// Sets the initial rows per page.
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = Some(items_per_page);
        self
    }

    /// Sets the allowed page sizes.
    pub fn with_page_sizes(mut self, page_sizes: PageSizes) -> Self {
        self.page_sizes = page_sizes;
        self
    }

    /// Enables persistence under the given preferences.
    pub fn with_preferences(mut self, preferences: TablePreferences) -> Self {
        self.preferences = Some(preferences);
        self
    }
}
