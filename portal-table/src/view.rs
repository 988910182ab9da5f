//! The table view: sorted, paginated projection of a row collection.

use log::{debug, trace, warn};

use crate::column::{Column, find_column};
use crate::config::TableConfig;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, PageSizes, Pagination};
use crate::prefs::TablePreferences;
use crate::sort::{SortConfig, sorted_indices};

/// A sorted, paginated view over an in-memory collection.
///
/// `TableView<T>` owns the rows and their column descriptors and keeps:
/// - At most one active sort (toggled per column)
/// - A 1-based page window whose size comes from a declared set
/// - Optional persistence of sort and page size under a namespace
///
/// The current page is never persisted; every view starts on its configured
/// initial page. Stored preferences are read once, inside [`TableView::new`],
/// so the first projection already reflects them.
///
/// # Example
///
/// ```
/// use portal_table::{Column, SortDirection, TableConfig, TableView};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Suggestion {
///     id: u32,
///     title: &'static str,
///     votes: i64,
/// }
///
/// let rows = vec![
///     Suggestion { id: 1, title: "Standing desks", votes: 14 },
///     Suggestion { id: 2, title: "Bike racks", votes: 31 },
///     Suggestion { id: 3, title: "Quiet room", votes: 9 },
/// ];
/// let columns = vec![
///     Column::new("title", |s: &Suggestion| s.title.into()).sortable(),
///     Column::new("votes", |s: &Suggestion| s.votes.into()).sortable(),
/// ];
///
/// let mut view = TableView::new(columns, rows, TableConfig::new().with_items_per_page(2));
/// view.handle_sort("votes");
/// view.handle_sort("votes");
///
/// assert_eq!(view.sort_config().map(|s| s.direction), Some(SortDirection::Descending));
/// let ids: Vec<u32> = view.paginated_data().iter().map(|s| s.id).collect();
/// assert_eq!(ids, vec![2, 1]);
/// assert_eq!(view.total_pages(), 2);
/// assert!(view.can_next_page());
/// ```
#[derive(Debug)]
pub struct TableView<T> {
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    /// Display order as indices into `rows`.
    order: Vec<usize>,
    sort: Option<SortConfig>,
    pagination: Pagination,
    page_sizes: PageSizes,
    preferences: Option<TablePreferences>,
}

/// A borrowed snapshot of everything needed to draw one page.
#[derive(Debug)]
pub struct TablePage<'a, T> {
    /// Rows of the current page, in display order.
    pub rows: Vec<&'a T>,
    /// Active sort.
    pub sort: Option<&'a SortConfig>,
    /// Current page window.
    pub pagination: Pagination,
    /// Number of pages (0 when there are no rows).
    pub total_pages: usize,
    /// Number of rows across all pages.
    pub total_items: usize,
    pub can_previous_page: bool,
    pub can_next_page: bool,
}

impl<T> TableView<T> {
    /// Create a view over `rows`.
    ///
    /// Resolution order for the page size: configured value (default 10),
    /// then a stored value if it is one of the allowed sizes. For the sort:
    /// configured initial sort, then a stored sort. Storage failures are
    /// logged and the configured values kept.
    pub fn new(columns: Vec<Column<T>>, rows: Vec<T>, config: TableConfig) -> Self {
        let TableConfig {
            initial_sort,
            initial_page,
            items_per_page,
            mut page_sizes,
            preferences,
        } = config;

        let mut items_per_page = items_per_page
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE);
        page_sizes.insert(items_per_page);

        let mut sort = initial_sort;
        if let Some(prefs) = &preferences {
            if let Some(stored) = prefs.load_items_per_page() {
                if page_sizes.contains(stored) {
                    items_per_page = stored;
                } else {
                    warn!(
                        "Ignoring stored page size {} for '{}': not an allowed size",
                        stored,
                        prefs.namespace()
                    );
                }
            }
            if let Some(stored) = prefs.load_sort() {
                sort = Some(stored);
            }
        }

        let mut view = Self {
            columns,
            rows,
            order: Vec::new(),
            sort,
            pagination: Pagination {
                current_page: initial_page.unwrap_or(1),
                items_per_page,
            },
            page_sizes,
            preferences,
        };
        view.apply_sort();
        view.pagination.current_page = view
            .pagination
            .clamp_page(view.pagination.current_page, view.rows.len());
        view
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// The column descriptors.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Find a column by key.
    pub fn column(&self, key: &str) -> Option<&Column<T>> {
        find_column(&self.columns, key)
    }

    /// The rows in their original (unsorted) order.
    pub fn data(&self) -> &[T] {
        &self.rows
    }

    /// Replace the rows, e.g. after the page re-filters its data.
    ///
    /// The active sort is re-applied and the view returns to page 1.
    pub fn set_data(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.apply_sort();
        self.pagination.current_page = 1;
    }

    /// All rows in display order.
    pub fn sorted_data(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().map(move |&i| &self.rows[i])
    }

    /// Rows of the current page, in display order.
    pub fn paginated_data(&self) -> Vec<&T> {
        let (start, end) = self.pagination.slice_bounds(self.order.len());
        self.order[start..end].iter().map(|&i| &self.rows[i]).collect()
    }

    /// Snapshot of the current page and its navigation metadata.
    pub fn page(&self) -> TablePage<'_, T> {
        TablePage {
            rows: self.paginated_data(),
            sort: self.sort.as_ref(),
            pagination: self.pagination,
            total_pages: self.total_pages(),
            total_items: self.total_items(),
            can_previous_page: self.can_previous_page(),
            can_next_page: self.can_next_page(),
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get current sort state.
    pub fn sort_config(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    /// Toggle sort for a column.
    ///
    /// If the column is sorted ascending, it flips to descending. Otherwise
    /// it sorts ascending. Always returns to page 1.
    pub fn handle_sort(&mut self, key: &str) {
        if let Some(column) = self.column(key)
            && !column.is_sortable()
        {
            debug!("Sorting by '{}', which is not flagged sortable", key);
        }

        let next = SortConfig::toggled(self.sort.as_ref(), key);
        self.set_sort(Some(next));
    }

    /// Apply an explicit sort, or `None` for input order.
    ///
    /// Returns to page 1 and persists the change.
    pub fn set_sort(&mut self, sort: Option<SortConfig>) {
        debug!("Table sort -> {:?}", sort);
        self.sort = sort;
        self.pagination.current_page = 1;
        self.apply_sort();
        self.persist();
    }

    /// Clear sort state. The stored sort entry is removed.
    pub fn clear_sort(&mut self) {
        self.set_sort(None);
    }

    fn apply_sort(&mut self) {
        self.order = match &self.sort {
            Some(sort) => sorted_indices(
                &self.rows,
                find_column(&self.columns, &sort.key),
                sort.direction,
            ),
            None => (0..self.rows.len()).collect(),
        };
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Current page window.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.pagination.items_per_page
    }

    /// Allowed rows-per-page values.
    pub fn page_sizes(&self) -> &PageSizes {
        &self.page_sizes
    }

    /// Number of rows across all pages.
    pub fn total_items(&self) -> usize {
        self.order.len()
    }

    /// Number of pages; 0 when there are no rows.
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.total_items())
    }

    pub fn can_previous_page(&self) -> bool {
        self.pagination.can_previous_page()
    }

    pub fn can_next_page(&self) -> bool {
        self.pagination.can_next_page(self.total_items())
    }

    /// Go to `page`, clamped into `[1, max(total_pages, 1)]`.
    pub fn handle_page_change(&mut self, page: usize) {
        let page = self.pagination.clamp_page(page, self.total_items());
        trace!("Table page {} -> {}", self.pagination.current_page, page);
        self.pagination.current_page = page;
    }

    pub fn next_page(&mut self) {
        self.handle_page_change(self.pagination.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.handle_page_change(self.pagination.current_page.saturating_sub(1));
    }

    /// Change rows per page and return to page 1.
    ///
    /// Sizes outside the allowed set are ignored and `false` is returned.
    pub fn handle_items_per_page_change(&mut self, size: usize) -> bool {
        if !self.page_sizes.contains(size) {
            warn!(
                "Rejected page size {}; allowed sizes are {:?}",
                size,
                self.page_sizes.as_slice()
            );
            return false;
        }

        debug!("Table page size {} -> {}", self.pagination.items_per_page, size);
        self.pagination.items_per_page = size;
        self.pagination.current_page = 1;
        self.persist();
        true
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    /// The preferences this view persists to, if any.
    pub fn preferences(&self) -> Option<&TablePreferences> {
        self.preferences.as_ref()
    }

    /// Forget the stored preferences. Live state is left as is.
    pub fn reset_preferences(&self) {
        if let Some(prefs) = &self.preferences {
            prefs.clear();
        }
    }

    fn persist(&self) {
        if let Some(prefs) = &self.preferences {
            prefs.save(self.sort.as_ref(), self.pagination.items_per_page);
        }
    }
}
