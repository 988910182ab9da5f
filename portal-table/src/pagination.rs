//! Page window arithmetic and the allowed page-size set.

use serde::Deserialize;
use serde::Serialize;

/// Rows per page when nothing else is configured.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Page sizes offered when the caller does not declare its own.
pub const DEFAULT_PAGE_SIZES: [usize; 5] = [5, 10, 25, 50, 100];

/// The current page window.
///
/// `current_page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page, starting at 1.
    pub current_page: usize,
    /// Number of rows per page.
    pub items_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Number of pages needed for `total_items` rows.
    ///
    /// Zero rows means zero pages, not one empty page.
    pub fn total_pages(&self, total_items: usize) -> usize {
        if self.items_per_page == 0 {
            return 0;
        }
        total_items.div_ceil(self.items_per_page)
    }

    /// Clamps `page` into `[1, max(total_pages, 1)]`.
    pub fn clamp_page(&self, page: usize, total_items: usize) -> usize {
        page.clamp(1, self.total_pages(total_items).max(1))
    }

    /// Start (inclusive) and end (exclusive) indices of the current page
    /// within a collection of `len` rows.
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.items_per_page)
            .min(len);
        let end = start.saturating_add(self.items_per_page).min(len);
        (start, end)
    }

    pub fn can_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_next_page(&self, total_items: usize) -> bool {
        self.current_page < self.total_pages(total_items)
    }
}

/// Stored form of the page-size preference: `{"itemsPerPage": n}`.
///
/// Only the page size round-trips; a stored `currentPage` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPagination {
    pub items_per_page: usize,
}

/// The discrete set of page sizes a table accepts.
///
/// Sizes are kept sorted and unique; zero is never a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizes(Vec<usize>);

impl Default for PageSizes {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZES.to_vec())
    }
}

impl PageSizes {
    /// Creates a set from the given sizes, dropping zeros and duplicates.
    pub fn new(sizes: impl IntoIterator<Item = usize>) -> Self {
        let mut sizes: Vec<usize> = sizes.into_iter().filter(|&s| s > 0).collect();
        sizes.sort_unstable();
        sizes.dedup();
        Self(sizes)
    }

    /// Returns `true` if `size` is an allowed page size.
    pub fn contains(&self, size: usize) -> bool {
        self.0.binary_search(&size).is_ok()
    }

    /// Adds a size to the set. Zero is ignored.
    pub fn insert(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        if let Err(pos) = self.0.binary_search(&size) {
            self.0.insert(pos, size);
        }
    }

    /// The allowed sizes in ascending order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(current_page: usize, items_per_page: usize) -> Pagination {
        Pagination {
            current_page,
            items_per_page,
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(window(1, 10).total_pages(0), 0);
        assert_eq!(window(1, 10).total_pages(1), 1);
        assert_eq!(window(1, 10).total_pages(10), 1);
        assert_eq!(window(1, 10).total_pages(11), 2);
        assert_eq!(window(1, 0).total_pages(11), 0);
    }

    #[test]
    fn test_clamp_page() {
        let p = window(1, 10);
        assert_eq!(p.clamp_page(0, 35), 1);
        assert_eq!(p.clamp_page(9, 35), 4);
        assert_eq!(p.clamp_page(3, 35), 3);
        assert_eq!(p.clamp_page(7, 0), 1);
    }

    #[test]
    fn test_slice_bounds() {
        assert_eq!(window(1, 10).slice_bounds(25), (0, 10));
        assert_eq!(window(3, 10).slice_bounds(25), (20, 25));
        assert_eq!(window(4, 10).slice_bounds(25), (25, 25));
        assert_eq!(window(1, 10).slice_bounds(0), (0, 0));
    }

    #[test]
    fn test_navigation_flags() {
        assert!(!window(1, 10).can_previous_page());
        assert!(window(2, 10).can_previous_page());
        assert!(window(1, 10).can_next_page(11));
        assert!(!window(2, 10).can_next_page(11));
        assert!(!window(1, 10).can_next_page(0));
    }

    #[test]
    fn test_page_sizes_normalized() {
        let sizes = PageSizes::new([50, 0, 10, 10, 25]);
        assert_eq!(sizes.as_slice(), &[10, 25, 50]);
        assert!(sizes.contains(25));
        assert!(!sizes.contains(0));
    }

    #[test]
    fn test_page_sizes_insert() {
        let mut sizes = PageSizes::default();
        sizes.insert(2);
        sizes.insert(10);
        sizes.insert(0);
        assert_eq!(sizes.as_slice(), &[2, 5, 10, 25, 50, 100]);
    }

    #[test]
    fn test_stored_pagination_format() {
        let json = serde_json::to_string(&StoredPagination { items_per_page: 25 }).unwrap();
        assert_eq!(json, r#"{"itemsPerPage":25}"#);

        let legacy: StoredPagination =
            serde_json::from_str(r#"{"currentPage":3,"itemsPerPage":50}"#).unwrap();
        assert_eq!(legacy.items_per_page, 50);
    }
}
