//! Client-side table engine for the portal's list pages.
//!
//! Events, policies, FAQs, suggestions and announcements are all shown in
//! tables that sort by a column, page through results and remember the
//! user's sort and page size between sessions. This crate holds that shared
//! behaviour:
//!
//! - [`Column`]: how to extract, render and (optionally) sort one column
//! - [`TableView`]: the sorted, paginated projection and its mutators
//! - [`TablePreferences`]: the two persisted preference entries per namespace
//! - [`store`]: the injectable key-value store those preferences live in
//!
//! # Example
//!
//! ```
//! use portal_table::store::{MemoryStore, PreferenceProvider};
//! use portal_table::{Column, SortConfig, TableConfig, TablePreferences, TableView};
//!
//! #[derive(Clone)]
//! struct Policy {
//!     title: String,
//! }
//!
//! let provider = PreferenceProvider::new(MemoryStore::new());
//! let columns = || vec![Column::new("title", |p: &Policy| p.title.clone().into()).sortable()];
//! let rows = vec![
//!     Policy { title: "Travel".into() },
//!     Policy { title: "Expenses".into() },
//! ];
//!
//! let config = || {
//!     TableConfig::new().with_preferences(TablePreferences::new("policies", provider.clone()))
//! };
//!
//! let mut view = TableView::new(columns(), rows.clone(), config());
//! view.handle_sort("title");
//!
//! // A fresh view with the same namespace picks the sort back up.
//! let view = TableView::new(columns(), rows, config());
//! assert_eq!(view.sort_config(), Some(&SortConfig::asc("title")));
//! assert_eq!(view.paginated_data()[0].title, "Expenses");
//! ```

pub mod column;
pub mod config;
pub mod pagination;
pub mod prefs;
pub mod sort;
pub mod store;
pub mod value;
pub mod view;

pub use column::Column;
pub use config::TableConfig;
pub use pagination::{PageSizes, Pagination};
pub use prefs::TablePreferences;
pub use sort::{SortConfig, SortDirection};
pub use value::{CellValue, natural_cmp};
pub use view::{TablePage, TableView};
