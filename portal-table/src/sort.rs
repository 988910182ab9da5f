//! Single-column sort state and the row comparator.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::column::Column;
use crate::value::CellValue;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The active sort: one column key and a direction.
///
/// Serializes as `{"key": "...", "direction": "ascending"}`.
///
/// # Example
///
/// ```
/// use portal_table::{SortConfig, SortDirection};
///
/// let first = SortConfig::toggled(None, "title");
/// assert_eq!(first, SortConfig::asc("title"));
///
/// let second = SortConfig::toggled(Some(&first), "title");
/// assert_eq!(second.direction, SortDirection::Descending);
///
/// let third = SortConfig::toggled(Some(&second), "title");
/// assert_eq!(third.direction, SortDirection::Ascending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Key of the sorted column.
    pub key: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortConfig {
    /// Creates an ascending sort on a column.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Creates a descending sort on a column.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }

    /// The sort that results from clicking `key` while `current` is active.
    ///
    /// The same column flips from ascending to descending; anything else
    /// (no sort, another column, or a descending sort) sorts ascending.
    pub fn toggled(current: Option<&SortConfig>, key: &str) -> Self {
        match current {
            Some(cfg) if cfg.key == key && cfg.direction == SortDirection::Ascending => {
                Self::desc(key)
            }
            _ => Self::asc(key),
        }
    }
}

/// Compares two cells for the given direction.
///
/// Null cells go last no matter the direction.
pub fn compare_cells(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = a.compare(b);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
    }
}

/// Computes the display order of `rows` as indices into the slice.
///
/// With no column (no sort, or a key that names no column) the input order
/// is kept. The sort is stable.
pub fn sorted_indices<T>(
    rows: &[T],
    column: Option<&Column<T>>,
    direction: SortDirection,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    let Some(column) = column else {
        return order;
    };

    // Each accessor runs once per row rather than once per comparison
    let values: Vec<CellValue> = rows.iter().map(|row| column.value(row)).collect();
    order.sort_by(|&a, &b| compare_cells(&values[a], &values[b], direction));
    order
}
