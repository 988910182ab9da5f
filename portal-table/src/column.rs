//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use crate::value::CellValue;

type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
type Renderer<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Column configuration.
///
/// A column knows how to pull a [`CellValue`] out of a row, optionally how to
/// render that row's cell as text, whether it can be sorted, and a few
/// display hints for the rendering layer. The accessor is always explicit;
/// there is no lookup by field name.
///
/// # Examples
///
/// ```
/// use portal_table::{CellValue, Column};
///
/// struct Faq {
///     question: String,
///     views: i64,
/// }
///
/// let columns: Vec<Column<Faq>> = vec![
///     Column::new("question", |f: &Faq| f.question.clone().into())
///         .header("Question")
///         .sortable()
///         .min_width(30),
///     Column::new("views", |f: &Faq| f.views.into())
///         .header("Views")
///         .sortable()
///         .width(8),
///     Column::action("actions", |_: &Faq| "[edit]".to_string()),
/// ];
///
/// let faq = Faq { question: "Where is the VPN guide?".into(), views: 12 };
/// assert_eq!(columns[1].value(&faq), CellValue::Int(12));
/// assert_eq!(columns[2].render_cell(&faq), "[edit]");
/// assert!(!columns[2].is_sortable());
/// ```
pub struct Column<T> {
    key: String,
    header: String,
    accessor: Accessor<T>,
    renderer: Option<Renderer<T>>,
    sortable: bool,
    min_width: Option<u16>,
    width: Option<u16>,
    class_name: Option<String>,
}

impl<T> Column<T> {
    /// Create a column with a key and a value accessor.
    ///
    /// The header defaults to the key. Columns are not sortable until
    /// [`sortable`](Column::sortable) is called.
    pub fn new<F>(key: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        let key = key.into();
        Self {
            header: key.clone(),
            key,
            accessor: Arc::new(accessor),
            renderer: None,
            sortable: false,
            min_width: None,
            width: None,
            class_name: None,
        }
    }

    /// Create a synthetic column that only renders (edit/delete buttons and
    /// the like). Its value is always `Null` and it never sorts.
    pub fn action<F>(key: impl Into<String>, renderer: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let mut column = Self::new(key, |_: &T| CellValue::Null);
        column.renderer = Some(Arc::new(renderer));
        column
    }

    /// Set the header label.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Set a custom cell renderer.
    pub fn render<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the minimum width hint.
    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Set the preferred width hint.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the style class hint.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn header_text(&self) -> &str {
        &self.header
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn min_width_hint(&self) -> Option<u16> {
        self.min_width
    }

    pub fn width_hint(&self) -> Option<u16> {
        self.width
    }

    pub fn class_name_hint(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Extract this column's value from a row.
    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    /// Render this column's cell for a row.
    ///
    /// Uses the custom renderer when set, otherwise the value's `Display`
    /// output (empty for `Null`).
    pub fn render_cell(&self, row: &T) -> String {
        match &self.renderer {
            Some(render) => render(row),
            None => self.value(row).to_string(),
        }
    }
}

// Manual impls: deriving would require `T: Clone` / `T: Debug`.
impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            accessor: Arc::clone(&self.accessor),
            renderer: self.renderer.clone(),
            sortable: self.sortable,
            min_width: self.min_width,
            width: self.width,
            class_name: self.class_name.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("has_renderer", &self.renderer.is_some())
            .field("min_width", &self.min_width)
            .field("width", &self.width)
            .field("class_name", &self.class_name)
            .finish()
    }
}

/// Find a column by key.
pub fn find_column<'a, T>(columns: &'a [Column<T>], key: &str) -> Option<&'a Column<T>> {
    columns.iter().find(|c| c.key == key)
}
