//! Plain-text rendering of a table page.

use std::fmt::Write;

use portal_table::{Column, SortDirection, TableView};
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = " | ";

fn column_width<T>(column: &Column<T>) -> usize {
    let header = column.header_text().width() + 2;
    let hinted = column
        .width_hint()
        .or(column.min_width_hint())
        .map(usize::from)
        .unwrap_or(0);
    hinted.max(header)
}

/// Pads or truncates `text` to exactly `width` terminal columns.
fn fit(text: &str, width: usize, right_align: bool) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }

    let pad = " ".repeat(width - used);
    if right_align {
        format!("{}{}", pad, out)
    } else {
        format!("{}{}", out, pad)
    }
}

/// Render the current page with a header, sort indicator and footer.
pub fn render_page<T>(view: &TableView<T>) -> String {
    let columns = view.columns();
    let widths: Vec<usize> = columns.iter().map(column_width).collect();
    let sort = view.sort_config();
    let mut out = String::new();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| {
            let label = match sort {
                Some(s) if s.key == column.key() => {
                    let indicator = match s.direction {
                        SortDirection::Ascending => "▲",
                        SortDirection::Descending => "▼",
                    };
                    format!("{} {}", column.header_text(), indicator)
                }
                _ => column.header_text().to_string(),
            };
            fit(&label, width, false)
        })
        .collect();
    let _ = writeln!(out, "{}", header.join(SEPARATOR));

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    for row in view.paginated_data() {
        let cells: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| {
                let right = column.class_name_hint() == Some("numeric");
                fit(&column.render_cell(row), width, right)
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join(SEPARATOR));
    }

    let page = view.page();
    let _ = writeln!(
        out,
        "page {}/{} - {} items - {} per page{}{}",
        page.pagination.current_page,
        page.total_pages,
        page.total_items,
        page.pagination.items_per_page,
        if page.can_previous_page { " - [prev]" } else { "" },
        if page.can_next_page { " - [next]" } else { "" },
    );
    out
}
