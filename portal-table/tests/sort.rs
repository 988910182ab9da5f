use std::cmp::Ordering;

use chrono::{TimeZone, Utc};
use portal_table::sort::{compare_cells, sorted_indices};
use portal_table::{CellValue, Column, SortConfig, SortDirection};

#[derive(Debug, Clone)]
struct Event {
    title: &'static str,
    attendees: Option<i64>,
    starts_at: chrono::DateTime<Utc>,
}

fn event(title: &'static str, attendees: Option<i64>, day: u32) -> Event {
    Event {
        title,
        attendees,
        starts_at: Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap(),
    }
}

fn events() -> Vec<Event> {
    vec![
        event("Offsite 10", Some(40), 12),
        event("offsite 2", None, 3),
        event("All hands", Some(120), 27),
        event("Lunch & learn", Some(40), 5),
        event("Board review", None, 19),
    ]
}

fn title_column() -> Column<Event> {
    Column::new("title", |e: &Event| e.title.into()).sortable()
}

fn attendees_column() -> Column<Event> {
    Column::new("attendees", |e: &Event| e.attendees.into()).sortable()
}

fn starts_column() -> Column<Event> {
    Column::new("starts_at", |e: &Event| e.starts_at.into()).sortable()
}

fn titles(rows: &[Event], order: &[usize]) -> Vec<&'static str> {
    order.iter().map(|&i| rows[i].title).collect()
}

// ============================================================================
// Toggle law
// ============================================================================

#[test]
fn test_toggle_alternates_without_unsorted_state() {
    let mut current: Option<SortConfig> = None;
    let mut seen = Vec::new();
    for _ in 0..5 {
        let next = SortConfig::toggled(current.as_ref(), "title");
        seen.push(next.direction);
        current = Some(next);
    }

    use SortDirection::*;
    assert_eq!(seen, vec![Ascending, Descending, Ascending, Descending, Ascending]);
}

#[test]
fn test_toggle_other_column_is_ascending() {
    let current = SortConfig::asc("title");
    assert_eq!(
        SortConfig::toggled(Some(&current), "attendees"),
        SortConfig::asc("attendees")
    );
}

#[test]
fn test_sort_config_json_format() {
    let json = serde_json::to_string(&SortConfig::desc("starts_at")).unwrap();
    assert_eq!(json, r#"{"key":"starts_at","direction":"descending"}"#);

    let parsed: SortConfig =
        serde_json::from_str(r#"{"key":"name","direction":"ascending"}"#).unwrap();
    assert_eq!(parsed, SortConfig::asc("name"));
}

#[test]
fn test_reversed_direction() {
    assert_eq!(SortDirection::Ascending.reversed(), SortDirection::Descending);
    assert_eq!(SortDirection::Descending.reversed(), SortDirection::Ascending);
}

// ============================================================================
// Comparator
// ============================================================================

#[test]
fn test_null_is_last_in_both_directions() {
    let null = CellValue::Null;
    let one = CellValue::Int(1);

    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        assert_eq!(compare_cells(&null, &one, direction), Ordering::Greater);
        assert_eq!(compare_cells(&one, &null, direction), Ordering::Less);
        assert_eq!(compare_cells(&null, &null, direction), Ordering::Equal);
    }
}

#[test]
fn test_descending_inverts_defined_values() {
    let a = CellValue::from("alpha");
    let b = CellValue::from("Beta");
    assert_eq!(compare_cells(&a, &b, SortDirection::Ascending), Ordering::Less);
    assert_eq!(compare_cells(&a, &b, SortDirection::Descending), Ordering::Greater);
}

// ============================================================================
// Row ordering
// ============================================================================

#[test]
fn test_text_sort_is_natural_and_case_insensitive() {
    let rows = events();
    let order = sorted_indices(&rows, Some(&title_column()), SortDirection::Ascending);

    assert_eq!(
        titles(&rows, &order),
        vec!["All hands", "Board review", "Lunch & learn", "offsite 2", "Offsite 10"]
    );
}

#[test]
fn test_numbers_with_nulls() {
    let rows = events();

    let asc = sorted_indices(&rows, Some(&attendees_column()), SortDirection::Ascending);
    assert_eq!(
        titles(&rows, &asc),
        vec!["Offsite 10", "Lunch & learn", "All hands", "offsite 2", "Board review"]
    );

    let desc = sorted_indices(&rows, Some(&attendees_column()), SortDirection::Descending);
    assert_eq!(
        titles(&rows, &desc),
        vec!["All hands", "Offsite 10", "Lunch & learn", "offsite 2", "Board review"]
    );
}

#[test]
fn test_dates() {
    let rows = events();
    let order = sorted_indices(&rows, Some(&starts_column()), SortDirection::Descending);

    assert_eq!(
        titles(&rows, &order),
        vec!["All hands", "Board review", "Offsite 10", "Lunch & learn", "offsite 2"]
    );
}

#[test]
fn test_sort_is_idempotent() {
    let rows = events();
    let once = sorted_indices(&rows, Some(&attendees_column()), SortDirection::Ascending);

    let resorted: Vec<Event> = once.iter().map(|&i| rows[i].clone()).collect();
    let twice = sorted_indices(&resorted, Some(&attendees_column()), SortDirection::Ascending);

    assert_eq!(twice, (0..rows.len()).collect::<Vec<_>>());
}

#[test]
fn test_no_column_keeps_input_order() {
    let rows = events();
    assert_eq!(
        sorted_indices(&rows, None, SortDirection::Descending),
        vec![0, 1, 2, 3, 4]
    );
}

// ============================================================================
// Floats
// ============================================================================

#[derive(Debug, Clone)]
struct Rating {
    id: usize,
    score: f64,
}

fn ratings(count: usize) -> Vec<Rating> {
    (0..count)
        .map(|id| Rating {
            id,
            score: if id % 3 == 0 {
                f64::NAN
            } else {
                ((id * 7919) % 257) as f64 / 4.0 - 20.0
            },
        })
        .collect()
}

fn score_column() -> Column<Rating> {
    Column::new("score", |r: &Rating| r.score.into()).sortable()
}

#[test]
fn test_nan_scores_sort_last_and_defined_scores_stay_ordered() {
    let rows = ratings(2_000);

    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let order = sorted_indices(&rows, Some(&score_column()), direction);
        let (defined, nan): (Vec<usize>, Vec<usize>) =
            order.iter().partition(|&&i| !rows[i].score.is_nan());

        // Every NaN row follows every defined row
        assert_eq!(&order[defined.len()..], nan.as_slice());

        let scores: Vec<f64> = defined.iter().map(|&i| rows[i].score).collect();
        let ordered = scores.windows(2).all(|w| match direction {
            SortDirection::Ascending => w[0] <= w[1],
            SortDirection::Descending => w[0] >= w[1],
        });
        assert!(ordered, "defined scores out of order for {:?}", direction);

        // NaN rows keep their input order
        assert!(nan.windows(2).all(|w| rows[w[0]].id < rows[w[1]].id));
    }
}

#[test]
fn test_view_sort_with_nan_scores() {
    use portal_table::{TableConfig, TableView};

    let mut view = TableView::new(vec![score_column()], ratings(200), TableConfig::default());
    view.handle_sort("score");

    let scores: Vec<f64> = view.sorted_data().map(|r| r.score).collect();
    let defined = scores.iter().take_while(|s| !s.is_nan()).count();
    assert_eq!(defined, 200 - 67);
    assert!(scores[defined..].iter().all(|s| s.is_nan()));
    assert!(scores[..defined].windows(2).all(|w| w[0] <= w[1]));
}
