//! Sample announcements board data.

use chrono::{DateTime, TimeZone, Utc};
use portal_table::Column;

#[derive(Debug, Clone)]
pub struct Announcement {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub pinned: bool,
    pub views: Option<i64>,
}

fn announcement(
    id: u32,
    title: &str,
    author: &str,
    (month, day): (u32, u32),
    pinned: bool,
    views: Option<i64>,
) -> Announcement {
    Announcement {
        id,
        title: title.to_string(),
        author: author.to_string(),
        published_at: Utc
            .with_ymd_and_hms(2026, month, day, 9, 30, 0)
            .single()
            .unwrap_or_default(),
        pinned,
        views,
    }
}

pub fn sample() -> Vec<Announcement> {
    vec![
        announcement(1, "Office closed for Q3 maintenance", "Facilities", (7, 14), true, Some(412)),
        announcement(2, "New expense policy v2", "Finance", (3, 2), false, Some(988)),
        announcement(3, "Town hall 10 recap", "Comms", (9, 30), false, Some(257)),
        announcement(4, "Town hall 9 recap", "Comms", (6, 28), false, Some(301)),
        announcement(5, "Welcome our new interns", "People Ops", (6, 2), false, None),
        announcement(6, "VPN client upgrade", "IT", (8, 19), true, Some(1204)),
        announcement(7, "bike-to-work week", "People Ops", (5, 11), false, Some(76)),
        announcement(8, "Holiday calendar 2027", "People Ops", (10, 1), false, None),
        announcement(9, "Parking garage resurfacing", "Facilities", (4, 23), false, Some(143)),
        announcement(10, "Security awareness training", "IT", (2, 9), false, Some(655)),
        announcement(11, "Cafeteria menu survey", "Facilities", (1, 17), false, Some(89)),
        announcement(12, "Quarterly results", "Finance", (10, 12), true, Some(2310)),
    ]
}

pub fn columns() -> Vec<Column<Announcement>> {
    vec![
        Column::new("title", |a: &Announcement| a.title.clone().into())
            .header("Title")
            .sortable()
            .min_width(32),
        Column::new("author", |a: &Announcement| a.author.clone().into())
            .header("Author")
            .sortable()
            .width(12),
        Column::new("published_at", |a: &Announcement| a.published_at.into())
            .header("Published")
            .sortable()
            .render(|a: &Announcement| a.published_at.format("%Y-%m-%d").to_string())
            .width(11),
        Column::new("pinned", |a: &Announcement| a.pinned.into())
            .header("Pin")
            .render(|a: &Announcement| (if a.pinned { "*" } else { "" }).to_string())
            .width(4)
            .class_name("center"),
        Column::new("views", |a: &Announcement| a.views.into())
            .header("Views")
            .sortable()
            .width(6)
            .class_name("numeric"),
        Column::action("actions", |a: &Announcement| format!("[edit #{}]", a.id))
            .header("")
            .width(10),
    ]
}
