mod announcements;
mod logging;
mod paths;
mod render;

use log::{info, warn};
use portal_table::store::{MemoryStore, PreferenceProvider, SqliteStore};
use portal_table::{TableConfig, TablePreferences, TableView};

const NAMESPACE: &str = "announcements";

/// Open the on-disk preference store, or fall back to memory.
fn preference_provider() -> PreferenceProvider {
    let path = match paths::settings_db() {
        Ok(path) => path,
        Err(e) => {
            warn!("{}; preferences will not survive this run", e);
            return PreferenceProvider::new(MemoryStore::new());
        }
    };

    match SqliteStore::open(&path) {
        Ok(store) => {
            info!("Preferences stored in {}", path.display());
            PreferenceProvider::new(store)
        }
        Err(e) => {
            warn!("Cannot open {}: {}; using in-memory preferences", path.display(), e);
            PreferenceProvider::new(MemoryStore::new())
        }
    }
}

fn show<T>(title: &str, view: &TableView<T>) {
    println!("== {}", title);
    println!("{}", render::render_page(view));
}

fn main() {
    logging::init();

    let prefs = TablePreferences::new(NAMESPACE, preference_provider());
    let config = TableConfig::new().with_items_per_page(5).with_preferences(prefs);
    let mut view = TableView::new(announcements::columns(), announcements::sample(), config);

    match view.sort_config() {
        Some(sort) => show(&format!("Restored sort {:?} on '{}'", sort.direction, sort.key), &view),
        None => show("Announcements", &view),
    }

    view.handle_sort("published_at");
    show("Sorted by publish date", &view);

    view.handle_sort("published_at");
    view.next_page();
    show("Newest first, page 2", &view);

    view.handle_sort("views");
    view.handle_page_change(usize::MAX);
    show("Least viewed first, last page (unviewed last)", &view);

    if view.handle_items_per_page_change(10) {
        show("Ten per page", &view);
    }

    view.handle_sort("title");
    show("By title (run again to see it restored)", &view);
}
