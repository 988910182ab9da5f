//! File logging with simple rotation.

use std::fs::{self, File};
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::paths;

/// Archived logs kept besides `latest.log`.
const MAX_OLD_LOGS: usize = 25;

/// Archive the previous run's log and start logging to a fresh `latest.log`.
///
/// Logging stays off if the cache directory is unavailable or the file cannot
/// be created; the demo still runs.
pub fn init() {
    let path = match paths::latest_log() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{}; logging disabled", e);
            return;
        }
    };
    if let Some(dir) = path.parent() {
        archive_latest(dir, &path);
        prune(dir);
    }

    match File::create(&path) {
        Ok(file) => {
            if WriteLogger::init(LevelFilter::Debug, Config::default(), file).is_err() {
                eprintln!("Logger already initialized");
            }
        }
        Err(e) => eprintln!("Cannot create {}: {}; logging disabled", path.display(), e),
    }
}

fn archive_latest(dir: &Path, latest: &Path) {
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(latest, dir.join(format!("{}.log", stamp)));
    }
}

/// Delete the oldest archives beyond `MAX_OLD_LOGS`.
fn prune(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archives: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            paths::is_archived_log(&name.to_string_lossy())
        })
        .collect();
    if archives.len() <= MAX_OLD_LOGS {
        return;
    }

    archives.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());
    let excess = archives.len() - MAX_OLD_LOGS;
    for entry in &archives[..excess] {
        let _ = fs::remove_file(entry.path());
    }
}
