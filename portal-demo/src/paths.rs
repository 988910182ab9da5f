//! Where the demo keeps its preference database and logs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

const SETTINGS_DB: &str = "settings.db";
const LATEST_LOG: &str = "latest.log";

#[derive(Debug, Error)]
pub enum PathError {
    #[error("no home directory; cannot place the {0}")]
    NoHome(&'static str),

    #[error("cannot create {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn project_dirs(purpose: &'static str) -> Result<ProjectDirs, PathError> {
    ProjectDirs::from("com", "intranet", "portal").ok_or(PathError::NoHome(purpose))
}

/// Create `dir` if needed and return `dir/file`.
fn file_in(dir: &Path, file: &str) -> Result<PathBuf, PathError> {
    fs::create_dir_all(dir).map_err(|source| PathError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(dir.join(file))
}

/// The preference database, in the platform data directory.
///
/// The directory exists once this returns.
pub fn settings_db() -> Result<PathBuf, PathError> {
    let dirs = project_dirs("preference database")?;
    file_in(dirs.data_dir(), SETTINGS_DB)
}

/// The current log file, in the platform cache directory next to the
/// archived logs. The directory exists once this returns.
pub fn latest_log() -> Result<PathBuf, PathError> {
    let dirs = project_dirs("log file")?;
    file_in(dirs.cache_dir(), LATEST_LOG)
}

/// Whether `name` is an archived log rather than the current one.
pub fn is_archived_log(name: &str) -> bool {
    name.ends_with(".log") && name != LATEST_LOG
}
