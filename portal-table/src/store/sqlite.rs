//! SQLite preference store with in-memory cache.

use std::path::Path;
use std::sync::Mutex;

use dashmap::DashMap;
use rusqlite::Connection;
use rusqlite::OptionalExtension;

use super::PreferenceError;
use super::PreferenceStore;

/// SQLite-backed preference storage with DashMap cache.
///
/// Reads are served from the cache once a key has been seen; writes go to
/// the database first and update the cache only on success.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    cache: DashMap<String, Vec<u8>>,
}

impl SqliteStore {
    /// Open (or create) a SQLite store at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PreferenceError> {
        Self::init(Connection::open(path)?)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, PreferenceError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, PreferenceError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
            cache: DashMap::new(),
        })
    }

    fn with_conn<R>(
        &self,
        f: impl FnOnce(&Connection) -> rusqlite::Result<R>,
    ) -> Result<R, PreferenceError> {
        let conn = self.conn.lock().map_err(|_| PreferenceError::LockPoisoned)?;
        Ok(f(&conn)?)
    }
}

impl PreferenceStore for SqliteStore {
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, PreferenceError> {
        // Check cache first
        if let Some(value) = self.cache.get(key) {
            return Ok(Some(value.clone()));
        }

        let result = self.with_conn(|conn| {
            conn.query_row("SELECT value FROM settings WHERE key = ?", [key], |row| {
                row.get::<_, Vec<u8>>(0)
            })
            .optional()
        })?;

        if let Some(ref value) = result {
            self.cache.insert(key.to_string(), value.clone());
        }

        Ok(result)
    }

    fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), PreferenceError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO settings (key, value) VALUES (?, ?)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                rusqlite::params![key, &value],
            )
        })?;

        self.cache.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PreferenceError> {
        self.with_conn(|conn| conn.execute("DELETE FROM settings WHERE key = ?", [key]))?;
        self.cache.remove(key);
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, PreferenceError> {
        // instr() rather than LIKE: case-sensitive and no wildcard escaping
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT key FROM settings WHERE instr(key, ?) = 1 ORDER BY key")?;
            let rows = stmt.query_map([prefix], |row| row.get(0))?;
            rows.collect::<Result<Vec<String>, _>>()
        })
    }
}
