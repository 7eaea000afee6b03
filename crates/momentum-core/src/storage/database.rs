//! SQLite-backed slot storage.
//!
//! Every repository of the engine lives in one named slot of a single
//! key-value table. Values are opaque text; encoding is the caller's job
//! (see [`super::slots`]).

use std::path::Path;

use rusqlite::{params, Connection};

use super::data_dir;
use crate::error::PersistenceError;

/// Durable key-value storage keyed by slot name.
///
/// Writes replace the whole value of a slot. There are no partial writes.
pub trait SlotStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// SQLite database holding the slot table.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/momentum/momentum.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the data directory is unavailable or the database
    /// cannot be opened or migrated.
    pub fn open() -> crate::error::Result<Self> {
        let path = data_dir()?.join("momentum.db");
        Ok(Self::open_at(&path)?)
    }

    /// Open (or create) a database file at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, PersistenceError> {
        let conn = Connection::open(path).map_err(|source| PersistenceError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate().map_err(|source| PersistenceError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, PersistenceError> {
        Self::open_at(Path::new(":memory:"))
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

impl SlotStore for Database {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.kv_get(key).map_err(|e| PersistenceError::ReadFailed {
            slot: key.to_string(),
            message: e.to_string(),
        })
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.kv_set(key, value).map_err(|e| PersistenceError::WriteFailed {
            slot: key.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_store() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
    }

    #[test]
    fn save_replaces_whole_value() {
        let db = Database::open_memory().unwrap();
        db.save("points", "10").unwrap();
        db.save("points", "25").unwrap();
        assert_eq!(db.load("points").unwrap().as_deref(), Some("25"));
    }

    #[test]
    fn file_database_survives_reopen() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("momentum.db");
        {
            let db = Database::open_at(&path).unwrap();
            db.save("vision", "ship it").unwrap();
        }
        let db = Database::open_at(&path).unwrap();
        assert_eq!(db.load("vision").unwrap().as_deref(), Some("ship it"));
    }
}
