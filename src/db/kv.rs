//! String-keyed durable record stores.
//!
//! [`KeyValueStore`] is the narrow interface the task repository persists
//! through. [`SqliteStore`] keeps records in the `kv` table of the
//! application database; [`MemoryStore`] keeps them in a map and can be told
//! to reject writes, which is how tests exercise the failure paths.

use super::db::Db;
use super::error::StorageError;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;

const SELECT_VALUE: &str = "SELECT value FROM kv WHERE key = ?";
const UPSERT_VALUE: &str = "INSERT INTO kv (key, value) VALUES (?, ?) ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_VALUE: &str = "DELETE FROM kv WHERE key = ?";

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new(db: Db) -> Self {
        SqliteStore { conn: Mutex::new(db.conn) }
    }

    /// Opens the application database in its default location.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self::new(Db::new()?))
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.conn.lock();
        let value = conn.query_row(SELECT_VALUE, params![key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.lock().execute(UPSERT_VALUE, params![key, value])?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.conn.lock().execute(DELETE_VALUE, params![key])?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    entries: HashMap<String, String>,
    writes: usize,
    reject_writes: bool,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following `set` fail, like a browser store over quota.
    pub fn reject_writes(&self, reject: bool) {
        self.state.lock().reject_writes = reject;
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.state.lock().writes
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.state.lock().entries.get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut state = self.state.lock();
        if state.reject_writes {
            return Err(StorageError::WriteRejected(key.to_string()));
        }
        state.entries.insert(key.to_string(), value.to_string());
        state.writes += 1;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.state.lock().entries.remove(key);
        Ok(())
    }
}
