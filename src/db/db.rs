use super::error::StorageError;
use crate::libs::data_storage::DataStorage;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "taskmaster.db";

const SCHEMA_KV: &str = "CREATE TABLE IF NOT EXISTS kv (
    key TEXT NOT NULL PRIMARY KEY,
    value TEXT NOT NULL
);";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens `taskmaster.db` in the application data directory.
    pub fn new() -> Result<Db, StorageError> {
        Self::open(&DataStorage::new())
    }

    pub fn open(storage: &DataStorage) -> Result<Db, StorageError> {
        let db_file_path = storage.get_path(DB_FILE_NAME)?;
        let conn = Connection::open(db_file_path)?;
        Self::with_connection(conn)
    }

    /// A private database that disappears with the connection.
    pub fn in_memory() -> Result<Db, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Db, StorageError> {
        conn.execute(SCHEMA_KV, [])?;
        Ok(Db { conn })
    }
}
