use thiserror::Error;

/// Failures of the durable store and of the task record codec.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode stored tasks: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode tasks: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("stored tasks contain duplicate id '{0}'")]
    DuplicateId(String),

    #[error("store rejected write to '{0}'")]
    WriteRejected(String),
}
