use super::error::StorageError;
use super::kv::KeyValueStore;
use crate::libs::task::Task;
use std::collections::HashSet;
use std::sync::Arc;

pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Reads and writes the whole task collection as one JSON record.
///
/// `load` and `save` never fail: problems are logged and the in-memory
/// collection stays authoritative. `try_load` and `try_save` expose the same
/// steps with their errors.
#[derive(Clone)]
pub struct TaskRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl TaskRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        TaskRepository { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored tasks, or an empty collection when the record is missing or
    /// cannot be decoded.
    pub fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => {
                tracing::debug!(key = %self.key, count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "error loading tasks, starting empty");
                Vec::new()
            }
        }
    }

    pub fn try_load(&self) -> Result<Vec<Task>, StorageError> {
        match self.store.get(&self.key)? {
            Some(raw) => decode(&raw),
            None => Ok(Vec::new()),
        }
    }

    pub fn save(&self, tasks: &[Task]) {
        match self.try_save(tasks) {
            Ok(()) => tracing::debug!(key = %self.key, count = tasks.len(), "saved tasks"),
            Err(e) => tracing::error!(key = %self.key, error = %e, "error saving tasks"),
        }
    }

    pub fn try_save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let raw = encode(tasks)?;
        self.store.set(&self.key, &raw)
    }
}

pub fn encode(tasks: &[Task]) -> Result<String, StorageError> {
    serde_json::to_string(tasks).map_err(StorageError::Encode)
}

/// Parses a stored record, rejecting anything that is not an array of
/// well-formed tasks with distinct ids.
pub fn decode(raw: &str) -> Result<Vec<Task>, StorageError> {
    let tasks: Vec<Task> = serde_json::from_str(raw).map_err(StorageError::Decode)?;

    let mut seen = HashSet::with_capacity(tasks.len());
    for task in &tasks {
        if !seen.insert(task.id.as_str()) {
            return Err(StorageError::DuplicateId(task.id.clone()));
        }
    }

    Ok(tasks)
}
