//! A running task list: the store, its repository, and the background sync
//! wired together the way every mutating command needs them.

use super::config::Config;
use super::messages::Message;
use super::store::TaskStore;
use super::sync::{TaskSync, Teardown};
use crate::db::kv::{KeyValueStore, SqliteStore};
use crate::db::tasks::TaskRepository;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use std::sync::Arc;

/// The task repository over the SQLite store in the application data
/// directory.
pub fn open_repository(config: &Config) -> Result<TaskRepository> {
    let kv: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open()?);
    Ok(TaskRepository::new(kv, config.storage_key.clone()))
}

pub struct Session {
    pub store: TaskStore,
    repository: Arc<TaskRepository>,
    sync: TaskSync,
    teardown: Teardown,
}

impl Session {
    pub fn open(config: &Config) -> Result<Self> {
        Ok(Self::with_repository(config, open_repository(config)?))
    }

    pub fn with_store(config: &Config, kv: Arc<dyn KeyValueStore>) -> Self {
        Self::with_repository(config, TaskRepository::new(kv, config.storage_key.clone()))
    }

    /// Loads the task list and starts syncing changes back to `repository`.
    /// Must be called inside a tokio runtime.
    pub fn with_repository(config: &Config, repository: TaskRepository) -> Self {
        let repository = Arc::new(repository);
        let store = TaskStore::load(&repository);
        let sync = TaskSync::spawn(&store, repository.clone(), config.debounce());

        Session {
            store,
            repository,
            sync,
            teardown: config.teardown,
        }
    }

    pub fn repository(&self) -> &TaskRepository {
        &self.repository
    }

    /// Stops syncing, applying the configured teardown to a pending write.
    pub async fn close(self) {
        let teardown = self.teardown;
        if self.sync.shutdown(teardown).await {
            match teardown {
                Teardown::Flush => msg_debug!(Message::PendingWriteFlushed),
                Teardown::Discard => msg_warning!(Message::PendingWriteDiscarded),
            }
        }
    }
}
