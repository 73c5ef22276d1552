//! Persistence layer.
//!
//! Tasks are kept as a single JSON record in a string-keyed durable store.
//! The default store is a small SQLite key/value table in the application
//! data directory.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taskmaster::db::kv::SqliteStore;
//! use taskmaster::db::tasks::{TaskRepository, DEFAULT_STORAGE_KEY};
//!
//! let store = Arc::new(SqliteStore::open()?);
//! let repository = TaskRepository::new(store, DEFAULT_STORAGE_KEY);
//! let tasks = repository.load();
//! repository.save(&tasks);
//! # Ok::<(), taskmaster::db::error::StorageError>(())
//! ```

/// SQLite connection management.
pub mod db;

/// Storage error type.
pub mod error;

/// Durable key/value stores.
pub mod kv;

/// Encoding and decoding of the task collection.
pub mod tasks;
