//! Core library modules for the taskmaster application.
//!
//! ## Usage
//!
//! ```rust
//! use taskmaster::libs::store::TaskStore;
//! use taskmaster::libs::task::TaskFilter;
//!
//! let mut store = TaskStore::new(Vec::new());
//! let id = store.add("buy milk");
//! store.toggle(&id);
//! assert_eq!(store.filtered_view(TaskFilter::Completed).len(), 1);
//! ```

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod session;
pub mod store;
pub mod sync;
pub mod task;
pub mod view;
