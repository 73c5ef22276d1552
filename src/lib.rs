//! # Taskmaster
//!
//! A local task list: add, toggle, edit, delete, and filter short tasks,
//! with the list persisted across sessions.
//!
//! ## Layout
//!
//! - [`libs::store::TaskStore`] owns the collection and derives filtered
//!   views and counts
//! - [`db::tasks::TaskRepository`] stores the collection as one JSON record
//!   in a durable key/value store, tolerating missing or corrupt data
//! - [`libs::sync`] writes changes back after a quiet interval, coalescing
//!   bursts into one write
//! - [`commands`] is the command-line front-end
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmaster::commands::Cli;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
