//! The canonical task collection and its mutations.
//!
//! [`TaskStore`] is the only writer of the collection. Each mutation builds a
//! new [`Snapshot`] and publishes it on a `tokio::sync::watch` channel, so a
//! snapshot handed out earlier is never changed underneath its holder and
//! observers (the debounced sync) always see whole states.
//!
//! Mutations referring to an unknown id do nothing and publish nothing.

use super::task::{Clock, IdGenerator, SystemClock, Task, TaskCounts, TaskFilter, UuidIds};
use crate::db::tasks::TaskRepository;
use std::sync::Arc;
use tokio::sync::watch;

/// An immutable view of the collection at one point in time.
pub type Snapshot = Arc<Vec<Task>>;

pub struct TaskStore {
    tasks: Snapshot,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    publisher: watch::Sender<Snapshot>,
}

impl TaskStore {
    /// A store over `tasks` with random ids and the system clock.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self::with_capabilities(tasks, Box::new(UuidIds), Box::new(SystemClock))
    }

    pub fn with_capabilities(tasks: Vec<Task>, ids: Box<dyn IdGenerator>, clock: Box<dyn Clock>) -> Self {
        let tasks = Arc::new(tasks);
        let (publisher, _) = watch::channel(tasks.clone());
        TaskStore { tasks, ids, clock, publisher }
    }

    /// Starts from whatever the repository holds; a missing or corrupt
    /// record gives an empty store.
    pub fn load(repository: &TaskRepository) -> Self {
        Self::new(repository.load())
    }

    /// Appends a new active task and returns its id.
    pub fn add(&mut self, text: impl Into<String>) -> String {
        let mut id = self.ids.next_id();
        while self.position(&id).is_some() {
            tracing::warn!(%id, "id generator repeated an id, drawing another");
            id = self.ids.next_id();
        }

        let task = Task::new(id.clone(), text, self.clock.now());
        let mut next = Vec::with_capacity(self.tasks.len() + 1);
        next.extend(self.tasks.iter().cloned());
        next.push(task);
        self.publish(next);

        id
    }

    /// Flips the completion flag. Returns `false` if no task has `id`.
    pub fn toggle(&mut self, id: &str) -> bool {
        self.update(id, |task| task.completed = !task.completed)
    }

    /// Replaces the text. Returns `false` if no task has `id`.
    pub fn edit(&mut self, id: &str, new_text: impl Into<String>) -> bool {
        let new_text = new_text.into();
        self.update(id, move |task| task.text = new_text)
    }

    /// Removes the task. Returns `false` if no task has `id`.
    pub fn delete(&mut self, id: &str) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        let next = self.tasks.iter().filter(|task| task.id != id).cloned().collect();
        self.publish(next);
        true
    }

    /// Removes every completed task and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let removed = self.tasks.iter().filter(|task| task.completed).count();
        if removed == 0 {
            return 0;
        }
        let next = self.tasks.iter().filter(|task| task.is_active()).cloned().collect();
        self.publish(next);
        removed
    }

    /// Tasks matching `filter`, in collection order.
    pub fn filtered_view(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).collect()
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts::of(&self.tasks)
    }

    /// The current snapshot.
    pub fn tasks(&self) -> Snapshot {
        self.tasks.clone()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Resolves an exact id or a prefix shared by exactly one task.
    pub fn resolve(&self, id_or_prefix: &str) -> Option<&str> {
        if let Some(task) = self.get(id_or_prefix) {
            return Some(&task.id);
        }
        if id_or_prefix.is_empty() {
            return None;
        }
        let mut matches = self.tasks.iter().filter(|task| task.id.starts_with(id_or_prefix));
        match (matches.next(), matches.next()) {
            (Some(task), None) => Some(&task.id),
            _ => None,
        }
    }

    /// Receives every snapshot published after this call.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.publisher.subscribe()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn update(&mut self, id: &str, change: impl FnOnce(&mut Task)) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let mut next = self.tasks.as_ref().clone();
        change(&mut next[index]);
        self.publish(next);
        true
    }

    fn publish(&mut self, next: Vec<Task>) {
        self.tasks = Arc::new(next);
        self.publisher.send_replace(self.tasks.clone());
        tracing::trace!(count = self.tasks.len(), "published task snapshot");
    }
}
