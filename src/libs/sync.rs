//! Debounced write-through from the task store to the repository.
//!
//! [`Debouncer`] is a cancellable timer: each `schedule` aborts the live
//! pending write and arms a new one, so a burst of changes ends in a single
//! write of the last snapshot once the collection has been quiet for the
//! whole interval.
//!
//! [`TaskSync`] runs a debouncer on a background task fed by the store's
//! snapshot channel. Both need a running tokio runtime.

use super::store::{Snapshot, TaskStore};
use crate::db::tasks::TaskRepository;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// What happens to a write that is still pending when sync stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Teardown {
    /// Write the pending snapshot before returning.
    #[default]
    Flush,
    /// Drop the pending write.
    Discard,
}

impl fmt::Display for Teardown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Teardown::Flush => f.write_str("flush"),
            Teardown::Discard => f.write_str("discard"),
        }
    }
}

struct Pending {
    snapshot: Snapshot,
    handle: JoinHandle<()>,
}

pub struct Debouncer {
    repository: Arc<TaskRepository>,
    delay: Duration,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(repository: Arc<TaskRepository>, delay: Duration) -> Self {
        Debouncer { repository, delay, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending write with a write of `snapshot` after the quiet interval.
    pub fn schedule(&mut self, snapshot: Snapshot) {
        self.cancel();

        let repository = self.repository.clone();
        let delay = self.delay;
        let tasks = snapshot.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            repository.save(&tasks);
        });

        self.pending = Some(Pending { snapshot, handle });
    }

    /// Aborts the pending write, returning its snapshot if it had not fired yet.
    pub fn cancel(&mut self) -> Option<Snapshot> {
        let pending = self.pending.take()?;
        if pending.handle.is_finished() {
            return None;
        }
        pending.handle.abort();
        Some(pending.snapshot)
    }

    /// Writes the pending snapshot now. Returns `false` if nothing was pending.
    pub fn flush(&mut self) -> bool {
        match self.cancel() {
            Some(snapshot) => {
                self.repository.save(&snapshot);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|pending| !pending.handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

type ShutdownRequest = (Teardown, oneshot::Sender<bool>);

/// Background persistence for one store.
///
/// Dropping it without calling [`TaskSync::shutdown`] discards any pending
/// write.
pub struct TaskSync {
    worker: Option<JoinHandle<()>>,
    shutdown: Option<oneshot::Sender<ShutdownRequest>>,
}

impl TaskSync {
    pub fn spawn(store: &TaskStore, repository: Arc<TaskRepository>, delay: Duration) -> Self {
        let mut changes = store.subscribe();
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<ShutdownRequest>();

        let worker = tokio::spawn(async move {
            let mut debouncer = Debouncer::new(repository, delay);
            let mut store_open = true;

            loop {
                tokio::select! {
                    // Pick up the latest change before honoring a shutdown.
                    biased;

                    changed = changes.changed(), if store_open => {
                        if changed.is_err() {
                            store_open = false;
                            continue;
                        }
                        let snapshot = changes.borrow_and_update().clone();
                        tracing::trace!(count = snapshot.len(), "scheduling task write");
                        debouncer.schedule(snapshot);
                    }
                    request = &mut shutdown_rx => {
                        match request {
                            Ok((Teardown::Flush, done)) => {
                                let flushed = debouncer.flush();
                                let _ = done.send(flushed);
                            }
                            Ok((Teardown::Discard, done)) => {
                                let discarded = debouncer.cancel().is_some();
                                if discarded {
                                    tracing::warn!("discarding pending task write");
                                }
                                let _ = done.send(discarded);
                            }
                            Err(_) => {
                                debouncer.cancel();
                            }
                        }
                        break;
                    }
                }
            }
        });

        TaskSync {
            worker: Some(worker),
            shutdown: Some(shutdown_tx),
        }
    }

    /// Stops the worker. Returns `true` if a write was still pending, in which
    /// case it was written (`Flush`) or dropped (`Discard`).
    pub async fn shutdown(mut self, teardown: Teardown) -> bool {
        let mut pending = false;
        if let Some(shutdown) = self.shutdown.take() {
            let (done_tx, done_rx) = oneshot::channel();
            if shutdown.send((teardown, done_tx)).is_ok() {
                pending = done_rx.await.unwrap_or(false);
            }
        }
        if let Some(worker) = self.worker.take() {
            if let Err(e) = worker.await {
                tracing::error!(error = %e, "task sync worker failed");
            }
        }
        pending
    }
}
