//! Task mutations shared by the one-shot subcommands and the shell.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::store::TaskStore;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task text; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,
}

impl AddArgs {
    pub fn text(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Task id or a unique prefix of it
    pub id: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id or a unique prefix of it
    pub id: String,
    /// New task text
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

/// A user intent that changes the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Toggle(String),
    Edit(String, String),
    Delete(String),
    ClearCompleted,
}

/// Applies one action inside a synced session.
pub async fn run(config: &Config, action: Action) -> Result<()> {
    let mut session = Session::open(config)?;
    apply(&mut session.store, action);
    session.close().await;
    Ok(())
}

/// Applies `action` to the store and reports the outcome. Returns `false`
/// when the action referred to a task that does not exist.
pub fn apply(store: &mut TaskStore, action: Action) -> bool {
    match action {
        Action::Add(text) => {
            let id = store.add(text);
            msg_success!(Message::TaskAdded(id));
            true
        }
        Action::Toggle(id) => with_task(store, &id, |store, id| {
            store.toggle(&id);
            if let Some(task) = store.get(&id) {
                msg_success!(Message::TaskToggled(task.text.clone(), task.completed));
            }
        }),
        Action::Edit(id, text) => with_task(store, &id, |store, id| {
            store.edit(&id, text.clone());
            msg_success!(Message::TaskEdited(text));
        }),
        Action::Delete(id) => with_task(store, &id, |store, id| {
            let text = store.get(&id).map(|task| task.text.clone()).unwrap_or_default();
            store.delete(&id);
            msg_success!(Message::TaskDeleted(text));
        }),
        Action::ClearCompleted => {
            match store.clear_completed() {
                0 => msg_info!(Message::NothingToClear),
                removed => msg_success!(Message::CompletedCleared(removed)),
            }
            true
        }
    }
}

fn with_task(store: &mut TaskStore, id_or_prefix: &str, f: impl FnOnce(&mut TaskStore, String)) -> bool {
    match store.resolve(id_or_prefix).map(str::to_owned) {
        Some(id) => {
            f(store, id);
            true
        }
        None => {
            msg_error!(Message::TaskNotFound(id_or_prefix.to_string()));
            false
        }
    }
}
