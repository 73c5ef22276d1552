use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session::open_repository;
use crate::libs::store::TaskStore;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which tasks to show; defaults to the configured filter
    #[arg(short, long, value_enum)]
    filter: Option<TaskFilter>,
}

pub fn cmd(config: &Config, args: ListArgs) -> Result<()> {
    let store = TaskStore::load(&open_repository(config)?);
    render(&store, args.filter.unwrap_or(config.default_filter));
    Ok(())
}

pub fn stats(config: &Config) -> Result<()> {
    let store = TaskStore::load(&open_repository(config)?);
    render_stats(&store);
    Ok(())
}

/// Prints the filtered view followed by the completion footer.
pub fn render(store: &TaskStore, filter: TaskFilter) {
    let tasks = store.filtered_view(filter);
    if tasks.is_empty() {
        msg_info!(Message::NoTasks(filter.to_string()));
    } else {
        msg_print!(Message::TasksHeader(filter.to_string()));
        View::tasks(&tasks);
    }

    let counts = store.counts();
    msg_print!(Message::CountsFooter(counts.completed, counts.all));
}

pub fn render_stats(store: &TaskStore) {
    View::counts(&store.counts());
}
