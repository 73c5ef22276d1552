//! Display implementation for taskmaster application messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent across the one-shot commands and the interactive shell.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

const SHELL_HELP: &str = "Commands:
  add <text>          add a task
  toggle <id>         mark a task done or not done
  edit <id> <text>    replace a task's text
  delete <id>         remove a task
  clear               remove all completed tasks
  filter <name>       show all, active or completed tasks
  list                show tasks for the current filter
  stats               show counts
  help                show this help
  quit                leave the shell
Ids may be shortened to any unique prefix.";

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Task added with id {}", id),
            Message::TaskToggled(text, true) => format!("Completed: {}", text),
            Message::TaskToggled(text, false) => format!("Reopened: {}", text),
            Message::TaskEdited(text) => format!("Task updated: {}", text),
            Message::TaskDeleted(text) => format!("Task deleted: {}", text),
            Message::TaskNotFound(id) => format!("No task matches '{}'", id),
            Message::CompletedCleared(1) => "Cleared 1 completed task".to_string(),
            Message::CompletedCleared(count) => format!("Cleared {} completed tasks", count),
            Message::NothingToClear => "There are no completed tasks to clear".to_string(),
            Message::NoTasks(filter) => format!("No {} tasks", filter),
            Message::TasksHeader(filter) => format!("Tasks ({}):", filter),
            Message::CountsFooter(completed, total) => format!("{} of {} completed", completed, total),
            Message::InvalidFilter(error) => format!("Invalid filter: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults will be used".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError(path) => format!("Failed to parse configuration file {}", path),
            Message::ConfigWizardHeader => "Taskmaster settings".to_string(),
            Message::PromptStorageKey => "Storage key for the task list".to_string(),
            Message::PromptDebounceMs => "Write delay after the last change (milliseconds)".to_string(),
            Message::PromptTeardown => "Pending write on exit".to_string(),
            Message::PromptDefaultFilter => "Default filter".to_string(),

            // === SYNC MESSAGES ===
            Message::PendingWriteFlushed => "Saved pending changes".to_string(),
            Message::PendingWriteDiscarded => "Pending changes were not saved".to_string(),

            // === SHELL MESSAGES ===
            Message::ShellWelcome(count) => format!("Taskmaster shell, {} tasks loaded. Type 'help' for commands.", count),
            Message::ShellHelp => SHELL_HELP.to_string(),
            Message::ShellPrompt(filter) => format!("[{}]> ", filter),
            Message::ShellUnknownCommand(command) => format!("Unknown command '{}', type 'help'", command),
            Message::ShellMissingArgument(usage) => format!("Usage: {}", usage),
            Message::ShellFilterChanged(filter) => format!("Showing {} tasks", filter),
            Message::ShellGoodbye => "Bye".to_string(),
            Message::ShellInputError(error) => format!("Failed to read input: {}", error),
        };

        write!(f, "{}", text)
    }
}
