//! Interactive session.
//!
//! Reads one command per line from stdin and keeps the store and its
//! debounced sync alive for the whole session, so a quick run of edits is
//! written once.

use super::list::{render, render_stats};
use super::task::{apply, Action};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::task::TaskFilter;
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use clap::Args;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Args)]
pub struct ShellArgs {
    /// Filter to start with; defaults to the configured filter
    #[arg(short, long, value_enum)]
    filter: Option<TaskFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Mutate(Action),
    Filter(TaskFilter),
    List,
    Stats,
    Help,
    Quit,
    Empty,
}

pub async fn cmd(config: &Config, args: ShellArgs) -> Result<()> {
    let mut session = Session::open(config)?;
    let mut filter = args.filter.unwrap_or(config.default_filter);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    msg_print!(Message::ShellWelcome(session.store.len()));
    loop {
        print!("{}", Message::ShellPrompt(filter.to_string()));
        std::io::stdout().flush()?;

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                msg_error!(Message::ShellInputError(e.to_string()));
                break;
            }
        };

        match parse_line(&line) {
            Ok(ShellCommand::Mutate(action)) => {
                if apply(&mut session.store, action) {
                    render(&session.store, filter);
                }
            }
            Ok(ShellCommand::Filter(selected)) => {
                filter = selected;
                msg_info!(Message::ShellFilterChanged(filter.to_string()));
                render(&session.store, filter);
            }
            Ok(ShellCommand::List) => render(&session.store, filter),
            Ok(ShellCommand::Stats) => render_stats(&session.store),
            Ok(ShellCommand::Help) => msg_print!(Message::ShellHelp),
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Empty) => {}
            Err(message) => msg_error!(message),
        }
    }

    msg_print!(Message::ShellGoodbye);
    session.close().await;
    Ok(())
}

/// Parses one input line. The first word is the command; the rest of the
/// line is its argument text.
pub fn parse_line(line: &str) -> Result<ShellCommand, Message> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let command = match command.to_ascii_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "add" | "a" => ShellCommand::Mutate(Action::Add(rest.to_string())),
        "toggle" | "t" => ShellCommand::Mutate(Action::Toggle(required(rest, "toggle <id>")?.to_string())),
        "edit" | "e" => {
            let (id, text) = match rest.split_once(char::is_whitespace) {
                Some((id, text)) => (id, text.trim()),
                None => return Err(Message::ShellMissingArgument("edit <id> <text>".to_string())),
            };
            ShellCommand::Mutate(Action::Edit(id.to_string(), text.to_string()))
        }
        "delete" | "rm" => ShellCommand::Mutate(Action::Delete(required(rest, "delete <id>")?.to_string())),
        "clear" => ShellCommand::Mutate(Action::ClearCompleted),
        "filter" | "f" => {
            let name = required(rest, "filter all|active|completed")?;
            ShellCommand::Filter(name.parse().map_err(Message::InvalidFilter)?)
        }
        "list" | "ls" => ShellCommand::List,
        "stats" => ShellCommand::Stats,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(Message::ShellUnknownCommand(other.to_string())),
    };

    Ok(command)
}

fn required<'a>(argument: &'a str, usage: &str) -> Result<&'a str, Message> {
    if argument.is_empty() {
        Err(Message::ShellMissingArgument(usage.to_string()))
    } else {
        Ok(argument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_the_whole_rest_of_the_line() {
        assert_eq!(parse_line("add  buy milk and eggs ").unwrap(), ShellCommand::Mutate(Action::Add("buy milk and eggs".to_string())));
    }

    /// The core accepts empty text, so a bare `add` is not an error.
    #[test]
    fn bare_add_adds_empty_text() {
        assert_eq!(parse_line("add").unwrap(), ShellCommand::Mutate(Action::Add(String::new())));
    }

    #[test]
    fn edit_splits_id_from_text() {
        assert_eq!(
            parse_line("edit 5f0c walk the dog").unwrap(),
            ShellCommand::Mutate(Action::Edit("5f0c".to_string(), "walk the dog".to_string()))
        );
        assert!(matches!(parse_line("edit 5f0c"), Err(Message::ShellMissingArgument(_))));
    }

    #[test]
    fn filter_names_are_validated() {
        assert_eq!(parse_line("filter completed").unwrap(), ShellCommand::Filter(TaskFilter::Completed));
        assert!(matches!(parse_line("filter done"), Err(Message::InvalidFilter(_))));
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_line("   ").unwrap(), ShellCommand::Empty);
        assert!(matches!(parse_line("frobnicate"), Err(Message::ShellUnknownCommand(c)) if c == "frobnicate"));
    }
}
