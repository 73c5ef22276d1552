//! Command-line front-end.
//!
//! Every subcommand loads the task list through the repository, forwards the
//! user's intent to the store, and renders the result. Mutating commands run
//! the debounced sync for their lifetime and tear it down on exit.

pub mod init;
pub mod list;
pub mod shell;
pub mod task;

use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(task::AddArgs),
    #[command(about = "Mark a task done or not done")]
    Toggle(task::IdArgs),
    #[command(about = "Replace the text of a task")]
    Edit(task::EditArgs),
    #[command(about = "Delete a task")]
    Delete(task::IdArgs),
    #[command(about = "Delete all completed tasks")]
    Clear,
    #[command(about = "Show tasks")]
    List(list::ListArgs),
    #[command(about = "Show task counts")]
    Stats,
    #[command(about = "Interactive session")]
    Shell(shell::ShellArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            command => Self::dispatch(&Config::read()?, command).await,
        }
    }

    async fn dispatch(config: &Config, command: Commands) -> Result<()> {
        match command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => task::run(config, task::Action::Add(args.text())).await,
            Commands::Toggle(args) => task::run(config, task::Action::Toggle(args.id)).await,
            Commands::Edit(args) => task::run(config, task::Action::Edit(args.id, args.text.join(" "))).await,
            Commands::Delete(args) => task::run(config, task::Action::Delete(args.id)).await,
            Commands::Clear => task::run(config, task::Action::ClearCompleted).await,
            Commands::List(args) => list::cmd(config, args),
            Commands::Stats => list::stats(config),
            Commands::Shell(args) => shell::cmd(config, args).await,
        }
    }
}
