//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::output::Output;
use super::{list, task};
use crate::manager::Manager;
use crate::storage::{Config, ListStore};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(author, version, about = "Track tasks in named, file-backed lists")]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct Cli {
    /// Directory holding the list files (defaults to the working directory)
    #[arg(long, global = true, env = "TASKLIST_DIR")]
    pub dir: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, env = "TASKLIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
#[command(rename_all = "snake_case")]
pub enum Commands {
    /// Add a task
    #[command(after_help = "Example: tasklist add_task \"Task 1\" \"Task description\" --list mylist")]
    AddTask {
        /// Task name
        name: String,

        /// Task description
        description: String,

        /// List to add the task to (must already exist)
        #[arg(long)]
        list: Option<String>,
    },

    /// List active tasks
    #[command(after_help = "Example: tasklist list_tasks --status 1 --list mylist")]
    ListTasks {
        /// Show only tasks with this status (1-Started, 2-Paused, 3-Completed)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
        status: Option<u8>,

        /// List to show
        #[arg(long)]
        list: Option<String>,
    },

    /// Update task status
    #[command(after_help = "Example: tasklist update_status 2 1 --list mylist")]
    UpdateStatus {
        /// Task ID
        #[arg(allow_hyphen_values = true)]
        task_id: i64,

        /// New status (1-Started, 2-Paused, 3-Completed)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=3))]
        status: u8,

        /// List holding the task
        #[arg(long)]
        list: Option<String>,
    },

    /// Remove a task
    #[command(after_help = "Example: tasklist remove_task 3 --list mylist")]
    RemoveTask {
        /// Task ID to remove
        #[arg(allow_hyphen_values = true)]
        task_id: String,

        /// List holding the task
        #[arg(long)]
        list: Option<String>,
    },

    /// Delete a task list
    #[command(after_help = "Example: tasklist delete_list mylist")]
    DeleteList {
        /// List name
        name: String,
    },

    /// Create a new list
    #[command(after_help = "Example: tasklist add_list newlist")]
    AddList {
        /// New list name
        name: String,
    },

    /// List all available task lists
    #[command(after_help = "Example: tasklist lists")]
    Lists,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.verbose);

    output.verbose("tasklist starting");

    let (config, source) = Config::load(cli.config.as_deref())?;
    match source {
        Some(path) => output.verbose_ctx("config", &format!("Loaded {}", path.display())),
        None => output.verbose_ctx("config", "Using defaults"),
    }
    if !config.color {
        colored::control::set_override(false);
    }

    let dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve working directory")?,
    };
    output.verbose_ctx("store", &format!("Data directory: {}", dir.display()));

    let mut manager = Manager::open(ListStore::new(dir))?.with_ttl_days(config.ttl_days);
    output.verbose_ctx(
        "store",
        &format!(
            "Loaded {} task(s) from '{}'",
            manager.tasks().len(),
            manager.current_list()
        ),
    );

    match cli.command {
        Commands::AddTask {
            name,
            description,
            list,
        } => task::add(&mut manager, &output, &name, &description, list.as_deref())?,
        Commands::ListTasks { status, list } => {
            task::list(&mut manager, &output, status, list.as_deref())?
        }
        Commands::UpdateStatus {
            task_id,
            status,
            list,
        } => task::update_status(&mut manager, &output, task_id, status, list.as_deref())?,
        Commands::RemoveTask { task_id, list } => {
            task::remove(&mut manager, &output, &task_id, list.as_deref())?
        }
        Commands::DeleteList { name } => list::delete(&mut manager, &output, &name)?,
        Commands::AddList { name } => list::create(&mut manager, &output, &name)?,
        Commands::Lists => list::show_all(&manager, &output)?,
    }

    output.verbose("Command completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn subcommands_use_snake_case() {
        let cli = Cli::try_parse_from(["tasklist", "add_task", "Buy milk", "2%", "--list", "work"]).unwrap();
        match cli.command {
            Commands::AddTask { name, description, list } => {
                assert_eq!(name, "Buy milk");
                assert_eq!(description, "2%");
                assert_eq!(list.as_deref(), Some("work"));
            }
            _ => panic!("expected add_task"),
        }
    }

    #[test]
    fn status_codes_are_restricted() {
        assert!(Cli::try_parse_from(["tasklist", "update_status", "1", "4"]).is_err());
        assert!(Cli::try_parse_from(["tasklist", "list_tasks", "--status", "0"]).is_err());
        assert!(Cli::try_parse_from(["tasklist", "update_status", "1", "3"]).is_ok());
    }

    #[test]
    fn update_status_accepts_negative_ids() {
        let cli = Cli::try_parse_from(["tasklist", "update_status", "-1", "1"]).unwrap();
        match cli.command {
            Commands::UpdateStatus { task_id, status, list } => {
                assert_eq!(task_id, -1);
                assert_eq!(status, 1);
                assert!(list.is_none());
            }
            _ => panic!("expected update_status"),
        }
    }

    #[test]
    fn remove_task_takes_raw_text() {
        let cli = Cli::try_parse_from(["tasklist", "remove_task", "-1"]).unwrap();
        match cli.command {
            Commands::RemoveTask { task_id, list } => {
                assert_eq!(task_id, "-1");
                assert!(list.is_none());
            }
            _ => panic!("expected remove_task"),
        }
    }
}
