//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose | Example |
//! |---------|---------|---------|
//! | `add_list` | Create an empty list and switch to it | `add_list work` |
//! | `lists` | Show every list in the data directory | `lists` |
//! | `delete_list` | Remove a list file | `delete_list work` |
//! | `add_task` | Append a task | `add_task "Buy milk" "2%" --list work` |
//! | `list_tasks` | Show active tasks | `list_tasks --status 1` |
//! | `update_status` | Change a task's status | `update_status 1 3` |
//! | `remove_task` | Delete a task by position | `remove_task 2` |
//!
//! ## Failures
//!
//! Business failures (unknown list, bad task number, ...) are printed as a
//! single line and the process still exits 0. Unreadable list files, I/O
//! errors and a broken config abort with a non-zero exit code.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! tasklist --verbose list_tasks
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod list;
mod output;
mod task;

use anyhow::Result;

use crate::manager::ManagerError;

pub use app::{run, Cli, Commands};
pub use output::Output;

/// Prints a non-fatal error, or hands a fatal one back to the caller
fn report(output: &Output, err: ManagerError) -> Result<()> {
    if err.is_fatal() {
        return Err(err.into());
    }
    output.error(&err.to_string());
    Ok(())
}
