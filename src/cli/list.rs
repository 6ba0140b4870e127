//! List CLI commands

use anyhow::Result;

use super::output::Output;
use super::report;
use crate::manager::{Manager, DEFAULT_LIST};

pub fn create(manager: &mut Manager, output: &Output, name: &str) -> Result<()> {
    match manager.create_list(name) {
        Ok(()) => {
            output.verbose_ctx(
                "add_list",
                &format!("Wrote {}", manager.store().path_for(name).display()),
            );
            output.success(&format!("Created new list: {}", name));
            Ok(())
        }
        Err(e) => report(output, e),
    }
}

pub fn delete(manager: &mut Manager, output: &Output, name: &str) -> Result<()> {
    match manager.delete_list(name) {
        Ok(reset) => {
            if reset {
                output.verbose_ctx(
                    "delete_list",
                    &format!("Switched to the {} task list", DEFAULT_LIST),
                );
            }
            output.success(&format!("List '{}' has been deleted.", name));
            Ok(())
        }
        Err(e) => report(output, e),
    }
}

pub fn show_all(manager: &Manager, output: &Output) -> Result<()> {
    let lists = match manager.list_all_lists() {
        Ok(lists) => lists,
        Err(e) => return report(output, e),
    };

    if lists.is_empty() {
        output.error("No available task lists.");
        return Ok(());
    }

    output.header("Available task lists:");
    for name in &lists {
        output.line(&format!("- {}", name));
    }

    Ok(())
}
