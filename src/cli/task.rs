//! Task CLI commands

use anyhow::Result;

use super::output::Output;
use super::report;
use crate::domain::TaskStatus;
use crate::manager::{Manager, ManagerError};

pub fn add(
    manager: &mut Manager,
    output: &Output,
    name: &str,
    description: &str,
    list: Option<&str>,
) -> Result<()> {
    match manager.add_task(name, description, list) {
        Ok(position) => {
            output.verbose_ctx(
                "add_task",
                &format!("Appended at position {} in '{}'", position, manager.current_list()),
            );
            output.success("Task added.");
            Ok(())
        }
        Err(ManagerError::ListNotFound(list)) => {
            output.error(&format!("List '{}' does not exist. Task was not added.", list));
            Ok(())
        }
        Err(e) => report(output, e),
    }
}

pub fn list(
    manager: &mut Manager,
    output: &Output,
    status: Option<u8>,
    list: Option<&str>,
) -> Result<()> {
    let filter = status.and_then(TaskStatus::from_code);
    output.verbose_ctx(
        "list_tasks",
        &format!("Status filter: {:?}, ttl: {} day(s)", filter, manager.ttl_days()),
    );

    let listing = match manager.list_tasks(filter, list) {
        Ok(listing) => listing,
        Err(e) => return report(output, e),
    };

    output.verbose_ctx(
        "list_tasks",
        &format!("{} of {} task(s) active", listing.active.len(), listing.total),
    );

    output.header(&format!("List: ({}):", listing.list));
    output.blank();

    if listing.active.is_empty() {
        output.error("No active tasks.");
        return Ok(());
    }

    output.success("Active tasks:");
    for (position, task) in &listing.active {
        output.task(*position, task);
    }

    Ok(())
}

pub fn update_status(
    manager: &mut Manager,
    output: &Output,
    task_id: i64,
    code: u8,
    list: Option<&str>,
) -> Result<()> {
    match manager.update_status(task_id, code, list) {
        Ok(task) => {
            output.notice(&format!("'{}' Status: {}", task.name, task.status));
            Ok(())
        }
        Err(e) => report(output, e),
    }
}

pub fn remove(
    manager: &mut Manager,
    output: &Output,
    task_id: &str,
    list: Option<&str>,
) -> Result<()> {
    match manager.remove_task(task_id, list) {
        Ok(task) => {
            output.verbose_ctx("remove_task", &format!("Removed {}", task));
            output.success(&format!("Task '{}' has been removed.", task.name));
            Ok(())
        }
        Err(e) => report(output, e),
    }
}
