//! # Task List Manager
//!
//! The session engine behind every command. A [`Manager`] owns the name of
//! the current list and an in-memory copy of its tasks, and keeps the two in
//! step with the list file: tasks are loaded on every switch and saved after
//! every mutation.
//!
//! Every operation validates its input completely before touching the task
//! sequence, so a failed operation never leaves a half-applied change.
//! Failures are returned as [`ManagerError`]; only [`ManagerError::Store`]
//! is fatal.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDateTime};
use thiserror::Error;

use crate::domain::{Task, TaskStatus};
use crate::storage::{ListStore, StoreError, DEFAULT_TTL_DAYS};

/// Name of the list every session starts on
pub const DEFAULT_LIST: &str = "default";

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("List '{0}' does not exist.")]
    ListNotFound(String),

    #[error("Invalid list name '{0}'.")]
    InvalidListName(String),

    #[error("Task name and description are required!")]
    MissingField,

    #[error("Invalid status! Available statuses: 1 - Started, 2 - Paused, 3 - Completed")]
    InvalidStatus(u8),

    #[error("Task with the given ID not found!")]
    TaskNotFound(i64),

    #[error("Task ID must be a number!")]
    InvalidTaskId(String),

    #[error("Invalid task number.")]
    TaskIndexOutOfRange(i64),

    #[error("No available tasks.")]
    NoTasks,

    #[error("No tasks available to remove.")]
    NoTasksToRemove,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ManagerError {
    /// True for errors that should abort the process instead of being reported
    pub fn is_fatal(&self) -> bool {
        matches!(self, ManagerError::Store(_))
    }
}

/// Result of listing the current list's tasks
#[derive(Debug)]
pub struct TaskListing<'a> {
    /// List the tasks were read from
    pub list: &'a str,

    /// Number of tasks in the list, active or not
    pub total: usize,

    /// Active tasks paired with their 1-based position in the full list
    pub active: Vec<(usize, &'a Task)>,
}

/// Session state for one invocation
#[derive(Debug)]
pub struct Manager {
    store: ListStore,
    current_list: String,
    tasks: Vec<Task>,
    ttl_days: i64,
}

impl Manager {
    /// Opens a session on the default list
    pub fn open(store: ListStore) -> Result<Self, StoreError> {
        let tasks = store.load(DEFAULT_LIST)?;

        Ok(Self {
            store,
            current_list: DEFAULT_LIST.to_string(),
            tasks,
            ttl_days: DEFAULT_TTL_DAYS,
        })
    }

    /// Sets the retention window for the active-task view
    pub fn with_ttl_days(mut self, ttl_days: i64) -> Self {
        self.ttl_days = ttl_days;
        self
    }

    /// Name of the current list
    pub fn current_list(&self) -> &str {
        &self.current_list
    }

    /// Tasks of the current list, in order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The backing store
    pub fn store(&self) -> &ListStore {
        &self.store
    }

    /// Retention window in days
    pub fn ttl_days(&self) -> i64 {
        self.ttl_days
    }

    /// Creates (or silently overwrites) a list and makes it current
    pub fn create_list(&mut self, name: &str) -> Result<(), ManagerError> {
        validate_list_name(name)?;

        self.store.save(name, &[])?;
        self.current_list = name.to_string();
        self.tasks.clear();
        Ok(())
    }

    /// Makes an existing list current and reloads its tasks
    pub fn switch_list(&mut self, name: &str) -> Result<(), ManagerError> {
        validate_list_name(name)?;
        if !self.store.exists(name) {
            return Err(ManagerError::ListNotFound(name.to_string()));
        }

        self.tasks = self.store.load(name)?;
        self.current_list = name.to_string();
        Ok(())
    }

    /// Names of every list in the data directory
    pub fn list_all_lists(&self) -> Result<BTreeSet<String>, ManagerError> {
        Ok(self.store.list_all()?)
    }

    /// Appends a new task and returns its 1-based position
    pub fn add_task(
        &mut self,
        name: &str,
        description: &str,
        list: Option<&str>,
    ) -> Result<usize, ManagerError> {
        if let Some(list) = list {
            validate_list_name(list)?;
            if !self.store.exists(list) {
                return Err(ManagerError::ListNotFound(list.to_string()));
            }
        }
        if name.trim().is_empty() || description.trim().is_empty() {
            return Err(ManagerError::MissingField);
        }

        if let Some(list) = list {
            self.switch_list(list)?;
        }

        self.tasks.push(Task::new(name, description));
        self.save()?;
        Ok(self.tasks.len())
    }

    /// Lists the active tasks of the current (or given) list
    pub fn list_tasks(
        &mut self,
        status: Option<TaskStatus>,
        list: Option<&str>,
    ) -> Result<TaskListing<'_>, ManagerError> {
        self.list_tasks_at(status, list, Local::now().naive_local())
    }

    /// Same as [`Manager::list_tasks`], judging task age against `now`
    ///
    /// Positions are those of the full list, so filtered-out tasks leave
    /// gaps in the numbering.
    pub fn list_tasks_at(
        &mut self,
        status: Option<TaskStatus>,
        list: Option<&str>,
        now: NaiveDateTime,
    ) -> Result<TaskListing<'_>, ManagerError> {
        self.target(list)?;

        if self.tasks.is_empty() {
            return Err(ManagerError::NoTasks);
        }

        let ttl_days = self.ttl_days;
        let active = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| (i + 1, task))
            .filter(|(_, task)| task.is_active(now, ttl_days))
            .filter(|(_, task)| status.as_ref().map_or(true, |s| &task.status == s))
            .collect();

        Ok(TaskListing {
            list: &self.current_list,
            total: self.tasks.len(),
            active,
        })
    }

    /// Sets the status of the task at `task_id` (1-based) from a status code
    pub fn update_status(
        &mut self,
        task_id: i64,
        code: u8,
        list: Option<&str>,
    ) -> Result<&Task, ManagerError> {
        self.target(list)?;

        if task_id < 1 || task_id as usize > self.tasks.len() {
            return Err(ManagerError::TaskNotFound(task_id));
        }
        let status = TaskStatus::from_code(code).ok_or(ManagerError::InvalidStatus(code))?;

        let index = task_id as usize - 1;
        self.tasks[index].status = status;
        self.save()?;
        Ok(&self.tasks[index])
    }

    /// Removes the task at `task_id` (1-based, as typed) and returns it
    pub fn remove_task(&mut self, task_id: &str, list: Option<&str>) -> Result<Task, ManagerError> {
        self.target(list)?;

        if self.tasks.is_empty() {
            return Err(ManagerError::NoTasksToRemove);
        }
        let position: i64 = task_id
            .trim()
            .parse()
            .map_err(|_| ManagerError::InvalidTaskId(task_id.to_string()))?;
        if position < 1 || position as usize > self.tasks.len() {
            return Err(ManagerError::TaskIndexOutOfRange(position));
        }

        let removed = self.tasks.remove(position as usize - 1);
        self.save()?;
        Ok(removed)
    }

    /// Deletes a list file
    ///
    /// Returns true if the deleted list was current, in which case the
    /// session falls back to the default list.
    pub fn delete_list(&mut self, name: &str) -> Result<bool, ManagerError> {
        validate_list_name(name)?;
        if !self.store.exists(name) {
            return Err(ManagerError::ListNotFound(name.to_string()));
        }

        self.store.delete(name)?;

        if self.current_list != name {
            return Ok(false);
        }

        self.tasks = self.store.load(DEFAULT_LIST)?;
        self.current_list = DEFAULT_LIST.to_string();
        Ok(true)
    }

    /// Switches to `list` when one is given
    fn target(&mut self, list: Option<&str>) -> Result<(), ManagerError> {
        match list {
            Some(list) => self.switch_list(list),
            None => Ok(()),
        }
    }

    fn save(&self) -> Result<(), StoreError> {
        self.store.save(&self.current_list, &self.tasks)
    }
}

/// Rejects names that would escape the data directory or map to no file
fn validate_list_name(name: &str) -> Result<(), ManagerError> {
    let bad = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\');

    if bad {
        Err(ManagerError::InvalidListName(name.to_string()))
    } else {
        Ok(())
    }
}
