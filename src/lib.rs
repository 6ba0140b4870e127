//! tasklist - a small command-line task tracker
//!
//! Tasks live in named lists, one JSON file per list in the data directory.
//! The [`manager::Manager`] owns the current list for the duration of a
//! command; [`cli`] parses arguments and reports outcomes.

pub mod domain;
pub mod storage;
pub mod manager;
pub mod cli;

pub use domain::{Task, TaskStatus};
pub use manager::{Manager, ManagerError};
pub use storage::{Config, ListStore};
