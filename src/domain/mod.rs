//! Domain models for tasklist
//!
//! Contains the task record and its status rules without any I/O concerns.

mod task;

pub use task::{StatusCategory, Task, TaskStatus};
