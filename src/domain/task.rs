//! Task domain model
//!
//! A task is a name, a description, a status and the moment it was created.
//! Tasks carry no identity of their own: they are addressed by their
//! 1-based position within a list.

use std::fmt;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Status of a task
///
/// Serialized as the bare label used in list files. Labels this tool does
/// not set itself are kept verbatim in [`TaskStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    /// Initial status, before any update
    #[default]
    Todo,
    Started,
    Paused,
    Completed,
    /// Any other label found in a list file
    Other(String),
}

impl TaskStatus {
    /// Maps a numeric status code (as typed on the command line) to a status
    ///
    /// Only `1`, `2` and `3` are valid. `TODO` cannot be set by code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(TaskStatus::Started),
            2 => Some(TaskStatus::Paused),
            3 => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    /// Maps a stored label back to a status; labels are case-sensitive
    pub fn from_label(label: &str) -> Self {
        match label {
            "TODO" => TaskStatus::Todo,
            "Started" => TaskStatus::Started,
            "Paused" => TaskStatus::Paused,
            "Completed" => TaskStatus::Completed,
            other => TaskStatus::Other(other.to_string()),
        }
    }

    /// Returns the label written to list files and shown to the user
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::Started => "Started",
            TaskStatus::Paused => "Paused",
            TaskStatus::Completed => "Completed",
            TaskStatus::Other(label) => label,
        }
    }

    /// Returns the display category (used for colouring only)
    pub fn category(&self) -> StatusCategory {
        match self {
            TaskStatus::Started => StatusCategory::Warm,
            TaskStatus::Paused => StatusCategory::Halted,
            TaskStatus::Completed => StatusCategory::Done,
            TaskStatus::Todo | TaskStatus::Other(_) => StatusCategory::Neutral,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TaskStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(TaskStatus::from_label(&label))
    }
}

/// Presentation bucket for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Warm,
    Halted,
    Done,
    Neutral,
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// A single task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Short label
    pub name: String,

    /// Free-form body
    pub description: String,

    /// Current status
    #[serde(default)]
    pub status: TaskStatus,

    /// When the task was created (local time, no offset)
    ///
    /// Records without a timestamp get the load time.
    #[serde(default = "now")]
    created_at: NaiveDateTime,
}

impl Task {
    /// Creates a new task with `TODO` status, stamped with the current time
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_created_at(name, description, TaskStatus::Todo, now())
    }

    /// Restores a task with a known status and creation time
    pub fn with_created_at(
        name: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            status,
            created_at,
        }
    }

    /// When the task was created
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Whole days elapsed between creation and `now`
    pub fn age_days(&self, now: NaiveDateTime) -> i64 {
        (now - self.created_at).num_days()
    }

    /// True if the task is still inside the retention window
    pub fn is_active(&self, now: NaiveDateTime, ttl_days: i64) -> bool {
        self.age_days(now) <= ttl_days
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.name, self.description, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn new_task_has_todo_status() {
        let task = Task::new("Buy milk", "2%");
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.description, "2%");
    }

    #[test]
    fn status_codes() {
        assert_eq!(TaskStatus::from_code(1), Some(TaskStatus::Started));
        assert_eq!(TaskStatus::from_code(2), Some(TaskStatus::Paused));
        assert_eq!(TaskStatus::from_code(3), Some(TaskStatus::Completed));
        assert_eq!(TaskStatus::from_code(0), None);
        assert_eq!(TaskStatus::from_code(4), None);
    }

    #[test]
    fn status_serializes_with_file_labels() {
        assert_eq!(serde_json::to_string(&TaskStatus::Todo).unwrap(), "\"TODO\"");
        assert_eq!(
            serde_json::to_string(&TaskStatus::Completed).unwrap(),
            "\"Completed\""
        );
        let status: TaskStatus = serde_json::from_str("\"Paused\"").unwrap();
        assert_eq!(status, TaskStatus::Paused);
    }

    #[test]
    fn status_categories() {
        assert_eq!(TaskStatus::Started.category(), StatusCategory::Warm);
        assert_eq!(TaskStatus::Paused.category(), StatusCategory::Halted);
        assert_eq!(TaskStatus::Completed.category(), StatusCategory::Done);
        assert_eq!(TaskStatus::Todo.category(), StatusCategory::Neutral);
        assert_eq!(
            TaskStatus::Other("Blocked".to_string()).category(),
            StatusCategory::Neutral
        );
    }

    #[test]
    fn unknown_status_labels_are_kept_verbatim() {
        for label in ["Blocked", "started", ""] {
            let json = format!("\"{}\"", label);
            let status: TaskStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(status, TaskStatus::Other(label.to_string()));
            assert_eq!(serde_json::to_string(&status).unwrap(), json);
            assert_eq!(status.to_string(), label);
        }
    }

    #[test]
    fn task_with_unknown_status_round_trips() {
        let json = r#"{"name": "a", "description": "b", "status": "Blocked", "created_at": "2024-02-02T10:00:00"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::Other("Blocked".to_string()));

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["status"], "Blocked");
    }

    #[test]
    fn task_json_keeps_timestamp() {
        let created = at(2024, 3, 1);
        let task = Task::with_created_at("Write report", "Q1", TaskStatus::Started, created);

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["name"], "Write report");
        assert_eq!(json["status"], "Started");
        assert_eq!(json["created_at"], "2024-03-01T09:30:00");

        let parsed: Task = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, task);
    }

    #[test]
    fn parses_isoformat_with_microseconds() {
        let json = r#"{
            "name": "Old",
            "description": "from an older file",
            "status": "Paused",
            "created_at": "2024-01-15T08:00:01.123456"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::Paused);
        assert_eq!(task.created_at().date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn missing_timestamp_defaults_to_now() {
        let json = r#"{"name": "a", "description": "b", "status": "TODO"}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert!(task.is_active(now(), 7));
        assert_eq!(task.age_days(now()), 0);
    }

    #[test]
    fn retention_window_is_inclusive() {
        let created = at(2024, 3, 1);
        let task = Task::with_created_at("a", "b", TaskStatus::Todo, created);

        assert!(task.is_active(created + Duration::days(7), 7));
        assert!(task.is_active(created + Duration::days(7) + Duration::hours(23), 7));
        assert!(!task.is_active(created + Duration::days(8), 7));
    }

    #[test]
    fn display_for_diagnostics() {
        let task = Task::with_created_at("a", "b", TaskStatus::Completed, at(2024, 1, 1));
        assert_eq!(task.to_string(), "a: b (Completed)");
    }
}
