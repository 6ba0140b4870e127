//! JSON storage for task lists
//!
//! Each list lives in `<name>.json` inside the data directory as a
//! pretty-printed array of task records.

use std::collections::BTreeSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::domain::Task;

/// Extension of list files
pub const LIST_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse list file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize tasks")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Store for task lists, one JSON file per list
#[derive(Debug, Clone)]
pub struct ListStore {
    dir: PathBuf,
}

impl ListStore {
    /// Creates a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the backing file for a list
    pub fn path_for(&self, list: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", list, LIST_EXTENSION))
    }

    /// True if the list's backing file is present
    pub fn exists(&self, list: &str) -> bool {
        self.path_for(list).is_file()
    }

    /// Reads every task of a list, in order
    ///
    /// A missing file is an empty list.
    pub fn load(&self, list: &str) -> Result<Vec<Task>, StoreError> {
        let path = self.path_for(list);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&path).map_err(|e| StoreError::io(&path, e))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|source| StoreError::Parse { path, source })
    }

    /// Overwrites the list with the full task sequence
    pub fn save(&self, list: &str, tasks: &[Task]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))?;

        let path = self.path_for(list);
        let temp_path = path.with_extension(format!("{}.tmp", LIST_EXTENSION));

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(|e| StoreError::io(&temp_path, e))?;

            let mut writer = BufWriter::new(file);
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
            tasks.serialize(&mut ser).map_err(StoreError::Serialize)?;

            writeln!(writer).map_err(|e| StoreError::io(&temp_path, e))?;
            writer.flush().map_err(|e| StoreError::io(&temp_path, e))?;
        }

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(|e| StoreError::io(&path, e))
    }

    /// Removes a list's backing file, returning false if there was none
    pub fn delete(&self, list: &str) -> Result<bool, StoreError> {
        let path = self.path_for(list);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::io(&path, e)),
        }
    }

    /// Names of all lists in the data directory, sorted
    pub fn list_all(&self) -> Result<BTreeSet<String>, StoreError> {
        let mut names = BTreeSet::new();

        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(names),
            Err(e) => return Err(StoreError::io(&self.dir, e)),
        };

        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(&self.dir, e))?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(LIST_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.insert(stem.to_string());
            }
        }

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskStatus;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn make_task(seq: u32) -> Task {
        let created = NaiveDate::from_ymd_opt(2024, 5, seq)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Task::with_created_at(
            format!("Task {}", seq),
            format!("Description {}", seq),
            TaskStatus::Todo,
            created,
        )
    }

    #[test]
    fn load_missing_list_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = ListStore::new(dir.path());

        assert!(!store.exists("work"));
        assert!(store.load("work").unwrap().is_empty());
    }

    #[test]
    fn save_and_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = ListStore::new(dir.path());

        let mut tasks = vec![make_task(3), make_task(1), make_task(2)];
        tasks[1].status = TaskStatus::Completed;

        store.save("work", &tasks).unwrap();
        assert!(store.exists("work"));

        let loaded = store.load("work").unwrap();
        assert_eq!(loaded, tasks);

        // Saving what was loaded writes the same bytes
        let before = fs::read_to_string(store.path_for("work")).unwrap();
        store.save("work", &loaded).unwrap();
        let after = fs::read_to_string(store.path_for("work")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn save_empty_list_creates_file() {
        let dir = TempDir::new().unwrap();
        let store = ListStore::new(dir.path());

        store.save("empty", &[]).unwrap();

        let content = fs::read_to_string(store.path_for("empty")).unwrap();
        assert_eq!(content.trim(), "[]");
        assert!(!dir.path().join("empty.json.tmp").exists());
    }

    #[test]
    fn saved_file_is_indented() {
        let dir = TempDir::new().unwrap();
        let store = ListStore::new(dir.path());

        store.save("work", &[make_task(1)]).unwrap();

        let content = fs::read_to_string(store.path_for("work")).unwrap();
        assert!(content.starts_with("[\n    {\n        \"name\": \"Task 1\""));
        assert!(content.contains("\"created_at\": \"2024-05-01T10:00:00\""));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let store = ListStore::new(dir.path());
        fs::write(store.path_for("broken"), "{ not json").unwrap();

        let err = store.load("broken").unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn list_all_only_reports_list_files() {
        let dir = TempDir::new().unwrap();
        let store = ListStore::new(dir.path());

        store.save("work", &[]).unwrap();
        store.save("default", &[make_task(1)]).unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        fs::write(dir.path().join("half.json.tmp"), "[]").unwrap();
        fs::create_dir(dir.path().join("dir.json")).unwrap();

        let names: Vec<_> = store.list_all().unwrap().into_iter().collect();
        assert_eq!(names, vec!["default".to_string(), "work".to_string()]);
    }

    #[test]
    fn list_all_in_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = ListStore::new(dir.path().join("nope"));

        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn delete_reports_whether_file_existed() {
        let dir = TempDir::new().unwrap();
        let store = ListStore::new(dir.path());
        store.save("work", &[]).unwrap();

        assert!(store.delete("work").unwrap());
        assert!(!store.exists("work"));
        assert!(!store.delete("work").unwrap());
    }
}
