//! Storage layer for tl
//!
//! One data directory holding `tasks.json`, an ordered array of task
//! records owned by the store.
//!
//! Writes are atomic (temp file + rename) so readers never see a partial
//! file. A missing or malformed `tasks.json` loads as an empty list rather
//! than failing; write failures surface to the caller.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::record::TaskRecord;

/// File name behind the `tasks` key.
pub const TASKS_FILE: &str = "tasks.json";

/// Storage manager for tl state
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    /// Create a storage manager rooted at the given data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Default data directory from the platform conventions
    /// (e.g. `~/.local/share/tl` on Linux).
    pub fn default_dir() -> Result<PathBuf> {
        directories::ProjectDirs::from("", "", "tl")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                Error::OperationFailed("could not determine a data directory".to_string())
            })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir.join(TASKS_FILE)
    }

    /// Load the full task list.
    ///
    /// Missing file means a fresh store. Unreadable or malformed content is
    /// logged and treated as empty so a corrupt file never bricks the tool.
    pub fn load_tasks(&self) -> Vec<TaskRecord> {
        let path = self.tasks_file();
        if !path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "could not read tasks, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "malformed tasks file, starting empty");
                Vec::new()
            }
        }
    }

    /// Persist the full task list in store order.
    pub fn save_tasks(&self, tasks: &[TaskRecord]) -> Result<()> {
        let path = self.tasks_file();
        let json = serde_json::to_string_pretty(tasks)?;
        self.write_atomic(&path, json.as_bytes())
            .map_err(|err| Error::Persistence {
                path,
                message: err.to_string(),
            })
    }

    /// Write data atomically using temp file + rename.
    fn write_atomic(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Priority, TaskDraft};
    use tempfile::TempDir;

    fn sample(title: &str) -> TaskRecord {
        TaskDraft::new(title, "", vec![], Priority::Medium)
            .expect("draft")
            .into_record()
    }

    #[test]
    fn missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join("nested"));
        assert!(storage.load_tasks().is_empty());
    }

    #[test]
    fn save_and_load_round_trip_preserves_order() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());

        let tasks = vec![sample("second"), sample("first")];
        storage.save_tasks(&tasks).unwrap();

        let loaded = storage.load_tasks();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].title, "second");
        assert_eq!(loaded[1].title, "first");
    }

    #[test]
    fn malformed_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().to_path_buf());
        fs::write(storage.tasks_file(), "{not json").unwrap();
        assert!(storage.load_tasks().is_empty());
    }

    #[test]
    fn save_creates_data_dir() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join("a/b"));
        storage.save_tasks(&[sample("x")]).unwrap();
        assert!(storage.tasks_file().exists());
    }
}
