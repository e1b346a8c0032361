//! The record store: the single source of truth for task order and state.
//!
//! Every mutation persists the full list through the storage collaborator
//! before returning, so each intent is one atomic step of
//! mutate -> persist -> (caller re-derives the view).

use ulid::Ulid;

use crate::error::{Error, Result};
use crate::record::{TaskDraft, TaskRecord};
use crate::reorder::apply_visible_order;
use crate::storage::Storage;

#[derive(Debug)]
pub struct TaskStore {
    storage: Storage,
    tasks: Vec<TaskRecord>,
}

impl TaskStore {
    /// Load the store from disk. Missing or corrupt data starts empty.
    pub fn load(storage: Storage) -> Self {
        let tasks = storage.load_tasks();
        Self { storage, tasks }
    }

    /// All records in store order.
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Create a task from a validated draft and insert it at the front
    /// (most-recent-first). Returns the stored record.
    pub fn create(&mut self, draft: TaskDraft) -> Result<TaskRecord> {
        let record = draft.into_record();
        self.tasks.insert(0, record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Flip `done` for the given id. Returns `Ok(false)` when the id is
    /// absent: a stale id (e.g. racing a delete) is a no-op, not a failure.
    pub fn toggle(&mut self, id: Ulid) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.done = !task.done;
        self.persist()?;
        Ok(true)
    }

    /// Remove the record with the given id. `Ok(false)` when absent.
    pub fn delete(&mut self, id: Ulid) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Remove every completed record. Returns how many were removed.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.done);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Commit a new ordering of the currently visible subset.
    pub fn reorder(&mut self, visible_order: &[Ulid]) -> Result<()> {
        apply_visible_order(&mut self.tasks, visible_order);
        self.persist()
    }

    /// Resolve user input to a task id: exact match, or a unique
    /// case-insensitive prefix of the ULID.
    pub fn resolve_id(&self, input: &str) -> Result<Ulid> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidArgument("task id cannot be empty".to_string()));
        }
        let needle = trimmed.to_ascii_uppercase();

        let mut matches: Vec<Ulid> = Vec::new();
        for task in &self.tasks {
            let id = task.id.to_string();
            if id == needle {
                return Ok(task.id);
            }
            if id.starts_with(&needle) {
                matches.push(task.id);
            }
        }

        match matches.len() {
            0 => Err(Error::TaskNotFound(trimmed.to_string())),
            1 => Ok(matches[0]),
            _ => Err(Error::InvalidArgument(format!(
                "ambiguous task id '{}': {}",
                trimmed,
                matches
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }

    fn persist(&self) -> Result<()> {
        self.storage.save_tasks(&self.tasks)
    }
}
