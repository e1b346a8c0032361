//! Session controller: the single owner of mutable state.
//!
//! The presentation side never touches the store or the filter directly; it
//! calls one of the typed operations below and re-reads `view()` afterwards.

use std::collections::HashSet;

use ulid::Ulid;

use crate::error::Result;
use crate::record::{TaskDraft, TaskRecord};
use crate::storage::Storage;
use crate::store::TaskStore;
use crate::view::{derive_view, StatusFilter, TaskView, ViewFilter};

#[derive(Debug)]
pub struct Session {
    store: TaskStore,
    filter: ViewFilter,
}

impl Session {
    pub fn open(storage: Storage) -> Self {
        Self {
            store: TaskStore::load(storage),
            filter: ViewFilter::default(),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    // Mutating intents

    pub fn create(&mut self, draft: TaskDraft) -> Result<TaskRecord> {
        self.store.create(draft)
    }

    pub fn toggle(&mut self, id: Ulid) -> Result<bool> {
        self.store.toggle(id)
    }

    pub fn delete(&mut self, id: Ulid) -> Result<bool> {
        self.store.delete(id)
    }

    pub fn clear_completed(&mut self) -> Result<usize> {
        self.store.clear_completed()
    }

    pub fn reorder(&mut self, visible_order: &[Ulid]) -> Result<()> {
        self.store.reorder(visible_order)
    }

    pub fn resolve_id(&self, input: &str) -> Result<Ulid> {
        self.store.resolve_id(input)
    }

    // Filter intents (transient, never persisted)

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn set_selected_tags(&mut self, tags: HashSet<String>) {
        self.filter.selected_tags = tags;
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.filter.selected_tags.remove(tag) {
            self.filter.selected_tags.insert(tag.to_string());
        }
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.filter.set_search(query);
    }

    /// Derive the current view: visible subset, remaining-work counter, and
    /// the tag index.
    pub fn view(&self) -> TaskView {
        derive_view(self.store.tasks(), &self.filter)
    }
}
