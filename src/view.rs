//! Derived views over the task list.
//!
//! Everything here is pure: filters never mutate the store and never change
//! the relative order of what they let through.

use std::collections::HashSet;

use clap::ValueEnum;
use serde::Serialize;

use crate::record::TaskRecord;

/// Which completion states the view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Transient filter state. Lives for one session, never persisted.
#[derive(Debug, Clone, Default)]
pub struct ViewFilter {
    pub status: StatusFilter,
    pub selected_tags: HashSet<String>,
    pub search: String,
}

impl ViewFilter {
    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_lowercase();
    }

    fn matches(&self, task: &TaskRecord) -> bool {
        let matches_status = match self.status {
            StatusFilter::All => true,
            StatusFilter::Active => !task.done,
            StatusFilter::Completed => task.done,
        };

        let matches_search = self.search.is_empty()
            || task.title.to_lowercase().contains(&self.search)
            || task.description.to_lowercase().contains(&self.search);

        // OR across selected tags: one shared tag is enough
        let matches_tags = self.selected_tags.is_empty()
            || task.tags.iter().any(|tag| self.selected_tags.contains(tag));

        matches_status && matches_search && matches_tags
    }
}

/// The derived view handed to the presentation side.
#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    /// Visible records in store order.
    pub visible: Vec<TaskRecord>,
    /// Count of not-done records over the whole store, independent of filters.
    pub active_count: usize,
    /// Every distinct tag in use, first-seen order.
    pub tags: Vec<String>,
}

/// Apply the filter to the full list.
pub fn derive_view(tasks: &[TaskRecord], filter: &ViewFilter) -> TaskView {
    let visible = tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect();
    let active_count = tasks.iter().filter(|task| !task.done).count();

    TaskView {
        visible,
        active_count,
        tags: collect_tags(tasks),
    }
}

/// Union of every record's tags, in the order they first appear.
pub fn collect_tags(tasks: &[TaskRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for task in tasks {
        for tag in &task.tags {
            if seen.insert(tag.clone()) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Priority, TaskDraft};

    fn task(title: &str, desc: &str, tags: &[&str], done: bool) -> TaskRecord {
        let mut record = TaskDraft::new(
            title,
            desc,
            tags.iter().map(|t| t.to_string()).collect(),
            Priority::Medium,
        )
        .expect("draft")
        .into_record();
        record.done = done;
        record
    }

    fn titles(view: &TaskView) -> Vec<&str> {
        view.visible.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn default_filter_shows_everything_in_store_order() {
        let tasks = vec![
            task("one", "", &[], false),
            task("two", "", &[], true),
            task("three", "", &[], false),
        ];
        let view = derive_view(&tasks, &ViewFilter::default());
        assert_eq!(titles(&view), vec!["one", "two", "three"]);
        assert_eq!(view.active_count, 2);
    }

    #[test]
    fn status_filter_splits_active_and_completed() {
        let tasks = vec![task("a", "", &[], false), task("b", "", &[], true)];

        let mut filter = ViewFilter::default();
        filter.status = StatusFilter::Active;
        assert_eq!(titles(&derive_view(&tasks, &filter)), vec!["a"]);

        filter.status = StatusFilter::Completed;
        assert_eq!(titles(&derive_view(&tasks, &filter)), vec!["b"]);
    }

    #[test]
    fn active_count_ignores_the_filter() {
        let tasks = vec![
            task("a", "", &[], false),
            task("b", "", &[], true),
            task("c", "", &[], false),
        ];
        let mut filter = ViewFilter::default();
        filter.status = StatusFilter::Completed;
        let view = derive_view(&tasks, &filter);
        assert_eq!(view.visible.len(), 1);
        assert_eq!(view.active_count, 2);
    }

    #[test]
    fn search_matches_title_or_description_case_insensitively() {
        let tasks = vec![
            task("Buy Milk", "", &[], false),
            task("call mum", "about the MILK run", &[], false),
            task("other", "", &[], false),
        ];
        let mut filter = ViewFilter::default();
        filter.set_search("milk");
        assert_eq!(
            titles(&derive_view(&tasks, &filter)),
            vec!["Buy Milk", "call mum"]
        );
    }

    #[test]
    fn tag_filter_uses_or_semantics() {
        let tasks = vec![task("x", "", &["a", "b"], false)];

        let mut filter = ViewFilter::default();
        filter.selected_tags = ["b".to_string(), "c".to_string()].into_iter().collect();
        assert_eq!(derive_view(&tasks, &filter).visible.len(), 1);

        filter.selected_tags = ["c".to_string(), "d".to_string()].into_iter().collect();
        assert!(derive_view(&tasks, &filter).visible.is_empty());
    }

    #[test]
    fn tag_filter_is_case_sensitive() {
        let tasks = vec![task("x", "", &["Work"], false)];
        let mut filter = ViewFilter::default();
        filter.selected_tags = ["work".to_string()].into_iter().collect();
        assert!(derive_view(&tasks, &filter).visible.is_empty());
    }

    #[test]
    fn predicates_compose_as_conjunction() {
        let tasks = vec![
            task("milk run", "", &["errand"], false),
            task("milk run done", "", &["errand"], true),
            task("milk other", "", &["home"], false),
        ];
        let mut filter = ViewFilter::default();
        filter.status = StatusFilter::Active;
        filter.set_search("milk");
        filter.selected_tags = ["errand".to_string()].into_iter().collect();
        assert_eq!(titles(&derive_view(&tasks, &filter)), vec!["milk run"]);
    }

    #[test]
    fn filtered_view_is_a_subsequence_of_store_order() {
        let tasks = vec![
            task("1", "", &["a"], false),
            task("2", "", &["b"], true),
            task("3", "", &["a"], true),
            task("4", "", &[], false),
        ];
        let statuses = [StatusFilter::All, StatusFilter::Active, StatusFilter::Completed];
        for status in statuses {
            for tag in [None, Some("a"), Some("b")] {
                let mut filter = ViewFilter::default();
                filter.status = status;
                if let Some(tag) = tag {
                    filter.selected_tags = [tag.to_string()].into_iter().collect();
                }
                let view = derive_view(&tasks, &filter);
                let mut store_iter = tasks.iter();
                for visible in &view.visible {
                    assert!(
                        store_iter.any(|t| t.id == visible.id),
                        "view not a subsequence for {status:?}/{tag:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn tags_collect_in_first_seen_order() {
        let tasks = vec![
            task("a", "", &["shop", "errand"], false),
            task("b", "", &["errand", "home"], false),
        ];
        assert_eq!(collect_tags(&tasks), vec!["shop", "errand", "home"]);
    }
}
