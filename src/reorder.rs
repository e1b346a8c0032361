//! Reconciliation of a dragged visible-subset order into the full list.
//!
//! A drag gesture only rearranges the records that were visible under the
//! filters active at the time. The new full order ranks every record by its
//! index in the supplied visible order when present, and by its original
//! index otherwise; a stable sort over that rank keeps hidden records in
//! their prior relative positions while the visible ones adopt the new ones.

use ulid::Ulid;

use crate::record::TaskRecord;

/// Reorder `tasks` in place to match `visible_order`.
///
/// Ids in `visible_order` that are not in `tasks` are ignored (stale drag
/// payloads). Applying the same order twice is a no-op.
pub fn apply_visible_order(tasks: &mut Vec<TaskRecord>, visible_order: &[Ulid]) {
    let rank_of = |task: &TaskRecord, original_index: usize| -> usize {
        visible_order
            .iter()
            .position(|id| *id == task.id)
            .unwrap_or(original_index)
    };

    let mut ranked: Vec<(usize, TaskRecord)> = tasks
        .drain(..)
        .enumerate()
        .map(|(index, task)| (rank_of(&task, index), task))
        .collect();
    // sort_by_key is stable, so records sharing a rank keep their prior order
    ranked.sort_by_key(|(rank, _)| *rank);
    tasks.extend(ranked.into_iter().map(|(_, task)| task));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Priority, TaskDraft};

    fn task(title: &str) -> TaskRecord {
        TaskDraft::new(title, "", vec![], Priority::Medium)
            .expect("draft")
            .into_record()
    }

    fn titles(tasks: &[TaskRecord]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn visible_subset_reorders_around_hidden_record() {
        // Store [A,B,C,D] with B hidden; drag visible [A,C,D] into [C,A,D].
        let mut tasks = vec![task("A"), task("B"), task("C"), task("D")];
        let order = vec![tasks[2].id, tasks[0].id, tasks[3].id];

        apply_visible_order(&mut tasks, &order);
        assert_eq!(titles(&tasks), vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn reapplying_the_same_order_is_a_noop() {
        let mut tasks = vec![task("A"), task("B"), task("C"), task("D")];
        let order = vec![tasks[2].id, tasks[0].id, tasks[3].id];

        apply_visible_order(&mut tasks, &order);
        let once = titles(&tasks)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        apply_visible_order(&mut tasks, &order);
        assert_eq!(titles(&tasks), once);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut tasks = vec![task("A"), task("B")];
        let order = vec![Ulid::new(), tasks[1].id, tasks[0].id];

        apply_visible_order(&mut tasks, &order);
        assert_eq!(titles(&tasks), vec!["B", "A"]);
    }

    #[test]
    fn hidden_records_keep_relative_order_when_interleaved() {
        // Hidden B and D interleave with visible A, C, E.
        let mut tasks = vec![task("A"), task("B"), task("C"), task("D"), task("E")];
        let order = vec![tasks[4].id, tasks[2].id, tasks[0].id];

        apply_visible_order(&mut tasks, &order);
        let result = titles(&tasks);
        let b = result.iter().position(|t| *t == "B").unwrap();
        let d = result.iter().position(|t| *t == "D").unwrap();
        assert!(b < d, "hidden records must not swap: {result:?}");

        let e = result.iter().position(|t| *t == "E").unwrap();
        let c = result.iter().position(|t| *t == "C").unwrap();
        let a = result.iter().position(|t| *t == "A").unwrap();
        assert!(e < c && c < a, "visible order must hold: {result:?}");
    }

    #[test]
    fn hidden_leading_record_stays_in_front() {
        let mut tasks = vec![task("B"), task("A"), task("C")];
        let order = vec![tasks[2].id, tasks[1].id];

        apply_visible_order(&mut tasks, &order);
        assert_eq!(titles(&tasks), vec!["B", "C", "A"]);
    }

    #[test]
    fn empty_order_leaves_store_untouched() {
        let mut tasks = vec![task("A"), task("B")];
        apply_visible_order(&mut tasks, &[]);
        assert_eq!(titles(&tasks), vec!["A", "B"]);
    }
}
