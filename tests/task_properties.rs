//! Property-based tests for tasks and the task store.
//!
//! - Updates change exactly one field and are idempotent
//! - Adding a tag always grows the tag list by one
//! - Priority filtering returns exactly the matching subset
//! - Store updates apply the transform once and are visible in snapshots

use std::collections::BTreeMap;

use proptest::prelude::*;
use task_tracker::{
    Priority, Status, StoreError, Task, TaskId, TaskStore, UserId, add_tag_to_task,
    get_tasks_by_priority, update_task_priority, update_task_status,
};

// =============================================================================
// Strategies
// =============================================================================

fn status_strategy() -> impl Strategy<Value = Status> {
    prop::sample::select(Status::ALL.to_vec())
}

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop::sample::select(Priority::ALL.to_vec())
}

fn task_strategy() -> impl Strategy<Value = Task> {
    (
        any::<i64>(),
        "[a-zA-Z ]{0,16}",
        proptest::option::of("[a-z ]{0,24}"),
        proptest::option::of(any::<i64>()),
        proptest::option::of("[A-Z][a-z]{0,8}"),
        status_strategy(),
        priority_strategy(),
        prop::collection::vec("[a-z]{1,6}", 0..5),
    )
        .prop_map(
            |(id, title, description, assignee, project, status, priority, tags)| Task {
                id: TaskId::new(id),
                title,
                description,
                assigned_to: assignee.map(UserId::new),
                project,
                status,
                priority,
                tags,
            },
        )
}

fn task_map_strategy() -> impl Strategy<Value = BTreeMap<TaskId, Task>> {
    prop::collection::vec(task_strategy(), 0..20)
        .prop_map(|tasks| tasks.into_iter().map(|task| (task.id, task)).collect())
}

// =============================================================================
// Update Operations
// =============================================================================

proptest! {
    /// Only the status changes
    #[test]
    fn prop_update_status_changes_only_status(task in task_strategy(), status in status_strategy()) {
        let updated = update_task_status(status, task.clone());
        prop_assert_eq!(updated.status, status);
        prop_assert_eq!(Task { status: task.status, ..updated }, task);
    }

    /// Setting the same status twice equals setting it once
    #[test]
    fn prop_update_status_idempotent(task in task_strategy(), status in status_strategy()) {
        let once = update_task_status(status, task);
        let twice = update_task_status(status, once.clone());
        prop_assert_eq!(twice, once);
    }

    /// Only the priority changes
    #[test]
    fn prop_update_priority_changes_only_priority(task in task_strategy(), priority in priority_strategy()) {
        let updated = update_task_priority(priority, task.clone());
        prop_assert_eq!(updated.priority, priority);
        prop_assert_eq!(Task { priority: task.priority, ..updated }, task);
    }

    /// One more tag, even when it is already present
    #[test]
    fn prop_add_tag_grows_by_one(task in task_strategy(), tag in "[a-z]{1,6}") {
        let before = task.tags.len();
        let updated = add_tag_to_task(tag.clone(), task);
        prop_assert_eq!(updated.tags.len(), before + 1);
        prop_assert!(updated.has_tag(&tag));

        let again = add_tag_to_task(tag, updated);
        prop_assert_eq!(again.tags.len(), before + 2);
    }
}

// =============================================================================
// Priority Filter
// =============================================================================

proptest! {
    /// The result is exactly the matching subset of the map
    #[test]
    fn prop_get_tasks_by_priority_exact_subset(tasks in task_map_strategy(), priority in priority_strategy()) {
        let result = get_tasks_by_priority(priority, &tasks);
        let expected: Vec<Task> = tasks
            .values()
            .filter(|task| task.priority == priority)
            .cloned()
            .collect();
        prop_assert_eq!(result, expected);
    }

    /// Every task lands in exactly one priority bucket
    #[test]
    fn prop_get_tasks_by_priority_partitions(tasks in task_map_strategy()) {
        let total: usize = Priority::ALL
            .iter()
            .map(|priority| get_tasks_by_priority(*priority, &tasks).len())
            .sum();
        prop_assert_eq!(total, tasks.len());
    }
}

// =============================================================================
// Task Store
// =============================================================================

proptest! {
    /// A stored task comes back with its id, title and default fields
    #[test]
    fn prop_store_round_trip(id in any::<i64>(), title in "[a-zA-Z ]{0,16}") {
        let mut store = TaskStore::new();
        store.add_task(TaskId::new(id), title.clone(), None, None, None).unwrap();

        let task = store.try_get_task_by_id(TaskId::new(id)).unwrap();
        prop_assert_eq!(task.id, TaskId::new(id));
        prop_assert_eq!(task.title, title);
        prop_assert_eq!(task.status, Status::Todo);
        prop_assert_eq!(task.priority, Priority::Medium);
    }

    /// Updating an absent id fails and leaves the count alone
    #[test]
    fn prop_update_missing_is_not_found(ids in prop::collection::btree_set(0_i64..100, 0..10), missing in 100_i64..1000) {
        let mut store = TaskStore::new();
        for id in &ids {
            store.add_task(TaskId::new(*id), "T", None, None, None).unwrap();
        }

        let result = store.update_task(TaskId::new(missing), |task| task);
        prop_assert_eq!(result, Err(StoreError::NotFound(TaskId::new(missing))));
        prop_assert_eq!(store.task_count(), ids.len());
    }

    /// The stored value becomes `transform(previous)` and snapshots see it
    #[test]
    fn prop_update_stores_transformed_value(status in status_strategy(), priority in priority_strategy(), tag in "[a-z]{1,6}") {
        let mut store = TaskStore::new();
        let previous = store.add_task(TaskId::new(5), "X", None, None, None).unwrap();
        let transform = |task: Task| add_tag_to_task(tag.clone(), update_task_priority(priority, update_task_status(status, task)));

        store.update_task(TaskId::new(5), transform).unwrap();

        let expected = transform(previous);
        prop_assert_eq!(store.try_get_task_by_id(TaskId::new(5)), Some(expected.clone()));
        prop_assert_eq!(store.all_tasks(), vec![expected]);
    }

    /// Ids stay unique no matter how often they are re-added
    #[test]
    fn prop_store_ids_unique(ids in prop::collection::vec(0_i64..20, 0..50)) {
        let mut store = TaskStore::new();
        let mut accepted = std::collections::BTreeSet::new();
        for id in ids {
            let result = store.add_task(TaskId::new(id), "T", None, None, None);
            if accepted.insert(id) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(StoreError::DuplicateId(TaskId::new(id))));
            }
        }
        prop_assert_eq!(store.task_count(), accepted.len());
    }
}
