//! Pure task operations.
//!
//! Each update consumes a task and returns a copy with one field changed.
//! Callers that need the original keep a clone.

use super::task::{Priority, Status, Task, TaskId};

/// Creates a task with status `Todo`, priority `Medium` and nothing else set.
///
/// Id collisions are not checked here; the store enforces uniqueness.
#[must_use]
pub fn create_task(id: TaskId, title: impl Into<String>) -> Task {
    Task::new(id, title)
}

/// Returns `task` with its status replaced.
#[must_use]
pub fn update_task_status(status: Status, task: Task) -> Task {
    task.with_status(status)
}

/// Returns `task` with its priority replaced.
#[must_use]
pub fn update_task_priority(priority: Priority, task: Task) -> Task {
    task.with_priority(priority)
}

/// Returns `task` with `tag` appended, even if already present.
#[must_use]
pub fn add_tag_to_task(tag: impl Into<String>, task: Task) -> Task {
    task.add_tag(tag)
}

/// Returns every task of the mapping whose priority equals `priority`.
///
/// Results follow the mapping's iteration order, so a `BTreeMap` yields
/// them by ascending id.
pub fn get_tasks_by_priority<'a, I>(priority: Priority, tasks: I) -> Vec<Task>
where
    I: IntoIterator<Item = (&'a TaskId, &'a Task)>,
{
    tasks
        .into_iter()
        .filter(|(_, task)| task.priority == priority)
        .map(|(_, task)| task.clone())
        .collect()
}
