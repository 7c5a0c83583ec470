//! In-memory task store.
//!
//! [`TaskStore`] is the single owner of the id to task mapping. Tasks go in
//! and come out as values; the store never hands out references that could
//! outlive a mutation.
//!
//! # Features
//!
//! - Ordered storage: snapshots and queries yield tasks by ascending id
//! - Duplicate ids rejected or overwritten per [`DuplicatePolicy`]
//! - Updates expressed as pure `Task -> Task` transformations

use std::collections::BTreeMap;

use thiserror::Error;

use super::config::{DuplicatePolicy, StoreConfig};
use crate::domain::{Priority, Status, Task, TaskId, create_task, get_tasks_by_priority};

// =============================================================================
// Store Error
// =============================================================================

/// Errors that can occur during store operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No task is stored under the id.
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    /// A task is already stored under the id.
    #[error("Task already exists: {0}")]
    DuplicateId(TaskId),

    /// An update transform returned a task with a different id.
    #[error("Update changed task id: expected {expected}, found {found}")]
    IdMismatch {
        /// Id of the stored task.
        expected: TaskId,
        /// Id the transform produced.
        found: TaskId,
    },
}

// =============================================================================
// Task Store
// =============================================================================

/// In-memory, single-owner task store.
///
/// Mutating methods take `&mut self`, so the compiler rules out mutation
/// while a snapshot is being built. Wrap the store in
/// `SharedTaskStore` to use it from several threads.
///
/// # Example
///
/// ```
/// use task_tracker::{StoreError, TaskId, TaskStore};
///
/// let mut store = TaskStore::new();
/// store.add_task(TaskId::new(5), "X", None, None, None)?;
///
/// let task = store.try_get_task_by_id(TaskId::new(5)).unwrap();
/// assert_eq!(task.title, "X");
///
/// let missing = store.update_task(TaskId::new(999), |task| task);
/// assert_eq!(missing, Err(StoreError::NotFound(TaskId::new(999))));
/// # Ok::<(), StoreError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: BTreeMap<TaskId, Task>,
    config: StoreConfig,
}

impl TaskStore {
    /// Creates an empty store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given configuration.
    #[must_use]
    pub const fn with_config(config: StoreConfig) -> Self {
        Self {
            tasks: BTreeMap::new(),
            config,
        }
    }

    /// Returns the store's configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Builds a task, stores it and returns the stored value.
    ///
    /// Fields left as `None` take the configured defaults; the description
    /// stays empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if `id` is already stored and the
    /// policy is [`DuplicatePolicy::Reject`]. The store is left unchanged.
    pub fn add_task(
        &mut self,
        id: TaskId,
        title: impl Into<String>,
        description: Option<String>,
        priority: Option<Priority>,
        status: Option<Status>,
    ) -> Result<Task, StoreError> {
        if self.tasks.contains_key(&id) {
            match self.config.duplicate_policy {
                DuplicatePolicy::Reject => {
                    tracing::warn!(task_id = %id, "Rejected task with duplicate id");
                    return Err(StoreError::DuplicateId(id));
                }
                DuplicatePolicy::Overwrite => {
                    tracing::debug!(task_id = %id, "Overwriting existing task");
                }
            }
        }

        let task = Task {
            description,
            ..create_task(id, title)
                .with_status(status.unwrap_or(self.config.default_status))
                .with_priority(priority.unwrap_or(self.config.default_priority))
        };

        tracing::debug!(
            task_id = %id,
            status = %task.status,
            priority = %task.priority,
            "Task added"
        );
        self.tasks.insert(id, task.clone());
        Ok(task)
    }

    /// Returns a copy of the task stored under `id`.
    #[must_use]
    pub fn try_get_task_by_id(&self, id: TaskId) -> Option<Task> {
        self.tasks.get(&id).cloned()
    }

    /// Replaces the task stored under `id` with `transform(current)`.
    ///
    /// `transform` runs exactly once when the id is present and not at all
    /// otherwise.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` if no task is stored under `id`.
    /// - `StoreError::IdMismatch` if `transform` changed the task's id.
    ///
    /// On error the store is left unchanged.
    pub fn update_task<F>(&mut self, id: TaskId, transform: F) -> Result<(), StoreError>
    where
        F: FnOnce(Task) -> Task,
    {
        let Some(current) = self.tasks.get(&id) else {
            tracing::warn!(task_id = %id, "Update of unknown task");
            return Err(StoreError::NotFound(id));
        };

        let updated = transform(current.clone());
        if updated.id != id {
            tracing::warn!(
                task_id = %id,
                returned_id = %updated.id,
                "Update transform changed the task id"
            );
            return Err(StoreError::IdMismatch {
                expected: id,
                found: updated.id,
            });
        }

        tracing::debug!(task_id = %id, status = %updated.status, "Task updated");
        self.tasks.insert(id, updated);
        Ok(())
    }

    /// Returns a snapshot of every stored task, by ascending id.
    #[must_use]
    pub fn all_tasks(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if no tasks are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns `true` if a task is stored under `id`.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
    }

    /// Returns every stored task with the given priority, by ascending id.
    #[must_use]
    pub fn tasks_by_priority(&self, priority: Priority) -> Vec<Task> {
        get_tasks_by_priority(priority, &self.tasks)
    }
}

// =============================================================================
// Tests
// =============================================================================
