//! Thread-safe store handle.
//!
//! [`SharedTaskStore`] wraps a [`TaskStore`] in `Arc<RwLock<...>>` so that
//! clones of the handle can be used from several threads. Every mutation
//! holds the write lock and snapshots are taken under the read lock, so no
//! reader ever observes a half-applied update.

use std::sync::Arc;

use parking_lot::RwLock;

use super::config::StoreConfig;
use super::store::{StoreError, TaskStore};
use crate::domain::{Priority, Status, Task, TaskId};

/// Cloneable, thread-safe handle to a [`TaskStore`].
///
/// # Example
///
/// ```
/// use task_tracker::{SharedTaskStore, TaskId};
///
/// let store = SharedTaskStore::new();
/// let handle = store.clone();
///
/// std::thread::spawn(move || {
///     handle.add_task(TaskId::new(1), "From a worker", None, None, None)
/// })
/// .join()
/// .unwrap()
/// .unwrap();
///
/// assert_eq!(store.task_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedTaskStore {
    inner: Arc<RwLock<TaskStore>>,
}

impl SharedTaskStore {
    /// Creates an empty shared store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty shared store with the given configuration.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self::from_store(TaskStore::with_config(config))
    }

    /// Wraps an existing store.
    #[must_use]
    pub fn from_store(store: TaskStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// See [`TaskStore::add_task`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` under the reject policy.
    pub fn add_task(
        &self,
        id: TaskId,
        title: impl Into<String>,
        description: Option<String>,
        priority: Option<Priority>,
        status: Option<Status>,
    ) -> Result<Task, StoreError> {
        self.inner
            .write()
            .add_task(id, title, description, priority, status)
    }

    /// See [`TaskStore::try_get_task_by_id`].
    #[must_use]
    pub fn try_get_task_by_id(&self, id: TaskId) -> Option<Task> {
        self.inner.read().try_get_task_by_id(id)
    }

    /// See [`TaskStore::update_task`].
    ///
    /// `transform` runs while the write lock is held and must not use this
    /// handle, or it will deadlock.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` or `StoreError::IdMismatch`.
    pub fn update_task<F>(&self, id: TaskId, transform: F) -> Result<(), StoreError>
    where
        F: FnOnce(Task) -> Task,
    {
        self.inner.write().update_task(id, transform)
    }

    /// See [`TaskStore::all_tasks`].
    #[must_use]
    pub fn all_tasks(&self) -> Vec<Task> {
        self.inner.read().all_tasks()
    }

    /// See [`TaskStore::task_count`].
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.inner.read().task_count()
    }

    /// See [`TaskStore::tasks_by_priority`].
    #[must_use]
    pub fn tasks_by_priority(&self, priority: Priority) -> Vec<Task> {
        self.inner.read().tasks_by_priority(priority)
    }

    /// Returns a copy of the store as it is now.
    #[must_use]
    pub fn snapshot(&self) -> TaskStore {
        self.inner.read().clone()
    }
}

impl From<TaskStore> for SharedTaskStore {
    fn from(store: TaskStore) -> Self {
        Self::from_store(store)
    }
}
