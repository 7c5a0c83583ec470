//! # task-tracker
//!
//! An in-memory task tracking model built from immutable values.
//!
//! ## Overview
//!
//! - **Domain**: [`User`], [`Task`], [`Status`], [`Priority`] and the
//!   [`Displayable`] capability, plus pure copy-with-change operations
//!   such as [`update_task_status`] and [`add_tag_to_task`].
//! - **Infrastructure**: [`TaskStore`], the single owner of the id to task
//!   mapping, configured through [`StoreConfig`].
//!
//! ## Feature Flags
//!
//! - `sync` (default): [`SharedTaskStore`], a thread-safe store handle
//! - `serde`: `Serialize`/`Deserialize` for all domain values
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use task_tracker::{Priority, Status, TaskId, TaskStore, update_task_status};
//!
//! let mut store = TaskStore::new();
//! store
//!     .add_task(TaskId::new(5), "Write docs", None, Some(Priority::High), None)
//!     .unwrap();
//!
//! store
//!     .update_task(TaskId::new(5), |task| update_task_status(Status::Done, task))
//!     .unwrap();
//!
//! let task = store.try_get_task_by_id(TaskId::new(5)).unwrap();
//! assert_eq!(task.status, Status::Done);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod domain;
pub mod infrastructure;

pub use domain::{
    Displayable, ParseVariantError, Priority, Status, Task, TaskId, User, UserId, add_tag_to_task,
    create_task, get_tasks_by_priority, print_displayable_item, update_task_priority,
    update_task_status,
};
#[cfg(feature = "sync")]
pub use infrastructure::SharedTaskStore;
pub use infrastructure::{
    ConfigurationError, DuplicatePolicy, StoreConfig, StoreConfigBuilder, StoreError, TaskStore,
};
