//! Domain module for task tracking.
//!
//! This module contains the value types and the pure operations over them.

pub mod display;
pub mod operations;
pub mod task;
pub mod user;

pub use display::{Displayable, print_displayable_item};
pub use operations::{
    add_tag_to_task, create_task, get_tasks_by_priority, update_task_priority, update_task_status,
};
pub use task::{ParseVariantError, Priority, Status, Task, TaskId};
pub use user::{User, UserId};
