//! Task domain model.
//!
//! Tasks are immutable values. Every modification consumes a task and
//! returns a new one, so a clone held elsewhere is never affected.

use std::str::FromStr;

use thiserror::Error;

use super::user::UserId;

// =============================================================================
// Value Objects - Newtypes
// =============================================================================

/// Identifier of a task.
///
/// Ids are assigned by the caller; nothing in this crate generates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a `TaskId` from a raw integer.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Enums
// =============================================================================

/// Error returned when a string names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseVariantError {
    kind: &'static str,
    value: String,
}

impl ParseVariantError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The lifecycle stage of a task.
///
/// Any status may follow any other; no workflow is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// Not started yet.
    #[default]
    Todo,
    /// Currently being worked on.
    InProgress,
    /// Finished.
    Done,
}

impl Status {
    /// All statuses in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];
}

impl std::fmt::Display for Status {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Todo => write!(formatter, "Todo"),
            Self::InProgress => write!(formatter, "In Progress"),
            Self::Done => write!(formatter, "Done"),
        }
    }
}

impl FromStr for Status {
    type Err = ParseVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "todo" | "to_do" | "pending" => Ok(Self::Todo),
            "in_progress" | "inprogress" | "in progress" | "started" => Ok(Self::InProgress),
            "done" | "completed" | "complete" => Ok(Self::Done),
            _ => Err(ParseVariantError::new("status", value)),
        }
    }
}

/// The urgency of a task, ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority.
    #[default]
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// All priorities in ascending order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];
}

impl std::fmt::Display for Priority {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(formatter, "Low"),
            Self::Medium => write!(formatter, "Medium"),
            Self::High => write!(formatter, "High"),
        }
    }
}

impl FromStr for Priority {
    type Err = ParseVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "normal" => Ok(Self::Medium),
            "high" | "urgent" => Ok(Self::High),
            _ => Err(ParseVariantError::new("priority", value)),
        }
    }
}

// =============================================================================
// Task
// =============================================================================

/// A unit of work.
///
/// Equality is structural: two tasks are equal only when every field is.
///
/// # Examples
///
/// ```
/// use task_tracker::{Priority, Status, Task, TaskId};
///
/// let task = Task::new(TaskId::new(1), "Implement feature X")
///     .with_description("Detailed description here")
///     .with_priority(Priority::High)
///     .add_tag("backend")
///     .add_tag("backend");
///
/// assert_eq!(task.status, Status::Todo);
/// assert_eq!(task.tag_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    /// Identifier, unique within a store.
    pub id: TaskId,
    /// Short title.
    pub title: String,
    /// Optional detailed description.
    pub description: Option<String>,
    /// The user the task is assigned to, if any.
    pub assigned_to: Option<UserId>,
    /// The project the task belongs to, if any.
    pub project: Option<String>,
    /// Current lifecycle stage.
    pub status: Status,
    /// Current urgency.
    pub priority: Priority,
    /// Free-form tags. Order carries no meaning and duplicates are kept.
    pub tags: Vec<String>,
}

impl Task {
    /// Creates a task with the default status and priority.
    ///
    /// The task starts as `Todo` with `Medium` priority, no description,
    /// no assignee, no project and no tags.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            assigned_to: None,
            project: None,
            status: Status::default(),
            priority: Priority::default(),
            tags: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Builder-style methods (pure immutable updates)
    // -------------------------------------------------------------------------

    /// Returns a new task with the given description.
    #[must_use]
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    /// Returns a new task assigned to the given user.
    #[must_use]
    pub fn with_assignee(self, user_id: UserId) -> Self {
        Self {
            assigned_to: Some(user_id),
            ..self
        }
    }

    /// Returns a new task belonging to the given project.
    #[must_use]
    pub fn with_project(self, project: impl Into<String>) -> Self {
        Self {
            project: Some(project.into()),
            ..self
        }
    }

    /// Returns a new task with the given status.
    #[must_use]
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Returns a new task with the given priority.
    #[must_use]
    pub fn with_priority(self, priority: Priority) -> Self {
        Self { priority, ..self }
    }

    /// Returns a new task with the given tags (replacing existing tags).
    #[must_use]
    pub fn with_tags(self, tags: Vec<String>) -> Self {
        Self { tags, ..self }
    }

    // -------------------------------------------------------------------------
    // Tag operations (pure)
    // -------------------------------------------------------------------------

    /// Returns a new task with the given tag appended.
    ///
    /// The tag is appended even if the task already carries it.
    #[must_use]
    pub fn add_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Returns `true` if the task carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing == tag)
    }

    /// Returns the number of tags, duplicates included.
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
