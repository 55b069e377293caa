//! Task entity and its wire record.

use super::{TaskDomainError, TaskId, TaskTitle};
use serde::{Deserialize, Serialize};

/// A single TODO item.
///
/// Tasks are values: state changes such as completion return a new task
/// carrying the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TaskRecord", into = "TaskRecord")]
pub struct Task {
    id: TaskId,
    title: String,
    completed: bool,
}

/// Plain record crossing storage and transport boundaries.
///
/// Serialises as `{ "id": ..., "title": ..., "completed": ... }`; a missing
/// `completed` field reads as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task identifier.
    pub id: String,
    /// Task title as entered.
    pub title: String,
    /// Whether the task is done.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates a validated task.
    ///
    /// `completed` defaults to `false` when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank after
    /// trimming.
    pub fn create(
        id: TaskId,
        title: impl Into<String>,
        completed: Option<bool>,
    ) -> Result<Self, TaskDomainError> {
        let validated = TaskTitle::new(title)?;
        Ok(Self {
            id,
            title: validated.into_inner(),
            completed: completed.unwrap_or(false),
        })
    }

    /// Reconstructs a task from a boundary record without validation.
    #[must_use]
    pub fn from_record(record: TaskRecord) -> Self {
        Self {
            id: TaskId::from(record.id),
            title: record.title,
            completed: record.completed,
        }
    }

    /// Converts the task into its boundary record.
    #[must_use]
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: self.id.as_str().to_owned(),
            title: self.title.clone(),
            completed: self.completed,
        }
    }

    /// Returns a completed copy of this task.
    #[must_use]
    pub fn complete(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            completed: true,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Self::from_record(record)
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.into_inner(),
            title: task.title,
            completed: task.completed,
        }
    }
}
