//! Server-side use cases over the [`TaskRepository`] port.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for server-side task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task exists for the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Result type for server-side task services.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Creates and persists a new task.
pub struct CreateTask<R>
where
    R: TaskRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> CreateTask<R>
where
    R: TaskRepository + ?Sized,
{
    /// Creates the use case over a repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates the title, assigns a fresh identifier, and stores the task.
    ///
    /// `completed` defaults to `false` when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for a blank title, in which case
    /// the repository is never called, or [`TaskServiceError::Repository`]
    /// when the store rejects the write.
    pub async fn execute(&self, title: &str, completed: Option<bool>) -> TaskServiceResult<Task> {
        let task = Task::create(TaskId::new(), title, completed)?;
        self.repository.save(&task).await?;
        tracing::debug!(task_id = %task.id(), "task created");
        Ok(task)
    }
}

impl<R> Clone for CreateTask<R>
where
    R: TaskRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

/// Lists every stored task.
pub struct GetAllTasks<R>
where
    R: TaskRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> GetAllTasks<R>
where
    R: TaskRepository + ?Sized,
{
    /// Creates the use case over a repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the repository's tasks unchanged and in the same order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn execute(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_all().await?)
    }
}

impl<R> Clone for GetAllTasks<R>
where
    R: TaskRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

/// Looks up a single task.
pub struct GetTask<R>
where
    R: TaskRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> GetTask<R>
where
    R: TaskRepository + ?Sized,
{
    /// Creates the use case over a repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the task with the given identifier, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn execute(&self, id: &TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }
}

impl<R> Clone for GetTask<R>
where
    R: TaskRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

/// Marks a stored task as completed.
pub struct CompleteTask<R>
where
    R: TaskRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> CompleteTask<R>
where
    R: TaskRepository + ?Sized,
{
    /// Creates the use case over a repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Replaces the stored task with its completed copy and returns it.
    ///
    /// Completing an already completed task stores the same value again.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] for an unknown identifier or
    /// [`TaskServiceError::Repository`] when the store fails.
    pub async fn execute(&self, id: &TaskId) -> TaskServiceResult<Task> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskServiceError::NotFound(id.clone()))?;
        let completed = current.complete();
        self.repository.save(&completed).await?;
        tracing::debug!(task_id = %completed.id(), "task completed");
        Ok(completed)
    }
}

impl<R> Clone for CompleteTask<R>
where
    R: TaskRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

/// Shared handle to a type-erased server repository.
pub type SharedTaskRepository = Arc<dyn TaskRepository>;

/// The server-side use cases wired to one repository instance.
///
/// Built once at process start and handed to every inbound adapter.
#[derive(Clone)]
pub struct TaskUseCases {
    /// Task creation.
    pub create: CreateTask<dyn TaskRepository>,
    /// Task listing.
    pub get_all: GetAllTasks<dyn TaskRepository>,
    /// Single task lookup.
    pub get: GetTask<dyn TaskRepository>,
    /// Task completion.
    pub complete: CompleteTask<dyn TaskRepository>,
}

impl TaskUseCases {
    /// Wires every use case to the same repository.
    #[must_use]
    pub fn new(repository: SharedTaskRepository) -> Self {
        Self {
            create: CreateTask::new(Arc::clone(&repository)),
            get_all: GetAllTasks::new(Arc::clone(&repository)),
            get: GetTask::new(Arc::clone(&repository)),
            complete: CompleteTask::new(repository),
        }
    }
}
