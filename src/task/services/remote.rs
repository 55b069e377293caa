//! Client-side use cases over the [`RemoteTaskRepository`] port.

use crate::task::{
    domain::{Task, TaskDomainError, TaskTitle},
    ports::{RemoteTaskError, RemoteTaskRepository},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for client-side task operations.
#[derive(Debug, Error)]
pub enum RemoteTaskServiceError {
    /// Local validation failed before any request was sent.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The remote repository failed.
    #[error(transparent)]
    Remote(#[from] RemoteTaskError),
}

/// Result type for client-side task services.
pub type RemoteTaskServiceResult<T> = Result<T, RemoteTaskServiceError>;

/// Creates a task through a remote service.
pub struct RemoteCreateTask<R>
where
    R: RemoteTaskRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> RemoteCreateTask<R>
where
    R: RemoteTaskRepository + ?Sized,
{
    /// Creates the use case over a remote repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Checks the title locally, then asks the remote service to create the
    /// task. The original, untrimmed title is sent.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskServiceError::Domain`] for a blank title without
    /// contacting the remote service, or [`RemoteTaskServiceError::Remote`]
    /// when the remote call fails.
    pub async fn execute(&self, title: &str) -> RemoteTaskServiceResult<Task> {
        TaskTitle::new(title)?;
        Ok(self.repository.create(title, false).await?)
    }
}

impl<R> Clone for RemoteCreateTask<R>
where
    R: RemoteTaskRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}

/// Lists tasks held by a remote service.
pub struct RemoteGetAllTasks<R>
where
    R: RemoteTaskRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> RemoteGetAllTasks<R>
where
    R: RemoteTaskRepository + ?Sized,
{
    /// Creates the use case over a remote repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the remote service's tasks unchanged and in the same order.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskServiceError::Remote`] when the remote call fails.
    pub async fn execute(&self) -> RemoteTaskServiceResult<Vec<Task>> {
        Ok(self.repository.get_all().await?)
    }
}

impl<R> Clone for RemoteGetAllTasks<R>
where
    R: RemoteTaskRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repository))
    }
}
