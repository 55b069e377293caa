//! Repository port for clients that reach tasks through a remote service.
//!
//! The remote service owns persistence and identifier assignment, so the
//! client-side contract only lists and creates tasks.

use crate::task::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote task repository operations.
pub type RemoteTaskResult<T> = Result<T, RemoteTaskError>;

/// Client-side task access contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteTaskRepository: Send + Sync {
    /// Fetches all tasks known to the remote service.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError`] when the request fails or the response
    /// cannot be decoded.
    async fn get_all(&self) -> RemoteTaskResult<Vec<Task>>;

    /// Asks the remote service to create a task and returns the stored task,
    /// including its server-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError::Rejected`] when the service refuses the
    /// task, or another [`RemoteTaskError`] on transport failure.
    async fn create(&self, title: &str, completed: bool) -> RemoteTaskResult<Task>;
}

/// Errors returned by remote task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RemoteTaskError {
    /// The request could not be delivered or the response not read.
    #[error("network error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The remote service refused the request with a message.
    #[error("{0}")]
    Rejected(String),

    /// The remote service answered with an unexpected HTTP status.
    #[error("unexpected response status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The response arrived but did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl RemoteTaskError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
