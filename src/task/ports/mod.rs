//! Port contracts for task access.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.
//! The server role persists tasks itself; the client role delegates to a
//! remote service. The two roles are separate traits.

pub mod remote;
pub mod repository;

pub use remote::{RemoteTaskError, RemoteTaskRepository, RemoteTaskResult};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

#[cfg(test)]
pub use remote::MockRemoteTaskRepository;
#[cfg(test)]
pub use repository::MockTaskRepository;
