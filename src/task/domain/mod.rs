//! Domain model for TODO tasks.
//!
//! The domain holds the task entity and its validation rules and keeps all
//! storage and transport concerns outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::{TaskId, TaskTitle};
pub use task::{Task, TaskRecord};
