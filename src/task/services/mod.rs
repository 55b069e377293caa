//! Application services (use cases) for task creation and retrieval.

mod remote;
mod tasks;

pub use remote::{
    RemoteCreateTask, RemoteGetAllTasks, RemoteTaskServiceError, RemoteTaskServiceResult,
};
pub use tasks::{
    CompleteTask, CreateTask, GetAllTasks, GetTask, SharedTaskRepository, TaskServiceError,
    TaskServiceResult, TaskUseCases,
};
