//! Shared world state for task creation BDD scenarios.

use std::sync::Arc;

use hextodo::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskServiceError, TaskUseCases},
};
use rstest::fixture;

/// Scenario world for task creation behaviour tests.
pub struct TaskWorld {
    pub repository: Arc<InMemoryTaskRepository>,
    pub use_cases: TaskUseCases,
    pub created: Vec<Task>,
    pub last_create_result: Option<Result<Task, TaskServiceError>>,
}

impl TaskWorld {
    /// Creates a world over an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTaskRepository::new());
        let use_cases = TaskUseCases::new(repository.clone());
        Self {
            repository,
            use_cases,
            created: Vec::new(),
            last_create_result: None,
        }
    }

    /// Returns the task created with `title` in this scenario.
    pub fn created_titled(&self, title: &str) -> Result<&Task, eyre::Report> {
        self.created
            .iter()
            .find(|task| task.title() == title)
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} was created"))
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
