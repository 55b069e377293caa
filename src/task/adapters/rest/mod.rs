//! REST adapter exposing the task use cases under `/tasks`.

mod handlers;

use axum::{
    Router,
    routing::{get, post},
};

use crate::task::services::TaskUseCases;

pub use handlers::{ApiError, CreateTaskBody};

/// Builds the REST routes. State is supplied by the caller.
pub fn routes() -> Router<TaskUseCases> {
    Router::new()
        .route("/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route("/tasks/{id}", get(handlers::get_task))
        .route("/tasks/{id}/complete", post(handlers::complete_task))
        .route("/health", get(handlers::health))
}
