//! REST handlers translating HTTP requests into task use-case calls.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::task::{
    domain::{Task, TaskId, TaskRecord},
    services::{TaskServiceError, TaskUseCases},
};

/// Request body for `POST /tasks`.
///
/// A missing or `null` title reads as empty so that it fails domain
/// validation with the usual message instead of a body rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    /// Title of the new task.
    #[serde(default)]
    pub title: Option<String>,
    /// Initial completion flag; `false` when omitted.
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Error response rendered as `{ "error": message }`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Maps a service error onto an HTTP status.
    ///
    /// Validation failures and missing tasks expose their message. Storage
    /// failures are logged and reported with the generic `fallback` text.
    fn from_service(err: TaskServiceError, fallback: &str) -> Self {
        match err {
            TaskServiceError::Domain(domain) => {
                tracing::warn!(error = %domain, "rejected task request");
                Self {
                    status: StatusCode::BAD_REQUEST,
                    message: domain.to_string(),
                }
            }
            TaskServiceError::NotFound(id) => Self::not_found(&id),
            TaskServiceError::Repository(repository) => {
                tracing::error!(error = %repository, "task repository failure");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: fallback.to_owned(),
                }
            }
        }
    }

    fn malformed_body(rejection: &JsonRejection) -> Self {
        tracing::warn!(error = %rejection, "rejected task request body");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }

    fn not_found(id: &TaskId) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("task not found: {id}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// `GET /tasks`
pub async fn list_tasks(
    State(use_cases): State<TaskUseCases>,
) -> Result<Json<Vec<TaskRecord>>, ApiError> {
    let tasks = use_cases
        .get_all
        .execute()
        .await
        .map_err(|err| ApiError::from_service(err, "Error fetching tasks"))?;
    Ok(Json(tasks.iter().map(Task::to_record).collect()))
}

/// `POST /tasks`
pub async fn create_task(
    State(use_cases): State<TaskUseCases>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskRecord>), ApiError> {
    let Json(payload) = body.map_err(|rejection| ApiError::malformed_body(&rejection))?;
    let task = use_cases
        .create
        .execute(payload.title.as_deref().unwrap_or_default(), payload.completed)
        .await
        .map_err(|err| ApiError::from_service(err, "Error creating task"))?;
    Ok((StatusCode::CREATED, Json(task.to_record())))
}

/// `GET /tasks/{id}`
pub async fn get_task(
    State(use_cases): State<TaskUseCases>,
    Path(raw_id): Path<String>,
) -> Result<Json<TaskRecord>, ApiError> {
    let task_id = TaskId::from(raw_id);
    use_cases
        .get
        .execute(&task_id)
        .await
        .map_err(|err| ApiError::from_service(err, "Error fetching task"))?
        .map(|task| Json(task.to_record()))
        .ok_or_else(|| ApiError::not_found(&task_id))
}

/// `POST /tasks/{id}/complete`
pub async fn complete_task(
    State(use_cases): State<TaskUseCases>,
    Path(id): Path<String>,
) -> Result<Json<TaskRecord>, ApiError> {
    let task = use_cases
        .complete
        .execute(&TaskId::from(id))
        .await
        .map_err(|err| ApiError::from_service(err, "Error completing task"))?;
    Ok(Json(task.to_record()))
}
