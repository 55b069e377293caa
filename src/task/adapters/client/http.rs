//! Remote task repository speaking the REST API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::task::{
    domain::{Task, TaskRecord},
    ports::{RemoteTaskError, RemoteTaskRepository, RemoteTaskResult},
};

/// Default base URL for a locally running server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "HEXTODO_URL";

#[derive(Debug, Serialize)]
struct CreateTaskRequest<'a> {
    title: &'a str,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Task repository backed by the `/tasks` REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpTaskRepository {
    base_url: String,
    client: Client,
}

impl HttpTaskRepository {
    /// Creates a repository for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw: String = base_url.into();
        Self {
            base_url: raw.trim_end_matches('/').to_owned(),
            client: Client::new(),
        }
    }

    /// Creates a repository from `HEXTODO_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        Self::new(base_url)
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }
}

/// Decodes a successful body or turns the failure into a [`RemoteTaskError`].
///
/// Client errors carrying `{ "error": message }` become
/// [`RemoteTaskError::Rejected`].
async fn handle_response<T: DeserializeOwned>(response: Response) -> RemoteTaskResult<T> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|err| RemoteTaskError::MalformedResponse(err.to_string()));
    }

    let body = response.text().await.map_err(RemoteTaskError::transport)?;
    if status.is_client_error()
        && let Ok(ErrorBody { error }) = serde_json::from_str::<ErrorBody>(&body)
    {
        return Err(RemoteTaskError::Rejected(error));
    }
    Err(RemoteTaskError::UnexpectedStatus {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl RemoteTaskRepository for HttpTaskRepository {
    async fn get_all(&self) -> RemoteTaskResult<Vec<Task>> {
        let response = self
            .client
            .get(self.tasks_url())
            .send()
            .await
            .map_err(RemoteTaskError::transport)?;
        let records: Vec<TaskRecord> = handle_response(response).await?;
        Ok(records.into_iter().map(Task::from_record).collect())
    }

    async fn create(&self, title: &str, completed: bool) -> RemoteTaskResult<Task> {
        let response = self
            .client
            .post(self.tasks_url())
            .json(&CreateTaskRequest { title, completed })
            .send()
            .await
            .map_err(RemoteTaskError::transport)?;
        let record: TaskRecord = handle_response(response).await?;
        Ok(Task::from_record(record))
    }
}
