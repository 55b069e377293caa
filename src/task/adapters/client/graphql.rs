//! Remote task repository speaking the GraphQL API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};

use crate::task::{
    domain::{Task, TaskRecord},
    ports::{RemoteTaskError, RemoteTaskRepository, RemoteTaskResult},
};

/// Default endpoint for a locally running server.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/graphql";

/// Environment variable overriding [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_ENV: &str = "HEXTODO_GRAPHQL_URL";

const GET_ALL_TASKS: &str = "query GetAllTasks { tasks { id title completed } }";

const CREATE_TASK: &str = "mutation CreateTask($input: CreateTaskInput!) { \
     createTask(input: $input) { id title completed } }";

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct TasksData {
    tasks: Vec<TaskRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTaskData {
    create_task: TaskRecord,
}

/// Task repository backed by the `/graphql` endpoint.
#[derive(Debug, Clone)]
pub struct GraphQlTaskRepository {
    endpoint: String,
    client: Client,
}

impl GraphQlTaskRepository {
    /// Creates a repository for the GraphQL endpoint at `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    /// Creates a repository from `HEXTODO_GRAPHQL_URL`, falling back to
    /// [`DEFAULT_ENDPOINT`].
    #[must_use]
    pub fn from_env() -> Self {
        let endpoint = std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_owned());
        Self::new(endpoint)
    }

    /// Sends one operation and returns its `data` payload.
    ///
    /// Any entry in `errors` fails the call, even when partial data arrived.
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> RemoteTaskResult<Option<T>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(RemoteTaskError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(RemoteTaskError::transport)?;
            return Err(RemoteTaskError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|err| RemoteTaskError::MalformedResponse(err.to_string()))?;
        if !payload.errors.is_empty() {
            let messages: Vec<String> = payload.errors.into_iter().map(|e| e.message).collect();
            return Err(RemoteTaskError::Rejected(messages.join("; ")));
        }
        Ok(payload.data)
    }
}

#[async_trait]
impl RemoteTaskRepository for GraphQlTaskRepository {
    async fn get_all(&self) -> RemoteTaskResult<Vec<Task>> {
        let payload: Option<TasksData> = self.execute(GET_ALL_TASKS, None).await?;
        Ok(payload
            .map(|data| data.tasks.into_iter().map(Task::from_record).collect())
            .unwrap_or_default())
    }

    async fn create(&self, title: &str, completed: bool) -> RemoteTaskResult<Task> {
        let variables = json!({ "input": { "title": title, "completed": completed } });
        let payload: Option<CreateTaskData> = self.execute(CREATE_TASK, Some(variables)).await?;
        payload.map(|data| Task::from_record(data.create_task))
            .ok_or_else(|| RemoteTaskError::MalformedResponse("failed to create task".to_owned()))
    }
}
