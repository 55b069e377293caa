//! GraphQL schema resolving queries and mutations through task use cases.

use async_graphql::{Context, EmptySubscription, ID, InputObject, Object, Schema, SimpleObject};

use crate::task::{
    domain::{Task, TaskId},
    services::TaskUseCases,
};

/// Executable task schema.
pub type TaskSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with the use cases available to every resolver.
#[must_use]
pub fn build_schema(use_cases: TaskUseCases) -> TaskSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(use_cases)
        .finish()
}

/// GraphQL view of a task.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Task")]
pub struct TaskObject {
    /// Task identifier.
    pub id: ID,
    /// Task title as entered.
    pub title: String,
    /// Whether the task is done.
    pub completed: bool,
}

impl From<Task> for TaskObject {
    fn from(task: Task) -> Self {
        let record = task.to_record();
        Self {
            id: ID(record.id),
            title: record.title,
            completed: record.completed,
        }
    }
}

/// Input for the `createTask` mutation.
#[derive(Debug, Clone, InputObject)]
pub struct CreateTaskInput {
    /// Title of the new task.
    pub title: String,
    /// Initial completion flag; `false` when omitted.
    pub completed: Option<bool>,
}

/// Root query type.
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All tasks in creation order.
    async fn tasks(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<TaskObject>> {
        let use_cases = ctx.data::<TaskUseCases>()?;
        let tasks = use_cases.get_all.execute().await?;
        Ok(tasks.into_iter().map(TaskObject::from).collect())
    }

    /// A single task, or null when the identifier is unknown.
    async fn task(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<TaskObject>> {
        let use_cases = ctx.data::<TaskUseCases>()?;
        let task = use_cases.get.execute(&TaskId::from(id.0)).await?;
        Ok(task.map(TaskObject::from))
    }
}

/// Root mutation type.
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a task. Blank titles are rejected.
    async fn create_task(
        &self,
        ctx: &Context<'_>,
        input: CreateTaskInput,
    ) -> async_graphql::Result<TaskObject> {
        let use_cases = ctx.data::<TaskUseCases>()?;
        let task = use_cases
            .create
            .execute(&input.title, input.completed)
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "createTask failed"))?;
        Ok(task.into())
    }

    /// Marks an existing task as completed.
    async fn complete_task(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<TaskObject> {
        let use_cases = ctx.data::<TaskUseCases>()?;
        let task = use_cases
            .complete
            .execute(&TaskId::from(id.0))
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "completeTask failed"))?;
        Ok(task.into())
    }
}
