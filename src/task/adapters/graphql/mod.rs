//! GraphQL adapter served at `/graphql`.
//!
//! `POST /graphql` executes operations; `GET /graphql` serves GraphiQL.

mod schema;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};

pub use schema::{CreateTaskInput, MutationRoot, QueryRoot, TaskObject, TaskSchema, build_schema};

/// Path the GraphQL endpoint is mounted on.
pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Builds the GraphQL routes for a schema.
pub fn routes<S>(schema: TaskSchema) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(GRAPHQL_PATH, get(graphiql).post_service(GraphQL::new(schema)))
}
