//! HTTP application assembly.
//!
//! Wires one repository instance into the use cases and mounts the REST and
//! GraphQL adapters on a single router.

use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::task::{
    adapters::{graphql, memory::InMemoryTaskRepository, rest},
    services::{SharedTaskRepository, TaskUseCases},
};

/// Builds the application router over an existing repository.
pub fn build_router(repository: SharedTaskRepository) -> Router {
    let use_cases = TaskUseCases::new(repository);
    let schema = graphql::build_schema(use_cases.clone());

    Router::new()
        .merge(rest::routes())
        .merge(graphql::routes(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(use_cases)
}

/// Builds the application router over a fresh in-memory repository.
pub fn in_memory_router() -> Router {
    build_router(Arc::new(InMemoryTaskRepository::new()))
}
