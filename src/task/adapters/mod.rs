//! Adapter implementations for task ports and inbound protocols.
//!
//! - [`memory`]: in-memory [`TaskRepository`](crate::task::ports::TaskRepository)
//! - [`client`]: REST and GraphQL clients implementing
//!   [`RemoteTaskRepository`](crate::task::ports::RemoteTaskRepository)
//! - [`rest`]: axum routes under `/tasks`
//! - [`graphql`]: GraphQL schema and routes under `/graphql`

pub mod client;
pub mod graphql;
pub mod memory;
pub mod rest;
