//! Outbound adapters implementing [`RemoteTaskRepository`] over the network.
//!
//! [`RemoteTaskRepository`]: crate::task::ports::RemoteTaskRepository

mod graphql;
mod http;

pub use graphql::{DEFAULT_ENDPOINT, ENDPOINT_ENV, GraphQlTaskRepository};
pub use http::{BASE_URL_ENV, DEFAULT_BASE_URL, HttpTaskRepository};
