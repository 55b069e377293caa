//! hextodo: a TODO-list service built around ports and adapters.
//!
//! Tasks can be created and listed over REST and GraphQL. A client-side
//! repository role lets other programs drive a running server through the
//! same use-case layer.
//!
//! # Architecture
//!
//! hextodo follows hexagonal architecture principles:
//!
//! - **Domain**: the task entity and its validation, free of I/O
//! - **Ports**: abstract trait interfaces for storage and remote access
//! - **Adapters**: in-memory storage, REST and GraphQL servers and clients
//!
//! # Modules
//!
//! - [`task`]: task domain, ports, adapters, and use cases
//! - [`server`]: HTTP router assembly
//! - [`config`]: server configuration

pub mod config;
pub mod server;
pub mod task;
