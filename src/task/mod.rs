//! TODO task management.
//!
//! Tasks are created and listed through REST and GraphQL on the server side,
//! and through remote repositories on the client side. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Use cases in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
