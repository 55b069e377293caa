//! In-memory adapter implementations.
//!
//! The in-memory repository backs the server binary and the test suites.

mod task;

pub use task::InMemoryTaskRepository;
