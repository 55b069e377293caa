//! Step definitions for task creation and listing scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
