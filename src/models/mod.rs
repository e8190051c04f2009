//! Domain models for the assignment problem.
//!
//! The search core never owns tasks or resources — it only queries them
//! through the `Task` and `Resource` capability traits. `SimpleTask` and
//! `SimpleResource` are the one concrete implementation of each, for callers
//! that do not already have their own domain types.

mod resource;
mod task;

pub use resource::{Resource, SimpleResource};
pub use task::{SimpleTask, Task};
