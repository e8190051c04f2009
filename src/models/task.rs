//! Task model.
//!
//! A task is a unit of work to be bound to exactly one resource. The search
//! only ever asks a task for its identity and its work quantity; everything
//! else about task execution belongs to the caller.

use serde::{Deserialize, Serialize};

/// Capability contract for a task provider entry.
///
/// Implement this on an existing domain type to feed it to the search without
/// copying it into crate-owned structures.
pub trait Task {
    /// Unique identifier within the task universe.
    fn id(&self) -> &str;

    /// Intrinsic amount of work, in abstract work units.
    ///
    /// Must be finite and non-negative; the cost model divides this by a
    /// resource's capacity to estimate completion time.
    fn work_quantity(&self) -> f64;
}

/// A plain owned task for callers without their own task type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleTask {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Work units to process.
    pub work_quantity: f64,
}

impl SimpleTask {
    /// Creates a task with the given ID and work quantity.
    pub fn new(id: impl Into<String>, work_quantity: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            work_quantity,
        }
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Task for SimpleTask {
    fn id(&self) -> &str {
        &self.id
    }

    fn work_quantity(&self) -> f64 {
        self.work_quantity
    }
}
