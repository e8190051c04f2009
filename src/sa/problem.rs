//! Problem instance: the task and resource universes the search runs over.

use crate::error::MappingError;
use crate::models::{Resource, Task};

/// The fixed search configuration: one work quantity per task and one
/// capacity per resource.
///
/// Built once before a search and shared (by reference) with every solution
/// produced during it. Tasks and resources are addressed by index in the
/// order their providers listed them; the caller maps indices back to its own
/// handles when reading a result.
///
/// Construction validates the universes up front — empty universes and
/// degenerate numeric attributes are configuration errors, raised before the
/// loop ever starts and never retried.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingProblem {
    work: Vec<f64>,
    capacity: Vec<f64>,
}

impl MappingProblem {
    /// Builds a problem instance from task and resource providers.
    ///
    /// Extracts the numeric attributes; the provider objects are not retained.
    pub fn new<T: Task, R: Resource>(
        tasks: &[T],
        resources: &[R],
    ) -> Result<Self, MappingError> {
        Self::from_raw(
            tasks.iter().map(|t| t.work_quantity()).collect(),
            resources.iter().map(|r| r.capacity()).collect(),
        )
    }

    /// Builds a problem instance directly from attribute vectors.
    ///
    /// `work[i]` is task `i`'s work quantity, `capacity[j]` is resource `j`'s
    /// processing rate.
    pub fn from_raw(work: Vec<f64>, capacity: Vec<f64>) -> Result<Self, MappingError> {
        if work.is_empty() {
            return Err(MappingError::EmptyTaskUniverse);
        }
        if capacity.is_empty() {
            return Err(MappingError::EmptyResourceUniverse);
        }
        for (task, &value) in work.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(MappingError::InvalidWorkQuantity { task, value });
            }
        }
        for (resource, &value) in capacity.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(MappingError::InvalidCapacity { resource, value });
            }
        }
        Ok(Self { work, capacity })
    }

    /// Number of tasks in the universe.
    pub fn task_count(&self) -> usize {
        self.work.len()
    }

    /// Number of resources in the universe.
    pub fn resource_count(&self) -> usize {
        self.capacity.len()
    }

    /// Work quantity of task `task`.
    ///
    /// # Panics
    /// Panics if `task` is out of range; indices come from this instance.
    pub fn work(&self, task: usize) -> f64 {
        self.work[task]
    }

    /// Capacity of resource `resource`.
    ///
    /// # Panics
    /// Panics if `resource` is out of range; indices come from this instance.
    pub fn capacity(&self, resource: usize) -> f64 {
        self.capacity[resource]
    }
}
