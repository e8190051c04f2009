//! Error types for problem construction and search execution.
//!
//! All errors are fatal for the `run` call that raised them: configuration
//! errors are detected before the loop starts, and the invariant violations
//! (`InvalidBinding`, `InsufficientEntries`) signal a defect in the caller or
//! in a neighbor operator, never a retryable condition.

/// Errors raised by problem construction, solution mutation, and the runner.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingError {
    /// The task universe is empty; there is nothing to assign.
    EmptyTaskUniverse,

    /// The resource universe is empty; there is nowhere to assign tasks.
    EmptyResourceUniverse,

    /// `max_iterations` is zero; the search would never run an iteration.
    NonPositiveMaxIterations,

    /// A task's work quantity is negative or not finite.
    InvalidWorkQuantity {
        /// Task index within the universe.
        task: usize,
        /// The offending value.
        value: f64,
    },

    /// A resource's capacity is non-positive or not finite.
    InvalidCapacity {
        /// Resource index within the universe.
        resource: usize,
        /// The offending value.
        value: f64,
    },

    /// A binding referenced a task or resource outside the configured universe.
    InvalidBinding {
        /// Task index as given by the caller.
        task: usize,
        /// Resource index as given by the caller.
        resource: usize,
    },

    /// More random entries were requested than the solution holds.
    InsufficientEntries {
        /// Number of entries requested.
        requested: usize,
        /// Number of entries available.
        available: usize,
    },
}

impl std::fmt::Display for MappingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MappingError::EmptyTaskUniverse => {
                write!(f, "task universe is empty")
            }
            MappingError::EmptyResourceUniverse => {
                write!(f, "resource universe is empty")
            }
            MappingError::NonPositiveMaxIterations => {
                write!(f, "max_iterations must be at least 1")
            }
            MappingError::InvalidWorkQuantity { task, value } => {
                write!(f, "task {task} has invalid work quantity {value}")
            }
            MappingError::InvalidCapacity { resource, value } => {
                write!(f, "resource {resource} has invalid capacity {value}")
            }
            MappingError::InvalidBinding { task, resource } => {
                write!(
                    f,
                    "binding of task {task} to resource {resource} is outside the configured universe"
                )
            }
            MappingError::InsufficientEntries {
                requested,
                available,
            } => {
                write!(
                    f,
                    "requested {requested} random entries but only {available} are bound"
                )
            }
        }
    }
}

impl std::error::Error for MappingError {}
