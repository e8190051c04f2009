//! Simulated annealing heuristic for balanced task-to-resource assignment.
//!
//! Given a fixed set of tasks (each with a work quantity) and a fixed set of
//! resources (each with a processing capacity), the search looks for an
//! assignment of every task to exactly one resource that minimizes the load
//! spread — the difference between the most and least loaded resource.
//!
//! This crate only decides the binding. It is meant to sit inside a larger
//! broker or scheduler that owns the tasks and resources, runs them, and
//! reports on the outcome; execution semantics, contention, and reporting
//! are all the caller's concern.
//!
//! # Modules
//!
//! - **`models`**: `Task` / `Resource` capability traits plus one simple
//!   owned implementation of each.
//! - **`sa`**: the search — problem instance, solution representation and
//!   cost model, swap neighborhood, acceptance policy, and runner.
//! - **`error`**: `MappingError`, covering configuration errors and the
//!   internal invariant violations.
//!
//! # Example
//!
//! ```
//! use sa_balance::models::{SimpleResource, SimpleTask};
//! use sa_balance::sa::{MappingProblem, SaConfig, SaRunner};
//!
//! let tasks = vec![
//!     SimpleTask::new("T1", 400.0),
//!     SimpleTask::new("T2", 100.0),
//!     SimpleTask::new("T3", 300.0),
//!     SimpleTask::new("T4", 200.0),
//! ];
//! let resources = vec![
//!     SimpleResource::new("R1", 1.0),
//!     SimpleResource::new("R2", 1.0),
//! ];
//!
//! let problem = MappingProblem::new(&tasks, &resources)?;
//! let config = SaConfig::default().with_seed(42);
//! let result = SaRunner::run(&problem, &config)?;
//!
//! for task in 0..problem.task_count() {
//!     let resource = result.best.resource_of(task).unwrap();
//!     println!("{} -> {}", tasks[task].id, resources[resource].id);
//! }
//! # Ok::<(), sa_balance::error::MappingError>(())
//! ```

pub mod error;
pub mod models;
pub mod sa;
