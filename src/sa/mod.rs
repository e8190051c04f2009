//! Simulated-Annealing-style assignment search.
//!
//! A single-solution trajectory heuristic: start from a random complete
//! assignment, repeatedly swap the resources of two random entries, and keep
//! the candidate when it is equal-or-better — or, with probability
//! `1 / iteration`, even when it is worse. The decaying acceptance threshold
//! approximates an annealing cooling curve using the iteration count as an
//! implicit inverse-temperature clock.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod acceptance;
mod config;
mod neighbor;
mod problem;
mod runner;
mod solution;

pub use acceptance::{accept, acceptance_temperature};
pub use config::SaConfig;
pub use neighbor::swap_neighbor;
pub use problem::MappingProblem;
pub use runner::{SaResult, SaRunner};
pub use solution::{AssignmentEntry, MappingSolution};
