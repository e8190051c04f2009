//! Solution representation and cost model.
//!
//! A `MappingSolution` is a snapshot of "which task is bound to which
//! resource" for one `MappingProblem`. Solutions are compared by *imbalance*:
//! the spread (max − min) of estimated completion time across the resource
//! universe. Lower is better; zero means every resource carries identical
//! load and the solution is perfect.
//!
//! Solutions are value types. A neighbor is built by cloning its source and
//! rebinding, so the source is never mutated and no two iterations ever share
//! a solution for writing.

use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use rand::Rng;

use crate::error::MappingError;
use crate::sa::problem::MappingProblem;

/// One binding of a task to a resource, by universe index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentEntry {
    /// Task index within the problem's task universe.
    pub task: usize,
    /// Resource index within the problem's resource universe.
    pub resource: usize,
}

/// A complete (or in-construction) assignment of tasks to resources.
#[derive(Debug, Clone)]
pub struct MappingSolution<'a> {
    problem: &'a MappingProblem,
    /// Task index → resource index. BTreeMap keeps entry iteration (and
    /// therefore random entry selection under a fixed seed) deterministic.
    bindings: BTreeMap<usize, usize>,
    /// Imbalance memo, cleared by `bind`.
    cached_imbalance: Cell<Option<f64>>,
}

impl<'a> MappingSolution<'a> {
    /// Creates a solution with no bindings.
    ///
    /// The caller must populate it (via [`bind`](Self::bind)) before handing
    /// it to the search; the runner itself only ever starts from
    /// [`random`](Self::random).
    pub fn empty(problem: &'a MappingProblem) -> Self {
        Self {
            problem,
            bindings: BTreeMap::new(),
            cached_imbalance: Cell::new(None),
        }
    }

    /// Creates the initial solution: every task bound to a uniformly random
    /// resource, independently, with no load awareness.
    pub fn random<R: Rng>(problem: &'a MappingProblem, rng: &mut R) -> Self {
        let resource_count = problem.resource_count();
        let bindings = (0..problem.task_count())
            .map(|task| (task, rng.random_range(0..resource_count)))
            .collect();
        Self {
            problem,
            bindings,
            cached_imbalance: Cell::new(None),
        }
    }

    /// The problem instance this solution was built from.
    pub fn problem(&self) -> &'a MappingProblem {
        self.problem
    }

    /// Inserts or overwrites the binding for `task`.
    ///
    /// Both indices must lie within the configured universes; otherwise
    /// `InvalidBinding` is returned and the solution is left unchanged.
    /// Invalidates the cached imbalance.
    pub fn bind(&mut self, task: usize, resource: usize) -> Result<(), MappingError> {
        if task >= self.problem.task_count() || resource >= self.problem.resource_count() {
            return Err(MappingError::InvalidBinding { task, resource });
        }
        self.bindings.insert(task, resource);
        self.cached_imbalance.set(None);
        Ok(())
    }

    /// The resource `task` is currently bound to, if any.
    pub fn resource_of(&self, task: usize) -> Option<usize> {
        self.bindings.get(&task).copied()
    }

    /// Iterates over all bindings in ascending task order.
    pub fn entries(&self) -> impl Iterator<Item = AssignmentEntry> + '_ {
        self.bindings
            .iter()
            .map(|(&task, &resource)| AssignmentEntry { task, resource })
    }

    /// Number of bound tasks.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no task is bound yet.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Whether every task in the universe has a binding.
    pub fn is_complete(&self) -> bool {
        self.bindings.len() == self.problem.task_count()
    }

    /// Groups bound tasks by resource: index `r` of the returned vector holds
    /// the tasks bound to resource `r`, in ascending task order.
    pub fn entries_by_resource(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.problem.resource_count()];
        for (&task, &resource) in &self.bindings {
            groups[resource].push(task);
        }
        groups
    }

    /// Selects `count` distinct entries uniformly at random without
    /// replacement.
    ///
    /// Fails with `InsufficientEntries` when fewer than `count` tasks are
    /// bound.
    pub fn pick_random_entries<R: Rng>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<AssignmentEntry>, MappingError> {
        let all: Vec<AssignmentEntry> = self.entries().collect();
        if all.len() < count {
            return Err(MappingError::InsufficientEntries {
                requested: count,
                available: all.len(),
            });
        }
        Ok(rand::seq::index::sample(rng, all.len(), count)
            .into_iter()
            .map(|i| all[i])
            .collect())
    }

    /// Estimated completion time for all tasks bound to `resource`: the sum
    /// of their work quantities divided by the resource's capacity.
    pub fn cost_of(&self, resource: usize) -> f64 {
        let total_work: f64 = self
            .bindings
            .iter()
            .filter(|&(_, &r)| r == resource)
            .map(|(&task, _)| self.problem.work(task))
            .sum();
        total_work / self.problem.capacity(resource)
    }

    /// Load spread across the resource universe: max per-resource cost minus
    /// min per-resource cost. Resources with no bound task count with cost
    /// zero. Returns the 0.0 sentinel for an empty resource universe.
    ///
    /// Memoized until the next `bind`; repeated calls on an unmutated
    /// solution return the same value without recomputation.
    pub fn imbalance(&self) -> f64 {
        if let Some(cached) = self.cached_imbalance.get() {
            return cached;
        }
        let value = self.compute_imbalance();
        self.cached_imbalance.set(Some(value));
        value
    }

    fn compute_imbalance(&self) -> f64 {
        let resource_count = self.problem.resource_count();
        if resource_count == 0 {
            return 0.0;
        }
        let mut load = vec![0.0_f64; resource_count];
        for (&task, &resource) in &self.bindings {
            load[resource] += self.problem.work(task);
        }
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;
        for (resource, &work) in load.iter().enumerate() {
            let cost = work / self.problem.capacity(resource);
            max = max.max(cost);
            min = min.min(cost);
        }
        max - min
    }

    /// Total order by imbalance: `Less` means `self` is strictly better
    /// (lower imbalance), `Equal` means the solutions tie.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.imbalance().total_cmp(&other.imbalance())
    }

    /// Whether `self` is equal-or-better than `other` under `compare`.
    pub fn at_least_as_good_as(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }
}
