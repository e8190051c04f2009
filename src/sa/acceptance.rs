//! Acceptance policy: equal-or-better always wins; worse candidates survive
//! with a probability that decays as the search ages.

use std::cmp::Ordering;

use rand::Rng;

use crate::sa::solution::MappingSolution;

/// Pseudo-temperature after `elapsed_iterations` iterations: `1 / k`.
///
/// There is no configurable schedule; the iteration counter is the implicit
/// inverse-temperature clock, so the probability of keeping a worse candidate
/// is strictly non-increasing over the run. The driver increments the counter
/// before generating the first neighbor, so `elapsed_iterations >= 1`
/// whenever this is consulted.
pub fn acceptance_temperature(elapsed_iterations: usize) -> f64 {
    1.0 / elapsed_iterations as f64
}

/// Decides whether `candidate` replaces `current`.
///
/// Equal-or-better candidates are accepted unconditionally, regardless of the
/// random draw. A strictly worse candidate is accepted iff a uniform draw in
/// `[0, 1)` falls at or below the current pseudo-temperature.
pub fn accept<R: Rng>(
    candidate: &MappingSolution<'_>,
    current: &MappingSolution<'_>,
    elapsed_iterations: usize,
    rng: &mut R,
) -> bool {
    if candidate.compare(current) != Ordering::Greater {
        return true;
    }
    debug_assert!(elapsed_iterations >= 1, "acceptance consulted before the first iteration");
    rng.random_range(0.0..1.0) <= acceptance_temperature(elapsed_iterations)
}
