//! Neighbor generation: the two-entry resource swap.

use rand::Rng;

use crate::error::MappingError;
use crate::sa::solution::MappingSolution;

/// Produces a neighbor of `source`: a copy in which two entries, selected
/// uniformly at random, have exchanged resources.
///
/// The swap is local and symmetric — it can never unbind a task or introduce
/// a resource from outside the universe, so every neighbor of a complete
/// solution is itself complete. With fewer than two bound tasks there is
/// nothing to swap; that degenerate case returns a plain copy rather than
/// failing, and the search simply runs out its iteration budget.
pub fn swap_neighbor<'a, R: Rng>(
    source: &MappingSolution<'a>,
    rng: &mut R,
) -> Result<MappingSolution<'a>, MappingError> {
    let mut neighbor = source.clone();
    if source.len() < 2 {
        return Ok(neighbor);
    }

    let picked = source.pick_random_entries(2, rng)?;
    neighbor.bind(picked[0].task, picked[1].resource)?;
    neighbor.bind(picked[1].task, picked[0].resource)?;
    Ok(neighbor)
}
