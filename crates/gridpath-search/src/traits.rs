use gridpath_core::Coordinate;

use crate::distance::manhattan;

/// Estimate of the remaining cost between two cells.
///
/// Must be admissible (never overestimate) and consistent
/// (`h(a) <= 1 + h(b)` for every step `a -> b`): the search closes a node the
/// first time it is popped and relies on its score being final by then.
pub trait Heuristic {
    /// Estimated cost from `from` to `to`.
    fn estimate(&self, from: Coordinate, to: Coordinate) -> u32;
}

/// Manhattan distance, exact on an obstacle-free 4-connected grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Coordinate, to: Coordinate) -> u32 {
        manhattan(from, to)
    }
}
