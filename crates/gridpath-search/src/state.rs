use std::collections::BinaryHeap;

use gridpath_core::{Coordinate, Grid};

use crate::config::FrontierPolicy;

/// Sentinel score meaning "no path known yet" (+∞).
pub const UNREACHABLE: u32 = u32::MAX;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-cell bookkeeping
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: u32,
    pub(crate) f: u32,
    pub(crate) parent: usize,
    /// Tie-break counter assigned when the node was first pushed.
    pub(crate) order: u64,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: NO_PARENT,
            order: 0,
            open: false,
        }
    }
}

/// Frontier entry, ordered by `(f, order)` for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: u32,
    pub(crate) order: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the earliest inserted.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of [`SearchState::relax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Relaxation {
    /// The node was not on the frontier and has been pushed.
    Opened,
    /// The node was already on the frontier; only its scores changed.
    Improved,
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Scores, predecessors and frontier of a single search run.
///
/// Indexed by the grid's row-major cell index. A fresh state is built for
/// every run and dropped when the run returns, so nothing here ever leaks
/// onto the [`Grid`].
pub struct SearchState {
    size: i32,
    nodes: Vec<Node>,
    frontier: BinaryHeap<NodeRef>,
    counter: u64,
    pushed: usize,
    max_frontier: usize,
}

impl SearchState {
    /// Empty state sized for `grid`: every score +∞, nothing open.
    pub fn new(grid: &Grid) -> Self {
        Self {
            size: grid.size(),
            nodes: vec![Node::default(); grid.len()],
            frontier: BinaryHeap::new(),
            counter: 0,
            pushed: 0,
            max_frontier: 0,
        }
    }

    /// Best known cost from the start to `c`, or [`UNREACHABLE`].
    pub fn g_score(&self, c: Coordinate) -> u32 {
        self.idx(c).map_or(UNREACHABLE, |i| self.nodes[i].g)
    }

    /// `g + h` for `c`, or [`UNREACHABLE`].
    pub fn f_score(&self, c: Coordinate) -> u32 {
        self.idx(c).map_or(UNREACHABLE, |i| self.nodes[i].f)
    }

    /// Predecessor of `c` on its best known path.
    pub fn came_from(&self, c: Coordinate) -> Option<Coordinate> {
        let i = self.idx(c)?;
        match self.nodes[i].parent {
            NO_PARENT => None,
            p => Some(self.point(p)),
        }
    }

    /// Whether `c` is currently pending expansion.
    pub fn is_open(&self, c: Coordinate) -> bool {
        self.idx(c).is_some_and(|i| self.nodes[i].open)
    }

    /// Number of entries in the frontier, stale ones included.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Total number of frontier insertions so far.
    pub fn pushed(&self) -> usize {
        self.pushed
    }

    /// Largest frontier size seen so far.
    pub fn max_frontier(&self) -> usize {
        self.max_frontier
    }

    // -----------------------------------------------------------------------
    // Search operations
    // -----------------------------------------------------------------------

    /// Open the start node with `g = 0` and counter 0.
    pub(crate) fn seed(&mut self, idx: usize, f: u32) {
        let node = &mut self.nodes[idx];
        node.g = 0;
        node.f = f;
        node.order = self.counter;
        node.open = true;
        self.push(idx);
    }

    #[inline]
    pub(crate) fn g(&self, idx: usize) -> u32 {
        self.nodes[idx].g
    }

    /// Pop the best live entry and close it.
    ///
    /// Under [`FrontierPolicy::KeepStale`] a node has at most one entry while
    /// it is open, so every entry is live. Under
    /// [`FrontierPolicy::Reprioritize`] entries left behind by an improvement
    /// are skipped.
    pub(crate) fn pop(&mut self, policy: FrontierPolicy) -> Option<usize> {
        while let Some(entry) = self.frontier.pop() {
            let node = &mut self.nodes[entry.idx];
            if policy == FrontierPolicy::Reprioritize && (!node.open || node.f != entry.f) {
                continue;
            }
            node.open = false;
            return Some(entry.idx);
        }
        None
    }

    /// Record `from` as the best predecessor of `to` with scores `g`/`f`.
    /// The caller has already checked that `g` beats the current score.
    pub(crate) fn relax(
        &mut self,
        from: usize,
        to: usize,
        g: u32,
        f: u32,
        policy: FrontierPolicy,
    ) -> Relaxation {
        let node = &mut self.nodes[to];
        debug_assert!(g < node.g);
        node.parent = from;
        node.g = g;
        node.f = f;
        if node.open {
            if policy == FrontierPolicy::Reprioritize {
                self.push(to);
            }
            return Relaxation::Improved;
        }
        self.counter += 1;
        let node = &mut self.nodes[to];
        node.order = self.counter;
        node.open = true;
        self.push(to);
        Relaxation::Opened
    }

    fn push(&mut self, idx: usize) {
        let node = &self.nodes[idx];
        self.frontier.push(NodeRef {
            idx,
            f: node.f,
            order: node.order,
        });
        self.pushed += 1;
        self.max_frontier = self.max_frontier.max(self.frontier.len());
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    #[inline]
    fn idx(&self, c: Coordinate) -> Option<usize> {
        if c.row < 0 || c.col < 0 || c.row >= self.size || c.col >= self.size {
            return None;
        }
        Some(c.row as usize * self.size as usize + c.col as usize)
    }

    #[inline]
    fn point(&self, idx: usize) -> Coordinate {
        let n = self.size as usize;
        Coordinate::new((idx / n) as i32, (idx % n) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(n: i32) -> SearchState {
        SearchState::new(&Grid::new(n).unwrap())
    }

    #[test]
    fn fresh_state_is_unreachable() {
        let s = state(3);
        let c = Coordinate::new(1, 2);
        assert_eq!(s.g_score(c), UNREACHABLE);
        assert_eq!(s.f_score(c), UNREACHABLE);
        assert_eq!(s.came_from(c), None);
        assert!(!s.is_open(c));
        assert_eq!(s.frontier_len(), 0);
        // Out-of-range queries are answered, not rejected.
        assert_eq!(s.g_score(Coordinate::new(-1, 0)), UNREACHABLE);
    }

    #[test]
    fn equal_scores_pop_in_insertion_order() {
        let mut s = state(3);
        s.seed(0, 4);
        assert_eq!(s.pop(FrontierPolicy::KeepStale), Some(0));
        for idx in [5, 3, 7] {
            assert_eq!(
                s.relax(0, idx, 1, 4, FrontierPolicy::KeepStale),
                Relaxation::Opened
            );
        }
        s.relax(0, 1, 1, 2, FrontierPolicy::KeepStale);
        let order: Vec<_> = std::iter::from_fn(|| s.pop(FrontierPolicy::KeepStale)).collect();
        assert_eq!(order, vec![1, 5, 3, 7]);
    }

    #[test]
    fn keep_stale_leaves_old_priority() {
        let mut s = state(3);
        s.seed(0, 10);
        s.pop(FrontierPolicy::KeepStale);
        s.relax(0, 4, 5, 9, FrontierPolicy::KeepStale);
        s.relax(0, 2, 1, 7, FrontierPolicy::KeepStale);
        assert_eq!(
            s.relax(2, 4, 2, 6, FrontierPolicy::KeepStale),
            Relaxation::Improved
        );
        assert_eq!(s.frontier_len(), 2);
        assert_eq!(s.g_score(Coordinate::new(1, 1)), 2);
        assert_eq!(s.came_from(Coordinate::new(1, 1)), Some(Coordinate::new(0, 2)));
        // Node 4 still sits at its old priority 9, behind node 2 at 7.
        assert_eq!(s.pop(FrontierPolicy::KeepStale), Some(2));
        assert_eq!(s.pop(FrontierPolicy::KeepStale), Some(4));
        assert_eq!(s.pop(FrontierPolicy::KeepStale), None);
    }

    #[test]
    fn reprioritize_moves_entry_forward() {
        let mut s = state(3);
        s.seed(0, 10);
        s.pop(FrontierPolicy::Reprioritize);
        s.relax(0, 4, 5, 9, FrontierPolicy::Reprioritize);
        s.relax(0, 2, 1, 7, FrontierPolicy::Reprioritize);
        s.relax(2, 4, 2, 6, FrontierPolicy::Reprioritize);
        assert_eq!(s.frontier_len(), 3);
        assert_eq!(s.pop(FrontierPolicy::Reprioritize), Some(4));
        assert_eq!(s.pop(FrontierPolicy::Reprioritize), Some(2));
        // The outdated entry for node 4 is discarded.
        assert_eq!(s.pop(FrontierPolicy::Reprioritize), None);
        assert_eq!(s.pushed(), 4);
        assert_eq!(s.max_frontier(), 3);
    }
}
