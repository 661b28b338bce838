use gridpath_core::{Board, Coordinate, EndpointError, Grid, GridError};

use crate::config::{FrontierPolicy, SearchConfig};
use crate::observer::SearchObserver;
use crate::outcome::{Outcome, SearchStats};
use crate::reconstruct::reconstruct;
use crate::state::{Relaxation, SearchState};
use crate::traits::{Heuristic, Manhattan};

/// A* shortest-path search over a [`Grid`].
///
/// The pathfinder holds no per-run data and can be reused for any number of
/// runs, on any number of grids.
#[derive(Debug, Clone)]
pub struct Pathfinder<H = Manhattan> {
    config: SearchConfig,
    heuristic: H,
}

impl Pathfinder<Manhattan> {
    /// Create a Manhattan-distance pathfinder with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_heuristic(config, Manhattan)
    }
}

impl Default for Pathfinder<Manhattan> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<H: Heuristic> Pathfinder<H> {
    /// Create a pathfinder using a custom heuristic. It must be admissible
    /// and consistent for 4-connected unit-cost moves.
    pub fn with_heuristic(config: SearchConfig, heuristic: H) -> Self {
        Self { config, heuristic }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Find a shortest path from `start` to `end` without observing.
    pub fn find_path(
        &self,
        grid: &Grid,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Outcome, GridError> {
        self.run(grid, start, end, &mut ())
    }

    /// Find a shortest path from `start` to `end`, reporting progress to
    /// `observer`.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidEndpoints`] if either endpoint is outside the grid
    /// or blocked, or if they coincide. Nothing is searched in that case.
    pub fn run<O: SearchObserver + ?Sized>(
        &self,
        grid: &Grid,
        start: Coordinate,
        end: Coordinate,
        observer: &mut O,
    ) -> Result<Outcome, GridError> {
        self.run_with_stats(grid, start, end, observer)
            .map(|(outcome, _)| outcome)
    }

    /// Search between the board's designated endpoints.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidEndpoints`] if the board lacks a start or an end.
    pub fn run_board<O: SearchObserver + ?Sized>(
        &self,
        board: &Board,
        observer: &mut O,
    ) -> Result<Outcome, GridError> {
        let (start, end) = board.endpoints()?;
        self.run(board.grid(), start, end, observer)
    }

    /// Like [`Pathfinder::run`], also returning run counters.
    pub fn run_with_stats<O: SearchObserver + ?Sized>(
        &self,
        grid: &Grid,
        start: Coordinate,
        end: Coordinate,
        observer: &mut O,
    ) -> Result<(Outcome, SearchStats), GridError> {
        check_endpoints(grid, start, end)?;
        let policy = self.config.policy;
        log::debug!(
            "astar: {n}x{n} grid, {start} -> {end}, policy {policy:?}",
            n = grid.size()
        );

        let start_idx = grid.index(start)?;
        let end_idx = grid.index(end)?;

        let mut state = SearchState::new(grid);
        state.seed(start_idx, self.heuristic.estimate(start, end));

        let mut stats = SearchStats::default();
        let mut nbuf = Vec::with_capacity(4);

        let outcome = loop {
            if state.frontier_len() == 0 {
                break Outcome::NotFound;
            }
            if observer.cancelled() {
                break Outcome::Cancelled;
            }
            let Some(ci) = state.pop(policy) else {
                // Only outdated entries were left.
                break Outcome::NotFound;
            };

            if ci == end_idx {
                break Outcome::Found(reconstruct(&state, end, observer));
            }

            let current = grid.coordinate(ci);
            let tentative_g = state.g(ci) + 1;

            grid.neighbors_into(current, &mut nbuf)?;
            for &np in nbuf.iter() {
                let ni = grid.index(np)?;
                if tentative_g >= state.g(ni) {
                    continue;
                }
                let f = tentative_g + self.heuristic.estimate(np, end);
                if state.relax(ci, ni, tentative_g, f, policy) == Relaxation::Opened {
                    observer.node_opened(np);
                }
            }

            stats.expanded += 1;
            log::trace!("astar: expanded {current} (g = {})", tentative_g - 1);
            if ci != start_idx {
                observer.node_expanded(current);
            }
        };

        stats.pushed = state.pushed();
        stats.max_frontier = state.max_frontier();
        log::debug!(
            "astar: {} after {} expansions ({} pushes, peak frontier {})",
            outcome_label(&outcome),
            stats.expanded,
            stats.pushed,
            stats.max_frontier
        );
        Ok((outcome, stats))
    }
}

impl From<SearchConfig> for Pathfinder<Manhattan> {
    fn from(config: SearchConfig) -> Self {
        Self::new(config)
    }
}

impl From<FrontierPolicy> for Pathfinder<Manhattan> {
    fn from(policy: FrontierPolicy) -> Self {
        Self::new(SearchConfig { policy })
    }
}

fn check_endpoints(grid: &Grid, start: Coordinate, end: Coordinate) -> Result<(), GridError> {
    if !grid.contains(start) {
        return Err(EndpointError::StartOutOfBounds(start).into());
    }
    if !grid.contains(end) {
        return Err(EndpointError::EndOutOfBounds(end).into());
    }
    if start == end {
        return Err(EndpointError::SameCell(start).into());
    }
    if !grid.is_open(start) {
        return Err(EndpointError::StartBlocked(start).into());
    }
    if !grid.is_open(end) {
        return Err(EndpointError::EndBlocked(end).into());
    }
    Ok(())
}

fn outcome_label(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Found(p) => format!("found path of {} cells", p.len()),
        Outcome::NotFound => "no path".to_string(),
        Outcome::Cancelled => "cancelled".to_string(),
    }
}
