//! Deterministic A* shortest-path search over [`gridpath_core::Grid`].
//!
//! The search moves in the four orthogonal directions at unit cost and
//! estimates remaining cost with Manhattan distance. Ties between frontier
//! entries of equal score are broken by insertion order, and neighbours are
//! always examined south, north, east, west, so the same input always yields
//! the same path and the same sequence of observer notifications.
//!
//! ```
//! use gridpath_core::{Board, Coordinate};
//! use gridpath_search::{Outcome, Pathfinder, StepRecorder};
//!
//! let board: Board = "S.#\n..#\n#.E".parse().unwrap();
//! let mut steps = StepRecorder::new();
//! let outcome = Pathfinder::default().run_board(&board, &mut steps).unwrap();
//! assert_eq!(outcome.steps(), Some(4));
//! assert_eq!(steps.path_steps().last(), Some(&Coordinate::new(0, 0)));
//! ```
//!
//! Per-run bookkeeping lives in a [`SearchState`] that is created by each run
//! and dropped when it returns; the grid itself is only read.

mod astar;
mod config;
mod distance;
mod observer;
mod outcome;
mod reconstruct;
mod state;
mod traits;

pub use astar::Pathfinder;
pub use config::{FrontierPolicy, SearchConfig};
pub use distance::manhattan;
pub use observer::{CancelToken, SearchObserver, Step, StepRecorder};
pub use outcome::{Outcome, SearchStats};
pub use reconstruct::reconstruct;
pub use state::{SearchState, UNREACHABLE};
pub use traits::{Heuristic, Manhattan};
