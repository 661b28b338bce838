//! Step notifications emitted while a search runs.
//!
//! The search calls its observer synchronously at fixed checkpoints and
//! resumes as soon as the call returns. Notifications arrive in exactly the
//! order the search visits nodes, so recording them twice for the same input
//! yields the same sequence.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gridpath_core::Coordinate;

/// Receiver of search progress, and source of cooperative cancellation.
///
/// Every method has a no-op default.
pub trait SearchObserver {
    /// `c` was discovered and pushed onto the frontier.
    fn node_opened(&mut self, _c: Coordinate) {}

    /// `c` was popped and all its neighbours were relaxed. Never called for
    /// the start cell.
    fn node_expanded(&mut self, _c: Coordinate) {}

    /// Path reconstruction stepped back to `c`.
    fn path_step(&mut self, _c: Coordinate) {}

    /// Polled at the top of every search iteration; returning `true` stops
    /// the search with [`Outcome::Cancelled`](crate::Outcome::Cancelled).
    fn cancelled(&mut self) -> bool {
        false
    }
}

impl SearchObserver for () {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn node_opened(&mut self, c: Coordinate) {
        (**self).node_opened(c);
    }

    fn node_expanded(&mut self, c: Coordinate) {
        (**self).node_expanded(c);
    }

    fn path_step(&mut self, c: Coordinate) {
        (**self).path_step(c);
    }

    fn cancelled(&mut self) -> bool {
        (**self).cancelled()
    }
}

/// A single observer notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    Opened(Coordinate),
    Expanded(Coordinate),
    PathStep(Coordinate),
}

impl Step {
    /// The coordinate the notification is about.
    pub fn coordinate(self) -> Coordinate {
        match self {
            Self::Opened(c) | Self::Expanded(c) | Self::PathStep(c) => c,
        }
    }
}

/// Observer that records every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded notifications, oldest first.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Coordinates of the `Expanded` notifications, in order.
    pub fn expanded(&self) -> Vec<Coordinate> {
        self.filter(|s| matches!(s, Step::Expanded(_)))
    }

    /// Coordinates of the `Opened` notifications, in order.
    pub fn opened(&self) -> Vec<Coordinate> {
        self.filter(|s| matches!(s, Step::Opened(_)))
    }

    /// Coordinates of the `PathStep` notifications, in order.
    pub fn path_steps(&self) -> Vec<Coordinate> {
        self.filter(|s| matches!(s, Step::PathStep(_)))
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    fn filter(&self, keep: impl Fn(&Step) -> bool) -> Vec<Coordinate> {
        self.steps
            .iter()
            .filter(|s| keep(s))
            .map(|s| s.coordinate())
            .collect()
    }
}

impl SearchObserver for StepRecorder {
    fn node_opened(&mut self, c: Coordinate) {
        self.steps.push(Step::Opened(c));
    }

    fn node_expanded(&mut self, c: Coordinate) {
        self.steps.push(Step::Expanded(c));
    }

    fn path_step(&mut self, c: Coordinate) {
        self.steps.push(Step::PathStep(c));
    }
}

/// A cloneable cancellation token backed by an [`AtomicBool`].
///
/// Hand a clone to whoever may want to stop the search; the search checks it
/// once per iteration.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    done: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl SearchObserver for CancelToken {
    fn cancelled(&mut self) -> bool {
        self.is_cancelled()
    }
}
