//! Editor-side ownership of a grid plus its start/end designation.
//!
//! The search only ever sees a [`Grid`] and two coordinates. [`Board`] is the
//! piece an interactive editor holds between runs: it keeps at most one start
//! and one end, keeps them distinct, and never lets either be blocked.

use crate::error::{EndpointError, GridError};
use crate::geom::Coordinate;
use crate::grid::{Grid, Passability};

/// What a [`Board::place`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Start,
    End,
    Blocked,
    /// The cell is the current start or end; nothing changed.
    Unchanged,
}

/// A grid together with an optional start and end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    start: Option<Coordinate>,
    end: Option<Coordinate>,
}

impl Board {
    /// Create an `n`×`n` board, all open, with no endpoints.
    pub fn new(n: i32) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::new(n)?))
    }

    /// Wrap an existing grid with no endpoints designated.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            start: None,
            end: None,
        }
    }

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Coordinate> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Coordinate> {
        self.end
    }

    /// Both endpoints, or the reason they cannot be searched yet.
    pub fn endpoints(&self) -> Result<(Coordinate, Coordinate), GridError> {
        let start = self.start.ok_or(EndpointError::MissingStart)?;
        let end = self.end.ok_or(EndpointError::MissingEnd)?;
        Ok((start, end))
    }

    /// Primary-click editing: the first free placement becomes the start, the
    /// next becomes the end, and every later placement blocks the cell.
    ///
    /// A cell that is already the start or end is left alone.
    pub fn place(&mut self, c: Coordinate) -> Result<Placement, GridError> {
        self.grid.index(c)?;
        if self.start.is_none() && self.end != Some(c) {
            self.grid.set_passability(c, Passability::Open)?;
            self.start = Some(c);
            Ok(Placement::Start)
        } else if self.end.is_none() && self.start != Some(c) {
            self.grid.set_passability(c, Passability::Open)?;
            self.end = Some(c);
            Ok(Placement::End)
        } else if self.start != Some(c) && self.end != Some(c) {
            self.grid.set_passability(c, Passability::Blocked)?;
            Ok(Placement::Blocked)
        } else {
            Ok(Placement::Unchanged)
        }
    }

    /// Secondary-click editing: reopen the cell and drop it as start or end.
    pub fn erase(&mut self, c: Coordinate) -> Result<(), GridError> {
        self.grid.set_passability(c, Passability::Open)?;
        if self.start == Some(c) {
            self.start = None;
        } else if self.end == Some(c) {
            self.end = None;
        }
        Ok(())
    }

    /// Reopen every cell and drop both endpoints.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.start = None;
        self.end = None;
    }

    /// Designate the start, replacing any previous one.
    pub fn set_start(&mut self, c: Coordinate) -> Result<(), GridError> {
        self.check_endpoint(
            c,
            self.end,
            EndpointError::StartOutOfBounds,
            EndpointError::StartBlocked,
        )?;
        self.start = Some(c);
        Ok(())
    }

    /// Designate the end, replacing any previous one.
    pub fn set_end(&mut self, c: Coordinate) -> Result<(), GridError> {
        self.check_endpoint(
            c,
            self.start,
            EndpointError::EndOutOfBounds,
            EndpointError::EndBlocked,
        )?;
        self.end = Some(c);
        Ok(())
    }

    /// Block or reopen a cell. Blocking a designated endpoint is refused.
    pub fn set_passability(&mut self, c: Coordinate, state: Passability) -> Result<(), GridError> {
        if state == Passability::Blocked {
            if self.start == Some(c) {
                return Err(EndpointError::StartBlocked(c).into());
            }
            if self.end == Some(c) {
                return Err(EndpointError::EndBlocked(c).into());
            }
        }
        self.grid.set_passability(c, state)
    }

    fn check_endpoint(
        &self,
        c: Coordinate,
        other: Option<Coordinate>,
        out_of_bounds: fn(Coordinate) -> EndpointError,
        blocked: fn(Coordinate) -> EndpointError,
    ) -> Result<(), GridError> {
        if !self.grid.contains(c) {
            return Err(out_of_bounds(c).into());
        }
        if other == Some(c) {
            return Err(EndpointError::SameCell(c).into());
        }
        if !self.grid.is_open(c) {
            return Err(blocked(c).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn place_sequence() {
        let mut b = Board::new(4).unwrap();
        assert_eq!(b.place(c(0, 0)), Ok(Placement::Start));
        // Clicking the start again does not turn it into the end.
        assert_eq!(b.place(c(0, 0)), Ok(Placement::Unchanged));
        assert_eq!(b.place(c(3, 3)), Ok(Placement::End));
        assert_eq!(b.place(c(1, 1)), Ok(Placement::Blocked));
        assert_eq!(b.place(c(3, 3)), Ok(Placement::Unchanged));
        assert_eq!(b.endpoints(), Ok((c(0, 0), c(3, 3))));
        assert!(!b.grid().is_open(c(1, 1)));
    }

    #[test]
    fn place_over_blocked_cell_reopens_it() {
        let mut b = Board::new(3).unwrap();
        b.set_passability(c(1, 1), Passability::Blocked).unwrap();
        assert_eq!(b.place(c(1, 1)), Ok(Placement::Start));
        assert!(b.grid().is_open(c(1, 1)));
    }

    #[test]
    fn erase_clears_designation() {
        let mut b = Board::new(3).unwrap();
        b.place(c(0, 0)).unwrap();
        b.place(c(2, 2)).unwrap();
        b.erase(c(0, 0)).unwrap();
        assert_eq!(b.start(), None);
        assert_eq!(b.end(), Some(c(2, 2)));
        assert_eq!(
            b.endpoints(),
            Err(GridError::InvalidEndpoints(EndpointError::MissingStart))
        );
        // The next placement refills the start slot.
        assert_eq!(b.place(c(1, 0)), Ok(Placement::Start));
    }

    #[test]
    fn endpoint_invariants() {
        let mut b = Board::new(3).unwrap();
        b.set_start(c(0, 0)).unwrap();
        assert_eq!(
            b.set_end(c(0, 0)),
            Err(GridError::InvalidEndpoints(EndpointError::SameCell(c(0, 0))))
        );
        assert_eq!(
            b.set_end(c(3, 0)),
            Err(GridError::InvalidEndpoints(EndpointError::EndOutOfBounds(c(3, 0))))
        );
        b.set_passability(c(2, 2), Passability::Blocked).unwrap();
        assert_eq!(
            b.set_end(c(2, 2)),
            Err(GridError::InvalidEndpoints(EndpointError::EndBlocked(c(2, 2))))
        );
        assert_eq!(
            b.set_passability(c(0, 0), Passability::Blocked),
            Err(GridError::InvalidEndpoints(EndpointError::StartBlocked(c(0, 0))))
        );
    }

    #[test]
    fn clear_resets_everything() {
        let mut b = Board::new(3).unwrap();
        b.place(c(0, 0)).unwrap();
        b.place(c(2, 2)).unwrap();
        b.place(c(1, 1)).unwrap();
        b.clear();
        assert_eq!(b, Board::new(3).unwrap());
    }

    #[test]
    fn out_of_bounds_edits() {
        let mut b = Board::new(2).unwrap();
        assert!(matches!(b.place(c(2, 0)), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(b.erase(c(0, -1)), Err(GridError::OutOfBounds { .. })));
    }
}
