//! A square passability grid.
//!
//! [`Grid`] stores one [`Passability`] flag per cell and nothing else: any
//! per-search bookkeeping lives with the search, so the same grid can be
//! searched repeatedly without a reset pass.

use crate::error::GridError;
use crate::geom::Coordinate;

/// Whether a cell can be stepped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Passability {
    #[default]
    Open,
    Blocked,
}

impl Passability {
    /// Whether the cell is open.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// An N×N grid of [`Passability`] flags, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Passability>,
    size: i32,
}

impl Grid {
    /// Create an `n`×`n` grid with every cell open.
    pub fn new(n: i32) -> Result<Self, GridError> {
        if n <= 0 {
            return Err(GridError::InvalidSize(n));
        }
        let len = n as usize * n as usize;
        Ok(Self {
            cells: vec![Passability::Open; len],
            size: n,
        })
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells (N²).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies in `[0, N)` on both axes.
    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.size && c.col < self.size
    }

    /// Row-major flat index of `c`, or `OutOfBounds`.
    #[inline]
    pub fn index(&self, c: Coordinate) -> Result<usize, GridError> {
        if !self.contains(c) {
            return Err(GridError::OutOfBounds {
                coord: c,
                size: self.size,
            });
        }
        Ok(c.row as usize * self.size as usize + c.col as usize)
    }

    /// Inverse of [`Grid::index`]. `idx` must be below [`Grid::len`].
    #[inline]
    pub fn coordinate(&self, idx: usize) -> Coordinate {
        let n = self.size as usize;
        Coordinate::new((idx / n) as i32, (idx % n) as i32)
    }

    /// Passability of the cell at `c`.
    pub fn passability(&self, c: Coordinate) -> Result<Passability, GridError> {
        let idx = self.index(c)?;
        Ok(self.cells[idx])
    }

    /// Whether `c` is in bounds and open. Never fails.
    #[inline]
    pub fn is_open(&self, c: Coordinate) -> bool {
        self.index(c).is_ok_and(|i| self.cells[i].is_open())
    }

    /// Set the passability of the cell at `c`.
    ///
    /// Keeping start/end cells open is the caller's job; see
    /// [`Board`](crate::board::Board) for an owner that enforces it.
    pub fn set_passability(&mut self, c: Coordinate, state: Passability) -> Result<(), GridError> {
        let idx = self.index(c)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Reset every cell to open.
    pub fn clear(&mut self) {
        self.cells.fill(Passability::Open);
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|p| !p.is_open()).count()
    }

    /// Open, in-bounds neighbours of `c` in canonical order
    /// (south, north, east, west).
    pub fn neighbors(&self, c: Coordinate) -> Result<Vec<Coordinate>, GridError> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(c, &mut buf)?;
        Ok(buf)
    }

    /// Like [`Grid::neighbors`] but appends into a caller-owned buffer.
    /// The buffer is cleared first.
    pub fn neighbors_into(
        &self,
        c: Coordinate,
        buf: &mut Vec<Coordinate>,
    ) -> Result<(), GridError> {
        self.index(c)?;
        buf.clear();
        buf.extend(c.neighbors_4().into_iter().filter(|&n| self.is_open(n)));
        Ok(())
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.cells.len()).map(|i| self.coordinate(i))
    }

    /// `(Coordinate, Passability)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Passability)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &p)| (self.coordinate(i), p))
    }
}
