//! Text layouts for boards.
//!
//! One line per row, one character per cell:
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` | open cell |
//! | `#` | blocked cell |
//! | `S` | start (open) |
//! | `E` | end (open) |
//!
//! The layout must be square. Leading/trailing whitespace around the whole
//! string is trimmed, as is trailing whitespace on each line.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::GridError;
use crate::geom::Coordinate;
use crate::grid::{Grid, Passability};

pub const OPEN: char = '.';
pub const BLOCKED: char = '#';
pub const START: char = 'S';
pub const END: char = 'E';

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A row's width differs from the number of rows.
    NotSquare { row: i32, width: i32, rows: i32 },
    /// A character outside the layout alphabet was found.
    InvalidChar { ch: char, coord: Coordinate },
    /// `S` or `E` appears more than once.
    DuplicateMarker { ch: char, coord: Coordinate },
    /// The layout described an unusable grid.
    Grid(GridError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { row, width, rows } => {
                write!(f, "layout: row {row} has width {width}, expected {rows}")
            }
            Self::InvalidChar { ch, coord } => {
                write!(f, "layout: invalid character \u{201c}{ch}\u{201d} at {coord}")
            }
            Self::DuplicateMarker { ch, coord } => {
                write!(f, "layout: second \u{201c}{ch}\u{201d} marker at {coord}")
            }
            Self::Grid(e) => write!(f, "layout: {e}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for LayoutError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim_end).collect();
        let rows = lines.len() as i32;
        let mut grid = Grid::new(rows)?;
        let mut start = None;
        let mut end = None;

        for (row, line) in lines.iter().enumerate() {
            let row = row as i32;
            let width = line.chars().count() as i32;
            if width != rows {
                return Err(LayoutError::NotSquare { row, width, rows });
            }
            for (col, ch) in line.chars().enumerate() {
                let coord = Coordinate::new(row, col as i32);
                match ch {
                    OPEN => {}
                    BLOCKED => grid.set_passability(coord, Passability::Blocked)?,
                    START | END => {
                        let slot = if ch == START { &mut start } else { &mut end };
                        if slot.is_some() {
                            return Err(LayoutError::DuplicateMarker { ch, coord });
                        }
                        *slot = Some(coord);
                    }
                    _ => return Err(LayoutError::InvalidChar { ch, coord }),
                }
            }
        }

        let mut board = Board::from_grid(grid);
        if let Some(c) = start {
            board.set_start(c)?;
        }
        if let Some(c) = end {
            board.set_end(c)?;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.grid().size();
        for (c, p) in self.grid().iter() {
            let ch = if self.start() == Some(c) {
                START
            } else if self.end() == Some(c) {
                END
            } else if p.is_open() {
                OPEN
            } else {
                BLOCKED
            };
            write!(f, "{ch}")?;
            if c.col == n - 1 && c.row < n - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
