//! Precondition errors shared by the grid, the board and the search.

use std::fmt;

use crate::geom::Coordinate;

/// Why a start/end pair cannot be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointError {
    /// No start has been designated.
    MissingStart,
    /// No end has been designated.
    MissingEnd,
    /// Start and end are the same cell.
    SameCell(Coordinate),
    /// The start cell is blocked.
    StartBlocked(Coordinate),
    /// The end cell is blocked.
    EndBlocked(Coordinate),
    /// The start lies outside the grid.
    StartOutOfBounds(Coordinate),
    /// The end lies outside the grid.
    EndOutOfBounds(Coordinate),
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("no start cell designated"),
            Self::MissingEnd => f.write_str("no end cell designated"),
            Self::SameCell(c) => write!(f, "start and end are both {c}"),
            Self::StartBlocked(c) => write!(f, "start {c} is blocked"),
            Self::EndBlocked(c) => write!(f, "end {c} is blocked"),
            Self::StartOutOfBounds(c) => write!(f, "start {c} is outside the grid"),
            Self::EndOutOfBounds(c) => write!(f, "end {c} is outside the grid"),
        }
    }
}

/// Errors raised by grid construction, grid queries and run preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Grid dimension was not strictly positive.
    InvalidSize(i32),
    /// A coordinate fell outside `[0, size)` on either axis.
    OutOfBounds { coord: Coordinate, size: i32 },
    /// The start/end designation is unusable.
    InvalidEndpoints(EndpointError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(n) => write!(f, "invalid grid size {n}: must be at least 1"),
            Self::OutOfBounds { coord, size } => {
                write!(f, "coordinate {coord} out of bounds for {size}x{size} grid")
            }
            Self::InvalidEndpoints(e) => write!(f, "invalid endpoints: {e}"),
        }
    }
}

impl std::error::Error for GridError {}

impl From<EndpointError> for GridError {
    fn from(e: EndpointError) -> Self {
        Self::InvalidEndpoints(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GridError::InvalidSize(0).to_string(),
            "invalid grid size 0: must be at least 1"
        );
        let oob = GridError::OutOfBounds {
            coord: Coordinate::new(5, -1),
            size: 4,
        };
        assert_eq!(oob.to_string(), "coordinate (5, -1) out of bounds for 4x4 grid");
        let e: GridError = EndpointError::SameCell(Coordinate::ZERO).into();
        assert_eq!(e.to_string(), "invalid endpoints: start and end are both (0, 0)");
    }
}
