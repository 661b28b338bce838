//! Geometry primitive: [`Coordinate`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward ("south"),
//! columns grow rightward ("east").

use std::fmt;
use std::ops::Add;

/// A cell position in a square grid, identified by `(row, col)`.
///
/// Components are signed so that stepping off an edge produces a value that
/// is simply out of bounds instead of wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours in canonical search order:
    /// south, north, east, west.
    #[inline]
    pub const fn neighbors_4(self) -> [Coordinate; 4] {
        [
            self.shift(1, 0),
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(0, -1),
        ]
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coordinate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_order_is_south_north_east_west() {
        let c = Coordinate::new(2, 2);
        assert_eq!(
            c.neighbors_4(),
            [
                Coordinate::new(3, 2),
                Coordinate::new(1, 2),
                Coordinate::new(2, 3),
                Coordinate::new(2, 1),
            ]
        );
    }

    #[test]
    fn adjacency() {
        let c = Coordinate::new(1, 1);
        assert!(c.is_adjacent(Coordinate::new(0, 1)));
        assert!(c.is_adjacent(Coordinate::new(1, 2)));
        assert!(!c.is_adjacent(Coordinate::new(2, 2)));
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![
            Coordinate::new(1, 0),
            Coordinate::new(0, 2),
            Coordinate::new(0, 1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(0, 2),
                Coordinate::new(1, 0),
            ]
        );
    }

    #[test]
    fn display_and_from_tuple() {
        let c: Coordinate = (3, 4).into();
        assert_eq!(c + Coordinate::new(1, 1), Coordinate::new(4, 5));
        assert_eq!(c.to_string(), "(3, 4)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coordinate_round_trip() {
        let c = Coordinate::new(3, 7);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
