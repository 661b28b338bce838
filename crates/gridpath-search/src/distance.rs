use gridpath_core::Coordinate;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coordinate, b: Coordinate) -> u32 {
    (a.row - b.row).unsigned_abs() + (a.col - b.col).unsigned_abs()
}
