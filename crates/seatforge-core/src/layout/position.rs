//! Grid coordinates

use std::fmt;

/// A `(row, col)` coordinate on the layout grid.
///
/// Positions order row-major: by row first, then by column. Row 0 is the
/// front of the room.
///
/// # Examples
///
/// ```
/// use seatforge_core::Position;
///
/// let a = Position::new(0, 0);
/// let b = Position::new(3, 4);
/// assert_eq!(a.distance_to(b), 5.0);
/// assert!(a < b);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Euclidean distance in grid units.
    #[inline]
    pub fn distance_to(&self, other: Position) -> f64 {
        let dr = self.row.abs_diff(other.row) as f64;
        let dc = self.col.abs_diff(other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
