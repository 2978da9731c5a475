//! Cell and seat types

use std::fmt;

use super::Position;

/// What occupies a grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CellKind {
    /// Open floor.
    #[default]
    Empty,
    /// A student desk.
    Desk,
    /// A student chair.
    Chair,
    /// The teacher's station.
    Teacher,
    /// A door.
    Door,
}

impl CellKind {
    /// Returns true for kinds a student can be seated at.
    #[inline]
    pub const fn is_seatable(self) -> bool {
        matches!(self, CellKind::Desk | CellKind::Chair)
    }

    /// Single-character symbol used in plain-text layouts.
    pub const fn symbol(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Desk => 'D',
            CellKind::Chair => 'C',
            CellKind::Teacher => 'T',
            CellKind::Door => '|',
        }
    }

    /// Inverse of [`CellKind::symbol`].
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(CellKind::Empty),
            'D' => Some(CellKind::Desk),
            'C' => Some(CellKind::Chair),
            'T' => Some(CellKind::Teacher),
            '|' => Some(CellKind::Door),
            _ => None,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::Empty => "empty",
            CellKind::Desk => "desk",
            CellKind::Chair => "chair",
            CellKind::Teacher => "teacher",
            CellKind::Door => "door",
        };
        f.write_str(name)
    }
}

/// A single cell of the layout grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub position: Position,
    pub kind: CellKind,
}

impl Cell {
    pub const fn new(row: usize, col: usize, kind: CellKind) -> Self {
        Self {
            position: Position::new(row, col),
            kind,
        }
    }

    /// Returns the seat at this cell, if the cell is seatable.
    pub fn as_seat(&self) -> Option<Seat> {
        self.kind.is_seatable().then_some(Seat {
            position: self.position,
            kind: self.kind,
        })
    }
}

/// A seatable cell. Seats hold at most one student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    pub position: Position,
    pub kind: CellKind,
}

impl Seat {
    #[inline]
    pub fn row(&self) -> usize {
        self.position.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.position.col
    }
}
