//! The layout grid

use std::fmt;

use crate::error::{Result, SeatForgeError};

use super::{Cell, CellKind, Seat};

/// Default number of grid rows for a new classroom.
pub const DEFAULT_ROWS: usize = 12;

/// Default number of grid columns for a new classroom.
pub const DEFAULT_COLS: usize = 16;

/// A rectangular grid of cells.
///
/// Cells are stored densely in row-major order, so every coordinate inside
/// `rows x cols` has exactly one cell and coordinates outside it are
/// rejected at construction.
///
/// # Examples
///
/// ```
/// use seatforge_core::{CellKind, Layout, Position};
///
/// let mut layout = Layout::new(2, 3);
/// layout.set_kind(1, 2, CellKind::Desk).unwrap();
/// layout.set_kind(0, 1, CellKind::Chair).unwrap();
///
/// let seats = layout.seats();
/// assert_eq!(seats.len(), 2);
/// assert_eq!(seats[0].position, Position::new(0, 1));
/// assert_eq!(seats[1].position, Position::new(1, 2));
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "serde_repr::LayoutRepr", into = "serde_repr::LayoutRepr")
)]
pub struct Layout {
    rows: usize,
    cols: usize,
    kinds: Vec<CellKind>,
}

impl Layout {
    /// Creates a layout of `rows x cols` empty cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            kinds: vec![CellKind::Empty; rows * cols],
        }
    }

    /// Creates an empty layout with the default classroom dimensions.
    pub fn classroom() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Builds a layout from explicit cells. Unlisted coordinates are empty.
    ///
    /// # Errors
    ///
    /// Returns an error if a cell lies outside the grid or two cells share
    /// the same coordinates.
    pub fn from_cells(
        rows: usize,
        cols: usize,
        cells: impl IntoIterator<Item = Cell>,
    ) -> Result<Self> {
        let mut layout = Self::new(rows, cols);
        let mut seen = vec![false; rows * cols];

        for cell in cells {
            let idx = layout.index_of(cell.position.row, cell.position.col)?;
            if seen[idx] {
                return Err(SeatForgeError::DuplicateCell {
                    row: cell.position.row,
                    col: cell.position.col,
                });
            }
            seen[idx] = true;
            layout.kinds[idx] = cell.kind;
        }

        Ok(layout)
    }

    /// Builds a layout from rows of cell kinds.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are not all the same width.
    pub fn from_grid(grid: Vec<Vec<CellKind>>) -> Result<Self> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        let mut kinds = Vec::with_capacity(rows * cols);

        for (row, line) in grid.into_iter().enumerate() {
            if line.len() != cols {
                return Err(SeatForgeError::RaggedGrid {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            kinds.extend(line);
        }

        Ok(Self { rows, cols, kinds })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at the given coordinates, if inside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.index_of(row, col)
            .ok()
            .map(|idx| Cell::new(row, col, self.kinds[idx]))
    }

    /// Changes the kind of one cell.
    pub fn set_kind(&mut self, row: usize, col: usize, kind: CellKind) -> Result<()> {
        let idx = self.index_of(row, col)?;
        self.kinds[idx] = kind;
        Ok(())
    }

    /// Iterates all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .map(move |(idx, &kind)| Cell::new(idx / self.cols, idx % self.cols, kind))
    }

    /// Returns every seatable cell, row-major ascending.
    ///
    /// This order is the scan order for front-priority placement and the
    /// fallback order for general placement.
    pub fn seats(&self) -> Vec<Seat> {
        self.cells().filter_map(|cell| cell.as_seat()).collect()
    }

    /// Number of seatable cells.
    pub fn seat_count(&self) -> usize {
        self.kinds.iter().filter(|k| k.is_seatable()).count()
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(SeatForgeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::classroom()
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("seats", &self.seat_count())
            .finish()
    }
}

/// Renders the grid with one symbol per cell, front row first.
impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = self.kinds[row * self.cols..(row + 1) * self.cols]
                .iter()
                .map(|k| k.symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_repr {
    use super::{Cell, Layout};
    use crate::error::SeatForgeError;
    use crate::layout::CellKind;

    /// Sparse form: only non-empty cells are written out.
    #[derive(serde::Serialize, serde::Deserialize)]
    pub(super) struct LayoutRepr {
        rows: usize,
        cols: usize,
        #[serde(default)]
        cells: Vec<Cell>,
    }

    impl TryFrom<LayoutRepr> for Layout {
        type Error = SeatForgeError;

        fn try_from(repr: LayoutRepr) -> Result<Self, Self::Error> {
            Layout::from_cells(repr.rows, repr.cols, repr.cells)
        }
    }

    impl From<Layout> for LayoutRepr {
        fn from(layout: Layout) -> Self {
            let cells = layout
                .cells()
                .filter(|c| c.kind != CellKind::Empty)
                .collect();
            LayoutRepr {
                rows: layout.rows,
                cols: layout.cols,
                cells,
            }
        }
    }
}
