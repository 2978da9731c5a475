//! Layout fixtures.

use seatforge_core::{CellKind, Layout};

/// Builds a layout from ASCII art, one line per row.
///
/// Uses the cell symbols of [`CellKind::symbol`]. Blank lines and leading or
/// trailing whitespace are ignored, so fixtures can be indented with the
/// surrounding code.
///
/// # Panics
///
/// Panics on unknown symbols or rows of different widths.
pub fn layout_from_ascii(art: &str) -> Layout {
    let grid: Vec<Vec<CellKind>> = art
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.chars()
                .map(|c| {
                    CellKind::from_symbol(c)
                        .unwrap_or_else(|| panic!("unknown cell symbol {c:?} in {line:?}"))
                })
                .collect()
        })
        .collect();
    Layout::from_grid(grid).expect("fixture grid should be rectangular")
}

/// One row of `cols` desks.
pub fn desk_row(cols: usize) -> Layout {
    filled(1, cols)
}

/// One desk per row, `rows` deep. Row 0 is the front.
pub fn single_column(rows: usize) -> Layout {
    filled(rows, 1)
}

fn filled(rows: usize, cols: usize) -> Layout {
    Layout::from_grid(vec![vec![CellKind::Desk; cols]; rows])
        .expect("filled grid is rectangular")
}
