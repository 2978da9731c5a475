//! Layout model
//!
//! A layout is the full grid of cells in a room. Seats are the subset of
//! cells that can hold a student (desks and chairs).

mod cell;
mod grid;
mod position;


pub use cell::{Cell, CellKind, Seat};
pub use grid::{Layout, DEFAULT_COLS, DEFAULT_ROWS};
pub use position::Position;
