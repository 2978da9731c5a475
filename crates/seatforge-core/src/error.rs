//! Error types for SeatForge

use thiserror::Error;

use crate::student::StudentId;

/// Main error type for SeatForge operations.
///
/// Only construction-time mistakes end up here. Seat scarcity and
/// unsatisfiable rules are reported in the seating result instead.
#[derive(Debug, Error)]
pub enum SeatForgeError {
    /// A cell lies outside the layout grid
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} layout")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Two cells were given for the same coordinates
    #[error("Duplicate cell at ({row}, {col})")]
    DuplicateCell { row: usize, col: usize },

    /// A grid row has a different width than the first row
    #[error("Grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The same student id appears twice in a roster
    #[error("Duplicate student id: {0}")]
    DuplicateStudent(StudentId),

    /// A separation radius is negative or not finite
    #[error("Invalid separation distance: {0}")]
    InvalidDistance(f64),

    /// Error in engine configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A background run ended without delivering a result
    #[error("Seating run was cancelled")]
    Cancelled,
}

/// Result type alias for SeatForge operations
pub type Result<T> = std::result::Result<T, SeatForgeError>;
