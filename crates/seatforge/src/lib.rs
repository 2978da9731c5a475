//! SeatForge - Classroom Seat Assignment in Rust
//!
//! Describe the room, the students and the rules, then call [`solve`].
//!
//! # Example
//!
//! ```rust
//! use seatforge::prelude::*;
//!
//! let layout = Layout::from_grid(vec![vec![CellKind::Desk; 4]; 2]).unwrap();
//! let roster = Roster::new(vec![
//!     Student::new("amy", "Amy Pond"),
//!     Student::new("rory", "Rory Williams"),
//!     Student::new("clara", "Clara Oswald"),
//! ])
//! .unwrap();
//! let problem = SeatingProblem::new(layout, roster, vec![])
//!     .with_rule(Rule::separate("r1", "amy", "rory", MinDistance::DEFAULT))
//!     .with_rule(Rule::front_priority("r2", ["clara"]));
//!
//! let result = SeatingEngine::with_seed(42).solve(&problem);
//! assert!(result.unseated.is_empty());
//! assert_eq!(result.seat_of(&"clara".into()).map(|p| p.row), Some(0));
//! ```

// Domain types
pub use seatforge_core::{
    Cell, CellKind, Layout, MinDistance, Position, Roster, Rule, RuleId, RuleIndex, RuleKind,
    Seat, SeatForgeError, SeatingProblem, SeatingScore, SeparationEdge, Student, StudentId,
    DEFAULT_COLS, DEFAULT_ROWS,
};

// Configuration
pub use seatforge_config::{
    ConfigError, EnvironmentMode, FallbackType, GeneralPlacementConfig, SeatingConfig,
    DEFAULT_MAX_TRIALS,
};

// Engine
pub use seatforge_solver::diagnostics::SeatingAnalysis;
pub use seatforge_solver::{
    assign_seats, find_violations, is_safe, Assignment, PlacementKind, PlacementRecord,
    RunStatistics, SeatingEngine, SeatingJob, SeatingManager, SeatingResult,
    SeparationViolation, ViolationCause,
};

#[cfg(feature = "console")]
pub mod console;

mod solve;
pub use solve::{solve, solve_with_config, CONFIG_FILE};

pub mod prelude {
    pub use super::{solve, solve_with_config};
    pub use super::{
        Assignment, CellKind, Layout, MinDistance, Position, Roster, Rule, SeatingAnalysis,
        SeatingConfig, SeatingEngine, SeatingProblem, SeatingResult, SeatingScore, Student,
        StudentId,
    };
}
