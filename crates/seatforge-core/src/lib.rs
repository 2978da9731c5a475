//! SeatForge Core - Core types for classroom seat assignment
//!
//! This crate provides the fundamental abstractions for SeatForge:
//! - Layout types describing the room grid and its seats
//! - Student and roster types
//! - Rule types and the per-student rule index
//! - The score type used to report placement quality

pub mod error;
pub mod layout;
pub mod problem;
pub mod rule;
pub mod score;
pub mod student;

pub use error::{Result, SeatForgeError};
pub use layout::{Cell, CellKind, Layout, Position, Seat, DEFAULT_COLS, DEFAULT_ROWS};
pub use problem::SeatingProblem;
pub use rule::{MinDistance, Rule, RuleId, RuleIndex, RuleKind, SeparationEdge};
pub use score::{ScoreParseError, SeatingScore};
pub use student::{Roster, Student, StudentId};
