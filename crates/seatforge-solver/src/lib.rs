//! SeatForge Seat-Assignment Engine
//!
//! This crate provides the engine that turns a layout, a roster and a rule
//! list into a seating chart:
//! - Partial assignment with seat and student lookups
//! - Safety evaluator for separation rules
//! - Placement phases (front-priority scan, randomized probing with fallback)
//! - The engine state machine and its result
//! - Violation diagnostics and run statistics
//! - Background execution (manager module)
//!
//! Logging levels:
//! - **INFO**: Run start/end, phase summaries
//! - **DEBUG**: Each committed placement, deferrals, forced placements
//! - **TRACE**: Individual probe trials

pub mod assignment;
pub mod diagnostics;
pub mod engine;
pub mod manager;
pub mod phase;
pub mod placement;
pub mod result;
pub mod safety;
pub mod scope;
pub mod statistics;

pub use assignment::Assignment;
pub use diagnostics::{find_violations, SeatingAnalysis, SeparationViolation, ViolationCause};
pub use engine::{assign_seats, SeatingEngine};
pub use manager::{SeatingJob, SeatingManager};
pub use phase::{GeneralPlacementPhase, PlacementPhase, PriorityPlacementPhase};
pub use placement::{PlacementKind, PlacementRecord};
pub use result::SeatingResult;
pub use safety::{is_safe, SafetyEvaluator};
pub use scope::{EngineState, RunScope};
pub use statistics::RunStatistics;
