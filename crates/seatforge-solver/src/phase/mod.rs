//! Placement phases
//!
//! A seating run executes two phases in sequence:
//! - PriorityPlacementPhase: front-priority students take the first safe seat
//! - GeneralPlacementPhase: everyone else, by random probing with a fallback

mod general;
mod priority;

use std::fmt::Debug;

use crate::scope::RunScope;

pub use general::GeneralPlacementPhase;
pub use priority::PriorityPlacementPhase;

/// One placement pass over the roster.
///
/// Phases only add placements; a student seated by an earlier phase keeps
/// that seat.
pub trait PlacementPhase: Send + Debug {
    /// Executes this phase against the run scope.
    fn place(&mut self, scope: &mut RunScope);

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}
