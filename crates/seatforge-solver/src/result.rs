//! Seating run result

use seatforge_core::{Position, SeatingScore, StudentId};

use crate::assignment::Assignment;
use crate::diagnostics::SeparationViolation;
use crate::placement::PlacementRecord;
use crate::statistics::RunStatistics;

/// Outcome of one seating run.
///
/// Unseated students and broken rules are reported here, never as errors.
#[derive(Debug, Clone)]
pub struct SeatingResult {
    /// Final seat-to-student mapping.
    pub assignment: Assignment,
    /// Students with no seat, in processing order.
    pub unseated: Vec<StudentId>,
    /// Every committed placement, in commit order.
    pub placements: Vec<PlacementRecord>,
    /// Separation rules broken by the final assignment.
    pub violations: Vec<SeparationViolation>,
    pub statistics: RunStatistics,
    /// Seed the run's random source was created from.
    pub seed: u64,
    pub score: SeatingScore,
}

impl SeatingResult {
    pub fn seat_of(&self, student: &StudentId) -> Option<Position> {
        self.assignment.seat_of(student)
    }

    /// True when everyone has a seat and no rule is broken.
    pub fn is_perfect(&self) -> bool {
        self.score == SeatingScore::ZERO
    }

    /// Seated students in commit order.
    pub fn placement_order(&self) -> impl Iterator<Item = &StudentId> {
        self.placements.iter().map(|p| &p.student)
    }
}
