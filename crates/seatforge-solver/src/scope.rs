//! Run-level scope.

use std::collections::HashSet;
use std::fmt;
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use seatforge_core::{Layout, Position, Roster, RuleIndex, Seat, SeatingScore, StudentId};

use crate::assignment::Assignment;
use crate::diagnostics::find_violations;
use crate::placement::{PlacementKind, PlacementRecord};
use crate::result::SeatingResult;
use crate::safety::SafetyEvaluator;
use crate::statistics::RunStatistics;

/// Engine states, in the only order a run visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum EngineState {
    #[default]
    Unplaced,
    PriorityPlacement,
    GeneralPlacement,
    Done,
}

impl EngineState {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineState::Unplaced => "unplaced",
            EngineState::PriorityPlacement => "priority_placement",
            EngineState::GeneralPlacement => "general_placement",
            EngineState::Done => "done",
        }
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All mutable state of one seating run.
///
/// Created fresh per run, passed by `&mut` through the phases and consumed
/// by [`RunScope::finish`]. Nothing here outlives the run.
pub struct RunScope {
    seats: Vec<Seat>,
    order: Vec<StudentId>,
    index: RuleIndex,
    assignment: Assignment,
    placements: Vec<PlacementRecord>,
    deferred: Vec<StudentId>,
    unseated: Vec<StudentId>,
    rng: ChaCha8Rng,
    seed: u64,
    state: EngineState,
    statistics: RunStatistics,
    start_time: Instant,
}

impl RunScope {
    /// Prepares a run: collects seats in layout order and shuffles the
    /// roster with a generator seeded from `seed`.
    pub fn new(layout: &Layout, roster: &Roster, index: RuleIndex, seed: u64) -> Self {
        let seats = layout.seats();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut order: Vec<StudentId> = roster.ids().cloned().collect();
        order.shuffle(&mut rng);

        let statistics = RunStatistics::new(seats.len(), order.len());
        Self {
            seats,
            order,
            index,
            assignment: Assignment::new(),
            placements: Vec::new(),
            deferred: Vec::new(),
            unseated: Vec::new(),
            rng,
            seed,
            state: EngineState::Unplaced,
            statistics,
            start_time: Instant::now(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Moves the run forward to `next`. States never go backwards.
    pub fn transition(&mut self, next: EngineState) {
        debug_assert!(next >= self.state, "{} -> {}", self.state, next);
        debug!(event = "state_transition", from = %self.state, to = %next);
        self.state = next;
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Roster ids in processing order.
    pub fn order(&self) -> &[StudentId] {
        &self.order
    }

    pub fn index(&self) -> &RuleIndex {
        &self.index
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub fn statistics(&self) -> &RunStatistics {
        &self.statistics
    }

    pub fn placements(&self) -> &[PlacementRecord] {
        &self.placements
    }

    pub fn statistics_mut(&mut self) -> &mut RunStatistics {
        &mut self.statistics
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn is_priority(&self, student: &StudentId) -> bool {
        self.index.is_priority(student)
    }

    pub fn is_seated(&self, student: &StudentId) -> bool {
        self.assignment.is_seated(student)
    }

    pub fn is_safe(&self, student: &StudentId, position: Position) -> bool {
        SafetyEvaluator::new(&self.index).is_safe(student, position, &self.assignment)
    }

    /// First unoccupied seat in layout order that is safe for `student`.
    pub fn first_safe_free_seat(&self, student: &StudentId) -> Option<Position> {
        SafetyEvaluator::new(&self.index).first_safe_seat(student, &self.seats, &self.assignment)
    }

    /// Unoccupied seats in layout order.
    pub fn free_seats(&self) -> Vec<Position> {
        self.seats
            .iter()
            .map(|seat| seat.position)
            .filter(|&pos| !self.assignment.is_occupied(pos))
            .collect()
    }

    /// Seats `student` at `position` and records how it happened.
    ///
    /// Returns false and changes nothing when the seat is taken or the
    /// student already sits elsewhere. A student left without a seat by the
    /// time the run finishes is reported as unseated.
    pub fn commit(
        &mut self,
        student: StudentId,
        position: Position,
        kind: PlacementKind,
    ) -> bool {
        if !self.assignment.assign(student.clone(), position) {
            warn!(
                event = "placement_rejected",
                student = %student,
                seat = %position,
                kind = %kind,
            );
            return false;
        }

        if kind.is_forced() {
            let conflicts = SafetyEvaluator::new(&self.index)
                .conflicts(&student, position, &self.assignment)
                .len();
            debug!(
                event = "forced_placement",
                student = %student,
                seat = %position,
                conflicts = conflicts,
                kind = %kind,
            );
        } else {
            debug!(event = "placement", student = %student, seat = %position, kind = %kind);
        }

        self.statistics.record_placement(kind);
        self.placements.push(PlacementRecord {
            student,
            seat: position,
            kind,
        });
        true
    }

    /// Postpones a priority student to general placement.
    pub fn defer(&mut self, student: StudentId) {
        debug!(event = "deferred", student = %student);
        self.statistics.deferred += 1;
        self.deferred.push(student);
    }

    pub fn deferred(&self) -> &[StudentId] {
        &self.deferred
    }

    /// Records that no seat was left for `student`.
    pub fn mark_unseated(&mut self, student: StudentId) {
        debug!(event = "unseated", student = %student);
        self.statistics.unseated += 1;
        self.unseated.push(student);
    }

    /// Ends the run and assembles its result.
    pub fn finish(mut self) -> SeatingResult {
        self.transition(EngineState::Done);

        let unseated: HashSet<StudentId> = self.unseated.iter().cloned().collect();
        let stranded: Vec<StudentId> = self
            .order
            .iter()
            .filter(|id| !self.assignment.is_seated(id) && !unseated.contains(*id))
            .cloned()
            .collect();
        for student in stranded {
            self.mark_unseated(student);
        }

        self.statistics.duration = self.elapsed();

        let violations = find_violations(&self.index, &self.assignment, Some(&self.placements));
        let score = SeatingScore::from_counts(self.unseated.len(), violations.len());

        SeatingResult {
            assignment: self.assignment,
            unseated: self.unseated,
            placements: self.placements,
            violations,
            statistics: self.statistics,
            seed: self.seed,
            score,
        }
    }
}

impl fmt::Debug for RunScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunScope")
            .field("state", &self.state)
            .field("seed", &self.seed)
            .field("seats", &self.seats.len())
            .field("students", &self.order.len())
            .field("seated", &self.assignment.len())
            .finish()
    }
}

#[cfg(test)]
mod tests;
