//! General placement: random probing with a deterministic fallback.

use rand::Rng;
use tracing::{info, trace};

use seatforge_config::{FallbackType, GeneralPlacementConfig};
use seatforge_core::{Position, StudentId};

use super::PlacementPhase;
use crate::placement::PlacementKind;
use crate::scope::RunScope;

/// Seats every student the priority phase left unseated.
///
/// For each student, in processing order, up to `max_trials` seats are drawn
/// uniformly at random from the free seats and the first safe one is taken.
/// When every draw misses, the configured fallback decides. Students that
/// find no free seat at all are marked unseated.
#[derive(Debug, Clone)]
pub struct GeneralPlacementPhase {
    max_trials: usize,
    fallback: FallbackType,
}

impl GeneralPlacementPhase {
    pub fn new(config: &GeneralPlacementConfig) -> Self {
        Self {
            max_trials: config.max_trials,
            fallback: config.fallback,
        }
    }

    fn probe(
        &self,
        scope: &mut RunScope,
        student: &StudentId,
        free: &[Position],
    ) -> Option<(Position, usize)> {
        for trial in 1..=self.max_trials {
            let seat = free[scope.rng().random_range(0..free.len())];
            scope.statistics_mut().probe_trials += 1;
            let safe = scope.is_safe(student, seat);
            trace!(
                event = "probe",
                student = %student,
                trial = trial,
                seat = %seat,
                safe = safe,
            );
            if safe {
                return Some((seat, trial));
            }
        }
        None
    }

    /// Picks a seat once probing failed. `free` is non-empty and in layout
    /// order.
    fn fall_back(
        &self,
        scope: &RunScope,
        student: &StudentId,
        free: &[Position],
    ) -> (Position, PlacementKind) {
        let first_safe = free.iter().copied().find(|&pos| scope.is_safe(student, pos));
        match self.fallback {
            FallbackType::FirstSafeThenFirstFree => match first_safe {
                Some(seat) => (seat, PlacementKind::Rescue),
                None => (
                    free[0],
                    PlacementKind::Forced {
                        safe_seat_available: false,
                    },
                ),
            },
            FallbackType::FirstFree => {
                if first_safe == Some(free[0]) {
                    (free[0], PlacementKind::Rescue)
                } else {
                    (
                        free[0],
                        PlacementKind::Forced {
                            safe_seat_available: first_safe.is_some(),
                        },
                    )
                }
            }
        }
    }
}

impl Default for GeneralPlacementPhase {
    fn default() -> Self {
        Self::new(&GeneralPlacementConfig::default())
    }
}

impl PlacementPhase for GeneralPlacementPhase {
    fn place(&mut self, scope: &mut RunScope) {
        let phase_start = scope.elapsed();
        let students: Vec<StudentId> = scope
            .order()
            .iter()
            .filter(|id| !scope.is_seated(id))
            .cloned()
            .collect();

        info!(
            event = "phase_start",
            phase = "General Placement",
            phase_index = 1,
            students = students.len(),
            max_trials = self.max_trials,
            fallback = ?self.fallback,
        );

        let mut probed = 0usize;
        let mut fallen_back = 0usize;
        let mut unseated = 0usize;
        for student in students {
            let free = scope.free_seats();
            if free.is_empty() {
                scope.mark_unseated(student);
                unseated += 1;
                continue;
            }

            match self.probe(scope, &student, &free) {
                Some((seat, trial)) => {
                    scope.commit(student, seat, PlacementKind::Probe { trial });
                    probed += 1;
                }
                None => {
                    let (seat, kind) = self.fall_back(scope, &student, &free);
                    scope.commit(student, seat, kind);
                    fallen_back += 1;
                }
            }
        }

        info!(
            event = "phase_end",
            phase = "General Placement",
            phase_index = 1,
            duration_ms = (scope.elapsed() - phase_start).as_millis() as u64,
            probed = probed,
            fallback = fallen_back,
            unseated = unseated,
        );
    }

    fn phase_type_name(&self) -> &'static str {
        "GeneralPlacement"
    }
}
