//! Run statistics.
//!
//! Counters collected while a seating run executes, reported with the result
//! and in the `run_end` log event.

use std::time::Duration;

use crate::placement::PlacementKind;

/// Counters for a single seating run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Seatable cells in the layout.
    pub seat_count: usize,
    /// Students in the roster.
    pub student_count: usize,
    /// Students placed by the front-priority scan.
    pub priority_placed: usize,
    /// Priority students that found no safe seat and were deferred.
    pub deferred: usize,
    /// Random probes drawn during general placement.
    pub probe_trials: usize,
    /// Students placed by a successful probe.
    pub probe_placed: usize,
    /// Students placed safely by the fallback scan.
    pub rescued: usize,
    /// Students placed in a seat that breaks a rule.
    pub forced: usize,
    /// Students left without a seat.
    pub unseated: usize,
    /// Wall-clock time of the run.
    pub duration: Duration,
}

impl RunStatistics {
    pub fn new(seat_count: usize, student_count: usize) -> Self {
        Self {
            seat_count,
            student_count,
            ..Self::default()
        }
    }

    pub(crate) fn record_placement(&mut self, kind: PlacementKind) {
        match kind {
            PlacementKind::Priority => self.priority_placed += 1,
            PlacementKind::Probe { .. } => self.probe_placed += 1,
            PlacementKind::Rescue => self.rescued += 1,
            PlacementKind::Forced { .. } => self.forced += 1,
        }
    }

    /// Students that received a seat.
    pub fn seated(&self) -> usize {
        self.priority_placed + self.probe_placed + self.rescued + self.forced
    }

    /// Share of general-placement probes that hit a safe seat.
    pub fn probe_hit_rate(&self) -> f64 {
        if self.probe_trials == 0 {
            0.0
        } else {
            self.probe_placed as f64 / self.probe_trials as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_placement_counts_by_kind() {
        let mut stats = RunStatistics::new(4, 4);
        stats.record_placement(PlacementKind::Priority);
        stats.record_placement(PlacementKind::Probe { trial: 2 });
        stats.record_placement(PlacementKind::Rescue);
        stats.record_placement(PlacementKind::Forced {
            safe_seat_available: false,
        });

        assert_eq!(stats.seated(), 4);
        assert_eq!(stats.priority_placed, 1);
        assert_eq!(stats.forced, 1);
    }

    #[test]
    fn test_probe_hit_rate() {
        let mut stats = RunStatistics::new(0, 0);
        assert_eq!(stats.probe_hit_rate(), 0.0);

        stats.probe_trials = 4;
        stats.probe_placed = 1;
        assert!((stats.probe_hit_rate() - 0.25).abs() < f64::EPSILON);
    }
}
