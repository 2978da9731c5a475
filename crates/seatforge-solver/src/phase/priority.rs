//! Front-priority placement.

use tracing::info;

use seatforge_core::StudentId;

use super::PlacementPhase;
use crate::placement::PlacementKind;
use crate::scope::RunScope;

/// Seats front-priority students before anyone else.
///
/// Each priority student, in processing order, takes the first unoccupied
/// seat in layout order that is safe for them. Since layouts are scanned
/// row-major, that is the frontmost safe seat. A student with no safe seat
/// is deferred to general placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityPlacementPhase;

impl PriorityPlacementPhase {
    pub fn new() -> Self {
        Self
    }
}

impl PlacementPhase for PriorityPlacementPhase {
    fn place(&mut self, scope: &mut RunScope) {
        let phase_start = scope.elapsed();
        let candidates: Vec<StudentId> = scope
            .order()
            .iter()
            .filter(|id| scope.is_priority(id) && !scope.is_seated(id))
            .cloned()
            .collect();

        info!(
            event = "phase_start",
            phase = "Priority Placement",
            phase_index = 0,
            students = candidates.len(),
        );

        let mut placed = 0usize;
        let mut deferred = 0usize;
        for student in candidates {
            match scope.first_safe_free_seat(&student) {
                Some(seat) => {
                    scope.commit(student, seat, PlacementKind::Priority);
                    placed += 1;
                }
                None => {
                    scope.defer(student);
                    deferred += 1;
                }
            }
        }

        info!(
            event = "phase_end",
            phase = "Priority Placement",
            phase_index = 0,
            duration_ms = (scope.elapsed() - phase_start).as_millis() as u64,
            placed = placed,
            deferred = deferred,
        );
    }

    fn phase_type_name(&self) -> &'static str {
        "PriorityPlacement"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge_core::{Layout, MinDistance, Position, Roster, Rule, RuleIndex};
    use seatforge_test::{desk_row, roster_of};

    fn scope(layout: &Layout, roster: &Roster, rules: &[Rule]) -> RunScope {
        RunScope::new(layout, roster, RuleIndex::build(rules), 3)
    }

    #[test]
    fn test_priority_students_fill_front_seats() {
        let layout = seatforge_test::layout_from_ascii(
            "
            DDD
            DDD
            ",
        );
        let roster = roster_of(&["a", "b", "c", "d"]);
        let mut scope = scope(&layout, &roster, &[Rule::front_priority("front", ["a", "b"])]);

        PriorityPlacementPhase::new().place(&mut scope);

        let a = scope.assignment().seat_of(&"a".into()).unwrap();
        let b = scope.assignment().seat_of(&"b".into()).unwrap();
        assert_eq!(a.row, 0);
        assert_eq!(b.row, 0);
        assert!(!scope.is_seated(&"c".into()));
        assert!(!scope.is_seated(&"d".into()));
        assert_eq!(scope.statistics().priority_placed, 2);
    }

    #[test]
    fn test_unsafe_priority_student_is_deferred() {
        let layout = desk_row(2);
        let roster = roster_of(&["a", "b"]);
        let rules = [
            Rule::front_priority("front", ["a", "b"]),
            Rule::separate("apart", "a", "b", MinDistance::DEFAULT),
        ];
        let mut scope = scope(&layout, &roster, &rules);

        PriorityPlacementPhase::new().place(&mut scope);

        assert_eq!(scope.assignment().len(), 1);
        assert_eq!(scope.deferred().len(), 1);
        assert_eq!(scope.statistics().deferred, 1);
        let first = &scope.order()[0];
        assert_eq!(scope.assignment().seat_of(first), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_no_priority_rules_places_nobody() {
        let layout = desk_row(3);
        let roster = roster_of(&["a", "b"]);
        let mut scope = scope(&layout, &roster, &[]);

        PriorityPlacementPhase::new().place(&mut scope);

        assert!(scope.assignment().is_empty());
        assert!(scope.deferred().is_empty());
    }

    #[test]
    fn test_priority_for_unknown_student_is_ignored() {
        let layout = desk_row(2);
        let roster = roster_of(&["a"]);
        let mut scope = scope(&layout, &roster, &[Rule::front_priority("front", ["ghost"])]);

        PriorityPlacementPhase::new().place(&mut scope);

        assert!(scope.assignment().is_empty());
        assert!(!scope.is_seated(&"ghost".into()));
    }
}
