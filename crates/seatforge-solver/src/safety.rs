//! Separation safety checks

use smallvec::SmallVec;

use seatforge_core::{Position, RuleIndex, Seat, SeparationEdge, StudentId};

use crate::assignment::Assignment;

/// Answers "may this student sit here?" against the current assignment.
///
/// A seat is safe for a student when no already-seated separated peer is
/// strictly closer than the rule's minimum distance. Peers that are not yet
/// seated never make a seat unsafe.
#[derive(Debug, Clone, Copy)]
pub struct SafetyEvaluator<'a> {
    index: &'a RuleIndex,
}

impl<'a> SafetyEvaluator<'a> {
    pub fn new(index: &'a RuleIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a RuleIndex {
        self.index
    }

    pub fn is_safe(&self, student: &StudentId, position: Position, assignment: &Assignment) -> bool {
        self.index.separations(student).iter().all(|edge| {
            match assignment.seat_of(&edge.peer) {
                Some(peer_seat) => !edge
                    .min_distance
                    .is_violated_by(position.distance_to(peer_seat)),
                None => true,
            }
        })
    }

    /// Separation edges that `position` would break for `student`.
    pub fn conflicts(
        &self,
        student: &StudentId,
        position: Position,
        assignment: &Assignment,
    ) -> SmallVec<[&'a SeparationEdge; 4]> {
        self.index
            .separations(student)
            .iter()
            .filter(|edge| {
                assignment.seat_of(&edge.peer).is_some_and(|peer_seat| {
                    edge.min_distance
                        .is_violated_by(position.distance_to(peer_seat))
                })
            })
            .collect()
    }

    /// First free seat, in the order given, that is safe for `student`.
    pub fn first_safe_seat(
        &self,
        student: &StudentId,
        seats: &[Seat],
        assignment: &Assignment,
    ) -> Option<Position> {
        seats
            .iter()
            .map(|seat| seat.position)
            .find(|&pos| !assignment.is_occupied(pos) && self.is_safe(student, pos, assignment))
    }
}

/// Returns true if `student` may sit at `position` without breaking a
/// separation rule against anyone already seated.
///
/// # Examples
///
/// ```
/// use seatforge_core::{MinDistance, Position, Rule, RuleIndex};
/// use seatforge_solver::{is_safe, Assignment};
///
/// let index = RuleIndex::build(&[Rule::separate("r", "a", "b", MinDistance::DEFAULT)]);
/// let mut assignment = Assignment::new();
/// assignment.assign("a".into(), Position::new(0, 0));
///
/// assert!(!is_safe(&"b".into(), Position::new(0, 1), &assignment, &index));
/// assert!(is_safe(&"b".into(), Position::new(0, 2), &assignment, &index));
/// ```
pub fn is_safe(
    student: &StudentId,
    position: Position,
    assignment: &Assignment,
    index: &RuleIndex,
) -> bool {
    SafetyEvaluator::new(index).is_safe(student, position, assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge_core::{CellKind, MinDistance, Rule};

    fn index(rules: &[Rule]) -> RuleIndex {
        RuleIndex::build(rules)
    }

    #[test]
    fn test_unconstrained_student_is_always_safe() {
        let index = index(&[Rule::separate("r", "a", "b", MinDistance::DEFAULT)]);
        let mut assignment = Assignment::new();
        assignment.assign("a".into(), Position::new(0, 0));

        assert!(is_safe(&"c".into(), Position::new(0, 1), &assignment, &index));
    }

    #[test]
    fn test_unseated_peer_never_blocks() {
        let index = index(&[Rule::separate("r", "a", "b", MinDistance::DEFAULT)]);
        let assignment = Assignment::new();

        assert!(is_safe(&"b".into(), Position::new(0, 0), &assignment, &index));
    }

    #[test]
    fn test_diagonal_neighbour_is_too_close() {
        let index = index(&[Rule::separate("r", "a", "b", MinDistance::DEFAULT)]);
        let mut assignment = Assignment::new();
        assignment.assign("a".into(), Position::new(1, 1));

        // sqrt(2) < 1.5
        assert!(!is_safe(&"b".into(), Position::new(2, 2), &assignment, &index));
        assert!(is_safe(&"b".into(), Position::new(1, 3), &assignment, &index));
    }

    #[test]
    fn test_exact_distance_is_safe() {
        let d = MinDistance::new(2.0).unwrap();
        let index = index(&[Rule::separate("r", "a", "b", d)]);
        let mut assignment = Assignment::new();
        assignment.assign("a".into(), Position::new(0, 0));

        assert!(is_safe(&"b".into(), Position::new(0, 2), &assignment, &index));
        assert!(!is_safe(&"b".into(), Position::new(1, 1), &assignment, &index));
    }

    #[test]
    fn test_zero_distance_never_blocks() {
        let d = MinDistance::new(0.0).unwrap();
        let index = index(&[Rule::separate("r", "a", "b", d)]);
        let mut assignment = Assignment::new();
        assignment.assign("a".into(), Position::new(0, 0));

        assert!(is_safe(&"b".into(), Position::new(0, 1), &assignment, &index));
    }

    #[test]
    fn test_conflicts_lists_every_broken_edge() {
        let index = index(&[
            Rule::separate("r1", "a", "c", MinDistance::DEFAULT),
            Rule::separate("r2", "b", "c", MinDistance::DEFAULT),
            Rule::separate("r3", "d", "c", MinDistance::DEFAULT),
        ]);
        let mut assignment = Assignment::new();
        assignment.assign("a".into(), Position::new(0, 0));
        assignment.assign("b".into(), Position::new(0, 2));
        assignment.assign("d".into(), Position::new(5, 5));

        let evaluator = SafetyEvaluator::new(&index);
        let conflicts = evaluator.conflicts(&"c".into(), Position::new(0, 1), &assignment);
        let rules: Vec<&str> = conflicts.iter().map(|e| e.rule.as_str()).collect();
        assert_eq!(rules, vec!["r1", "r2"]);
    }

    #[test]
    fn test_first_safe_seat_skips_occupied_and_unsafe() {
        let index = index(&[Rule::separate("r", "a", "b", MinDistance::DEFAULT)]);
        let seats: Vec<Seat> = (0..4)
            .map(|col| Seat {
                position: Position::new(0, col),
                kind: CellKind::Desk,
            })
            .collect();
        let mut assignment = Assignment::new();
        assignment.assign("a".into(), Position::new(0, 0));

        let evaluator = SafetyEvaluator::new(&index);
        assert_eq!(
            evaluator.first_safe_seat(&"b".into(), &seats, &assignment),
            Some(Position::new(0, 2))
        );
        assert_eq!(
            evaluator.first_safe_seat(&"c".into(), &seats, &assignment),
            Some(Position::new(0, 1))
        );
    }
}
