//! Tests for the run scope.

use super::*;
use seatforge_core::{CellKind, MinDistance, Rule, Student};

fn roster(ids: &[&str]) -> Roster {
    Roster::new(ids.iter().map(|id| Student::new(*id, id.to_uppercase())).collect()).unwrap()
}

fn row_layout(cols: usize) -> Layout {
    let mut layout = Layout::new(1, cols);
    for col in 0..cols {
        layout.set_kind(0, col, CellKind::Desk).unwrap();
    }
    layout
}

#[test]
fn test_new_scope_is_unplaced() {
    let scope = RunScope::new(&row_layout(3), &roster(&["a", "b"]), RuleIndex::default(), 1);

    assert_eq!(scope.state(), EngineState::Unplaced);
    assert_eq!(scope.seats().len(), 3);
    assert_eq!(scope.free_seats().len(), 3);
    assert!(scope.assignment().is_empty());
    assert_eq!(scope.statistics().student_count, 2);
}

#[test]
fn test_shuffle_is_a_permutation_and_seeded() {
    let ids: Vec<String> = (0..20).map(|i| format!("s{i}")).collect();
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let roster = roster(&refs);

    let first = RunScope::new(&row_layout(1), &roster, RuleIndex::default(), 99);
    let second = RunScope::new(&row_layout(1), &roster, RuleIndex::default(), 99);
    assert_eq!(first.order(), second.order());

    let mut sorted: Vec<StudentId> = first.order().to_vec();
    sorted.sort();
    let mut expected: Vec<StudentId> = roster.ids().cloned().collect();
    expected.sort();
    assert_eq!(sorted, expected);
}

#[test]
fn test_commit_updates_assignment_and_statistics() {
    let mut scope = RunScope::new(&row_layout(3), &roster(&["a", "b"]), RuleIndex::default(), 1);
    scope.commit("a".into(), Position::new(0, 1), PlacementKind::Priority);

    assert!(scope.is_seated(&"a".into()));
    assert_eq!(
        scope.free_seats(),
        vec![Position::new(0, 0), Position::new(0, 2)]
    );
    assert_eq!(scope.statistics().priority_placed, 1);
}

#[test]
fn test_first_safe_free_seat_respects_rules() {
    let index = RuleIndex::build(&[Rule::separate("r", "a", "b", MinDistance::DEFAULT)]);
    let mut scope = RunScope::new(&row_layout(4), &roster(&["a", "b"]), index, 1);
    scope.commit("a".into(), Position::new(0, 1), PlacementKind::Priority);

    assert!(!scope.is_safe(&"b".into(), Position::new(0, 0)));
    assert_eq!(
        scope.first_safe_free_seat(&"b".into()),
        Some(Position::new(0, 3))
    );
}

#[test]
fn test_finish_scores_unseated_and_violations() {
    let index = RuleIndex::build(&[Rule::separate("r", "a", "b", MinDistance::DEFAULT)]);
    let mut scope = RunScope::new(&row_layout(2), &roster(&["a", "b", "c"]), index, 5);
    scope.transition(EngineState::PriorityPlacement);
    scope.transition(EngineState::GeneralPlacement);
    scope.commit("a".into(), Position::new(0, 0), PlacementKind::Probe { trial: 1 });
    scope.commit(
        "b".into(),
        Position::new(0, 1),
        PlacementKind::Forced {
            safe_seat_available: false,
        },
    );
    scope.mark_unseated("c".into());

    let result = scope.finish();
    assert_eq!(result.seed, 5);
    assert_eq!(result.unseated, vec![StudentId::from("c")]);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.score, SeatingScore::of(-1, -1));
    assert_eq!(result.statistics.forced, 1);
}

#[test]
fn test_rejected_commit_leaves_student_unseated() {
    let mut scope = RunScope::new(&row_layout(2), &roster(&["a", "b"]), RuleIndex::default(), 3);
    scope.transition(EngineState::PriorityPlacement);
    scope.transition(EngineState::GeneralPlacement);

    assert!(scope.commit("a".into(), Position::new(0, 0), PlacementKind::Probe { trial: 1 }));
    assert!(!scope.commit("b".into(), Position::new(0, 0), PlacementKind::Rescue));
    assert!(!scope.commit("a".into(), Position::new(0, 1), PlacementKind::Rescue));
    assert_eq!(scope.placements().len(), 1);
    assert_eq!(scope.statistics().rescued, 0);

    let result = scope.finish();
    assert_eq!(result.assignment.seat_of(&"a".into()), Some(Position::new(0, 0)));
    assert_eq!(result.unseated, vec![StudentId::from("b")]);
    assert_eq!(result.assignment.len() + result.unseated.len(), 2);
    assert_eq!(result.score, SeatingScore::of(-1, 0));
}
