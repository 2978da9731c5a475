//! Tests for the seating engine.

use std::collections::HashSet;

use super::*;
use crate::diagnostics::ViolationCause;
use crate::placement::PlacementKind;
use seatforge_config::{EnvironmentMode, FallbackType};
use seatforge_core::{Layout, MinDistance, Position, SeatingScore, StudentId};
use seatforge_test::{desk_row, layout_from_ascii, numbered_roster, roster_of, single_column};

fn assert_consistent(problem: &SeatingProblem, result: &SeatingResult) {
    let seats: HashSet<Position> = problem.layout.seats().iter().map(|s| s.position).collect();
    let mut taken = HashSet::new();
    let mut seated = HashSet::new();
    for (pos, student) in result.assignment.iter() {
        assert!(seats.contains(&pos), "{pos} is not a seat");
        assert!(taken.insert(pos), "{pos} holds two students");
        assert!(seated.insert(student.clone()), "{student} sits twice");
        assert!(problem.roster.contains(student));
    }
    for student in &result.unseated {
        assert!(!seated.contains(student), "{student} is seated and unseated");
    }
    assert_eq!(
        result.assignment.len() + result.unseated.len(),
        problem.roster.len()
    );
    assert!(result.assignment.len() <= problem.layout.seat_count());
}

fn assert_no_avoidable_violations(result: &SeatingResult) {
    for violation in &result.violations {
        assert_eq!(
            violation.cause,
            ViolationCause::Forced,
            "avoidable violation: {violation}"
        );
    }
}

#[test]
fn test_classroom_run_is_consistent() {
    let mut layout = Layout::classroom();
    for row in 0..layout.rows() {
        for col in (0..layout.cols()).step_by(2) {
            layout.set_kind(row, col, seatforge_core::CellKind::Desk).unwrap();
        }
    }
    let roster = numbered_roster(40);
    let rules = vec![
        Rule::separate("r1", "s0", "s1", MinDistance::DEFAULT),
        Rule::separate("r2", "s2", "s3", MinDistance::new(4.0).unwrap()),
        Rule::separate_group("r3", ["s4", "s5", "s6"], MinDistance::DEFAULT),
        Rule::front_priority("r4", ["s7", "s8"]),
    ];
    let problem = SeatingProblem::new(layout, roster, rules);

    for seed in 0..20 {
        let result = SeatingEngine::with_seed(seed).solve(&problem);
        assert_consistent(&problem, &result);
        assert!(result.unseated.is_empty());
        assert!(result.violations.is_empty(), "seed {seed}");
        assert!(result.is_perfect());
    }
}

#[test]
fn test_scarce_seats_leave_students_unseated() {
    let problem = SeatingProblem::new(desk_row(3), numbered_roster(5), vec![]);
    let result = SeatingEngine::with_seed(1).solve(&problem);

    assert_consistent(&problem, &result);
    assert_eq!(result.unseated.len(), 2);
    assert_eq!(result.score, SeatingScore::of(-2, 0));
}

#[test]
fn test_front_priority_takes_frontmost_free_seat() {
    for seed in 0..10 {
        let problem = SeatingProblem::new(
            single_column(6),
            numbered_roster(6),
            vec![Rule::front_priority("front", ["s3"])],
        );
        let result = SeatingEngine::with_seed(seed).solve(&problem);

        assert_eq!(
            result.seat_of(&"s3".into()),
            Some(Position::new(0, 0)),
            "seed {seed}"
        );
        assert_eq!(result.placements[0].kind, PlacementKind::Priority);
    }
}

#[test]
fn test_priority_students_precede_others() {
    let layout = layout_from_ascii(
        "
        DDDD
        DDDD
        DDDD
        ",
    );
    let problem = SeatingProblem::new(
        layout,
        numbered_roster(12),
        vec![Rule::front_priority("front", ["s9", "s10", "s11"])],
    );
    let result = SeatingEngine::with_seed(42).solve(&problem);

    for id in ["s9", "s10", "s11"] {
        let seat = result.seat_of(&id.into()).unwrap();
        assert_eq!(seat.row, 0, "{id} sits at {seat}");
        assert!(seat.col < 3);
    }
    assert_eq!(result.statistics.priority_placed, 3);
}

#[test]
fn test_fixed_seed_is_deterministic() {
    let problem = SeatingProblem::new(
        Layout::from_grid(vec![vec![seatforge_core::CellKind::Desk; 6]; 5]).unwrap(),
        numbered_roster(25),
        vec![
            Rule::separate("r1", "s0", "s1", MinDistance::new(3.0).unwrap()),
            Rule::front_priority("r2", ["s2"]),
        ],
    );
    let engine = SeatingEngine::with_seed(1234);

    let first = engine.solve(&problem);
    let second = engine.solve(&problem);

    assert_eq!(first.assignment, second.assignment);
    assert_eq!(first.placements, second.placements);
    assert_eq!(first.unseated, second.unseated);
    assert_eq!(first.seed, 1234);
}

#[test]
fn test_unseeded_run_records_its_seed() {
    let problem = SeatingProblem::new(desk_row(4), numbered_roster(4), vec![]);
    let first = SeatingEngine::default().solve(&problem);

    let replay = SeatingEngine::with_seed(first.seed).solve(&problem);
    assert_eq!(first.assignment, replay.assignment);
}

#[test]
fn test_zero_seats() {
    let problem = SeatingProblem::new(Layout::new(3, 3), roster_of(&["a", "b"]), vec![]);
    let result = SeatingEngine::with_seed(0).solve(&problem);

    assert!(result.assignment.is_empty());
    assert_eq!(result.unseated.len(), 2);
    assert_consistent(&problem, &result);
}

#[test]
fn test_zero_students() {
    let problem = SeatingProblem::new(desk_row(3), roster_of(&[]), vec![]);
    let result = SeatingEngine::with_seed(0).solve(&problem);

    assert!(result.assignment.is_empty());
    assert!(result.unseated.is_empty());
    assert_eq!(result.score, SeatingScore::ZERO);
}

#[test]
fn test_empty_layout_and_roster() {
    let result = SeatingEngine::with_seed(0).solve(&SeatingProblem::default());

    assert!(result.assignment.is_empty());
    assert!(result.unseated.is_empty());
    assert!(result.placements.is_empty());
}

#[test]
fn test_separable_pair_is_satisfied() {
    let layout = layout_from_ascii("D.D");
    let problem = SeatingProblem::new(
        layout,
        roster_of(&["a", "b"]),
        vec![Rule::separate("r", "a", "b", MinDistance::DEFAULT)],
    );

    for seed in 0..10 {
        let result = SeatingEngine::with_seed(seed).solve(&problem);
        assert!(result.unseated.is_empty());
        assert!(result.violations.is_empty());

        let seats: HashSet<Position> = result.assignment.iter().map(|(pos, _)| pos).collect();
        assert_eq!(
            seats,
            HashSet::from([Position::new(0, 0), Position::new(0, 2)])
        );
    }
}

#[test]
fn test_unsatisfiable_pair_is_forced_and_reported() {
    let layout = layout_from_ascii("DD");
    let problem = SeatingProblem::new(
        layout,
        roster_of(&["a", "b"]),
        vec![Rule::separate("r", "a", "b", MinDistance::DEFAULT)],
    );

    for seed in 0..10 {
        let result = SeatingEngine::with_seed(seed).solve(&problem);
        assert!(result.unseated.is_empty());
        assert_eq!(result.assignment.len(), 2);
        assert_eq!(result.violations.len(), 1);

        let violation = &result.violations[0];
        assert_eq!(violation.rule.as_str(), "r");
        assert_eq!(violation.cause, ViolationCause::Forced);
        assert!((violation.distance - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.score, SeatingScore::of(0, -1));
    }
}

#[test]
fn test_default_fallback_never_breaks_avoidable_rules() {
    let layout = Layout::from_grid(vec![vec![seatforge_core::CellKind::Desk; 4]; 4]).unwrap();
    let roster = numbered_roster(14);
    let rules = vec![
        Rule::separate_group("g1", ["s0", "s1", "s2", "s3"], MinDistance::new(2.0).unwrap()),
        Rule::separate("r1", "s4", "s5", MinDistance::new(3.0).unwrap()),
        Rule::separate("r2", "s6", "s7", MinDistance::DEFAULT),
        Rule::front_priority("front", ["s0", "s4"]),
    ];
    let problem = SeatingProblem::new(layout, roster, rules);

    for seed in 0..50 {
        let result = SeatingEngine::with_seed(seed).solve(&problem);
        assert_consistent(&problem, &result);
        assert_no_avoidable_violations(&result);
    }
}

#[test]
fn test_first_free_fallback_still_seats_everyone() {
    let config = SeatingConfig::new()
        .with_random_seed(3)
        .with_max_trials(0)
        .with_fallback(FallbackType::FirstFree);
    let problem = SeatingProblem::new(
        desk_row(4),
        roster_of(&["a", "b", "c", "d"]),
        vec![Rule::separate("r", "a", "b", MinDistance::DEFAULT)],
    );

    let result = assign_seats(&problem.layout, &problem.roster, &problem.rules, &config);

    assert_consistent(&problem, &result);
    assert!(result.unseated.is_empty());
    // with no probing, first-free fills the row left to right in processing order
    let expected: Vec<&StudentId> = result.placement_order().collect();
    let actual: Vec<&StudentId> = result.assignment.iter().map(|(_, id)| id).collect();
    assert_eq!(expected, actual);
}

#[test]
fn test_pair_rules_are_not_enforced() {
    let problem = SeatingProblem::new(
        desk_row(10),
        roster_of(&["a", "b"]),
        vec![Rule::pair("p", ["a", "b"], MinDistance::new(1.0).unwrap())],
    );
    let result = SeatingEngine::with_seed(9).solve(&problem);

    assert!(result.is_perfect());
    assert_eq!(result.assignment.len(), 2);
}

#[test]
fn test_rules_naming_unknown_students_are_harmless() {
    let problem = SeatingProblem::new(
        desk_row(3),
        roster_of(&["a", "b"]),
        vec![
            Rule::separate("r1", "a", "ghost", MinDistance::DEFAULT),
            Rule::separate("r2", "a", "a", MinDistance::DEFAULT),
            Rule::front_priority("r3", ["nobody"]),
        ],
    );
    let result = SeatingEngine::with_seed(2).solve(&problem);

    assert!(result.is_perfect());
    assert_consistent(&problem, &result);
}

#[test]
fn test_try_new_rejects_reproducible_mode_without_seed() {
    let mut config = SeatingConfig::new();
    config.environment_mode = EnvironmentMode::Reproducible;

    let err = SeatingEngine::try_new(config).unwrap_err();
    assert!(matches!(err, SeatForgeError::Config(_)));
    assert!(err.to_string().contains("random_seed"));
}

#[test]
fn test_try_new_accepts_seeded_config() {
    let engine = SeatingEngine::try_new(SeatingConfig::new().with_random_seed(12)).unwrap();
    let problem = SeatingProblem::new(desk_row(4), numbered_roster(2), vec![]);

    assert_eq!(engine.solve(&problem).seed, 12);
}
