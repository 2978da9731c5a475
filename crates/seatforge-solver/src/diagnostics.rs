//! Separation-rule diagnostics.
//!
//! Re-checks a finished assignment against the separation rules and explains
//! each broken pair. Used to build [`SeatingResult::violations`] and to audit
//! assignments that did not come from the engine at all.
//!
//! [`SeatingResult::violations`]: crate::SeatingResult::violations

use std::collections::HashMap;
use std::fmt;

use seatforge_core::{
    MinDistance, Position, RuleId, RuleIndex, SeatingProblem, SeatingScore, StudentId,
};

use crate::assignment::Assignment;
use crate::placement::{PlacementKind, PlacementRecord};
use crate::result::SeatingResult;

/// Why a separation rule ended up broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationCause {
    /// No safe seat existed when the later student was placed.
    Forced,
    /// A safe seat was free when the later student was placed.
    Avoidable,
    /// The placement history is unavailable.
    Unknown,
}

/// A pair of seated students closer than their rule allows.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparationViolation {
    pub rule: RuleId,
    /// The pair, ordered by student id.
    pub students: (StudentId, StudentId),
    /// Seats of `students`, in the same order.
    pub positions: (Position, Position),
    pub distance: f64,
    pub min_distance: MinDistance,
    pub cause: ViolationCause,
}

impl fmt::Display for SeparationViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at {} and {} at {} are {:.2} apart (min {})",
            self.rule,
            self.students.0,
            self.positions.0,
            self.students.1,
            self.positions.1,
            self.distance,
            self.min_distance,
        )
    }
}

/// Lists every separation rule the assignment breaks.
///
/// Each unordered pair is reported once per rule. Output follows the seat
/// order of the lower-ordered student, so it is stable across runs. With a
/// placement history the cause of each violation is derived from the later
/// of the two placements; without one it is [`ViolationCause::Unknown`].
pub fn find_violations(
    index: &RuleIndex,
    assignment: &Assignment,
    placements: Option<&[PlacementRecord]>,
) -> Vec<SeparationViolation> {
    let history: Option<HashMap<&StudentId, (usize, PlacementKind)>> = placements.map(|records| {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| (&record.student, (i, record.kind)))
            .collect()
    });

    let mut violations = Vec::new();
    for (seat, student) in assignment.iter() {
        for edge in index.separations(student) {
            if edge.peer <= *student {
                continue;
            }
            let Some(peer_seat) = assignment.seat_of(&edge.peer) else {
                continue;
            };
            let distance = seat.distance_to(peer_seat);
            if !edge.min_distance.is_violated_by(distance) {
                continue;
            }

            let cause = match &history {
                Some(history) => cause_of(history, student, &edge.peer),
                None => ViolationCause::Unknown,
            };
            violations.push(SeparationViolation {
                rule: edge.rule.clone(),
                students: (student.clone(), edge.peer.clone()),
                positions: (seat, peer_seat),
                distance,
                min_distance: edge.min_distance,
                cause,
            });
        }
    }
    violations
}

fn cause_of(
    history: &HashMap<&StudentId, (usize, PlacementKind)>,
    a: &StudentId,
    b: &StudentId,
) -> ViolationCause {
    let (Some(&(ia, ka)), Some(&(ib, kb))) = (history.get(a), history.get(b)) else {
        return ViolationCause::Unknown;
    };
    let later = if ia > ib { ka } else { kb };
    match later {
        PlacementKind::Forced {
            safe_seat_available: false,
        } => ViolationCause::Forced,
        _ => ViolationCause::Avoidable,
    }
}

/// Score breakdown of an assignment against a problem.
///
/// # Examples
///
/// ```
/// use seatforge_core::{Layout, CellKind, MinDistance, Position, Roster, Rule, SeatingProblem, Student};
/// use seatforge_solver::diagnostics::SeatingAnalysis;
/// use seatforge_solver::Assignment;
///
/// let mut layout = Layout::new(1, 2);
/// layout.set_kind(0, 0, CellKind::Desk).unwrap();
/// layout.set_kind(0, 1, CellKind::Desk).unwrap();
/// let roster = Roster::new(vec![Student::new("a", "Ann"), Student::new("b", "Bo")]).unwrap();
/// let problem = SeatingProblem::new(layout, roster, vec![
///     Rule::separate("r", "a", "b", MinDistance::DEFAULT),
/// ]);
///
/// let mut assignment = Assignment::new();
/// assignment.assign("a".into(), Position::new(0, 0));
/// assignment.assign("b".into(), Position::new(0, 1));
///
/// let analysis = SeatingAnalysis::of_assignment(&problem, &assignment);
/// assert_eq!(analysis.violations.len(), 1);
/// assert_eq!(analysis.score.to_string(), "0hard/-1soft");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SeatingAnalysis {
    pub score: SeatingScore,
    pub violations: Vec<SeparationViolation>,
    /// Roster students without a seat, in roster order.
    pub unseated: Vec<StudentId>,
}

impl SeatingAnalysis {
    /// Analyzes an engine result, using its placement history for causes.
    pub fn analyze(problem: &SeatingProblem, result: &SeatingResult) -> Self {
        Self::build(problem, &result.assignment, Some(&result.placements))
    }

    /// Analyzes an assignment built elsewhere, such as a hand-edited chart.
    pub fn of_assignment(problem: &SeatingProblem, assignment: &Assignment) -> Self {
        Self::build(problem, assignment, None)
    }

    fn build(
        problem: &SeatingProblem,
        assignment: &Assignment,
        placements: Option<&[PlacementRecord]>,
    ) -> Self {
        let index = problem.rule_index();
        let violations = find_violations(&index, assignment, placements);
        let unseated: Vec<StudentId> = problem
            .roster
            .ids()
            .filter(|id| !assignment.is_seated(id))
            .cloned()
            .collect();
        let score = SeatingScore::from_counts(unseated.len(), violations.len());
        Self {
            score,
            violations,
            unseated,
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.score.is_feasible()
    }

    pub fn count_by_cause(&self, cause: ViolationCause) -> usize {
        self.violations.iter().filter(|v| v.cause == cause).count()
    }

    /// Violations grouped by rule, in order of first appearance.
    pub fn by_rule(&self) -> Vec<(&RuleId, usize)> {
        let mut counts: Vec<(&RuleId, usize)> = Vec::new();
        for violation in &self.violations {
            match counts.iter_mut().find(|(rule, _)| *rule == &violation.rule) {
                Some((_, count)) => *count += 1,
                None => counts.push((&violation.rule, 1)),
            }
        }
        counts
    }
}
