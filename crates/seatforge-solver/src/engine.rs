//! Seating engine entry point.

use rand::Rng;
use tracing::{info, warn};

use seatforge_config::SeatingConfig;
use seatforge_core::{Layout, Result, Roster, Rule, RuleIndex, SeatForgeError, SeatingProblem};

use crate::phase::{GeneralPlacementPhase, PlacementPhase, PriorityPlacementPhase};
use crate::result::SeatingResult;
use crate::scope::{EngineState, RunScope};

/// Runs the two placement phases over a problem.
///
/// The engine holds configuration only. Every call to [`SeatingEngine::solve`]
/// builds a fresh [`RunScope`], so one engine can serve many runs, including
/// concurrent ones from different threads.
///
/// # Examples
///
/// ```
/// use seatforge_core::{CellKind, Layout, MinDistance, Roster, Rule, SeatingProblem, Student};
/// use seatforge_solver::SeatingEngine;
///
/// let mut layout = Layout::new(1, 3);
/// layout.set_kind(0, 0, CellKind::Desk).unwrap();
/// layout.set_kind(0, 2, CellKind::Desk).unwrap();
/// let roster = Roster::new(vec![Student::new("a", "Ann"), Student::new("b", "Bo")]).unwrap();
/// let rules = vec![Rule::separate("r", "a", "b", MinDistance::new(2.0).unwrap())];
///
/// let result = SeatingEngine::with_seed(7).solve(&SeatingProblem::new(layout, roster, rules));
/// assert_eq!(result.assignment.len(), 2);
/// assert!(result.violations.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeatingEngine {
    config: SeatingConfig,
}

impl SeatingEngine {
    /// Creates an engine from `config` as given.
    ///
    /// The config loaders validate what they parse; a config assembled in
    /// code is taken at face value here, so a missing seed always means a
    /// fresh one. Use [`SeatingEngine::try_new`] to have it checked.
    pub fn new(config: SeatingConfig) -> Self {
        Self { config }
    }

    /// Creates an engine after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SeatForgeError::Config`] when the config is inconsistent,
    /// such as reproducible mode without a seed.
    pub fn try_new(config: SeatingConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| SeatForgeError::Config(e.to_string()))?;
        Ok(Self::new(config))
    }

    /// Creates an engine with default settings and a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SeatingConfig::new().with_random_seed(seed))
    }

    pub fn config(&self) -> &SeatingConfig {
        &self.config
    }

    pub fn solve(&self, problem: &SeatingProblem) -> SeatingResult {
        self.run(&problem.layout, &problem.roster, &problem.rules)
    }

    /// Assigns seats to `roster` in `layout` under `rules`.
    ///
    /// Never fails: students that do not fit are listed as unseated and rules
    /// that cannot be honoured are listed as violations.
    pub fn run(&self, layout: &Layout, roster: &Roster, rules: &[Rule]) -> SeatingResult {
        let seed = self
            .config
            .random_seed
            .unwrap_or_else(|| rand::rng().random());
        let index = RuleIndex::build(rules);

        info!(
            event = "run_start",
            seat_count = layout.seat_count(),
            student_count = roster.len(),
            rule_count = rules.len(),
            separate_rules = index.separate_rule_count(),
            priority_rules = index.priority_rule_count(),
            priority_students = index.priority_count(),
            reserved_rules = index.reserved_rule_count(),
            seed = seed,
        );

        let shortfall = roster.len().saturating_sub(layout.seat_count());
        if shortfall > 0 {
            warn!(
                event = "capacity_shortfall",
                seat_count = layout.seat_count(),
                student_count = roster.len(),
                shortfall = shortfall,
            );
        }

        let mut scope = RunScope::new(layout, roster, index, seed);

        let mut priority = PriorityPlacementPhase::new();
        run_phase(&mut priority, EngineState::PriorityPlacement, &mut scope);

        let mut general = GeneralPlacementPhase::new(&self.config.general_placement);
        run_phase(&mut general, EngineState::GeneralPlacement, &mut scope);

        let result = scope.finish();
        info!(
            event = "run_end",
            score = %result.score,
            seated = result.assignment.len(),
            unseated = result.unseated.len(),
            violations = result.violations.len(),
            forced = result.statistics.forced,
            duration_ms = result.statistics.duration.as_millis() as u64,
        );
        result
    }
}

fn run_phase(phase: &mut dyn PlacementPhase, state: EngineState, scope: &mut RunScope) {
    scope.transition(state);
    phase.place(scope);
}

/// Runs one seating pass with `config`.
///
/// Shorthand for building a [`SeatingEngine`] and calling
/// [`SeatingEngine::run`].
pub fn assign_seats(
    layout: &Layout,
    roster: &Roster,
    rules: &[Rule],
    config: &SeatingConfig,
) -> SeatingResult {
    SeatingEngine::new(config.clone()).run(layout, roster, rules)
}

#[cfg(test)]
mod tests;
