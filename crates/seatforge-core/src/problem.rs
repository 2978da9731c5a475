//! Input snapshot for one seating run

use crate::layout::Layout;
use crate::rule::{Rule, RuleIndex};
use crate::student::Roster;

/// Everything a seating run consumes: the room, the students and the rules.
///
/// The engine only reads a problem; each run produces a fresh result and
/// leaves the problem untouched.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatingProblem {
    pub layout: Layout,
    pub roster: Roster,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rules: Vec<Rule>,
}

impl SeatingProblem {
    pub fn new(layout: Layout, roster: Roster, rules: Vec<Rule>) -> Self {
        Self {
            layout,
            roster,
            rules,
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Builds the per-student rule index for this problem.
    pub fn rule_index(&self) -> RuleIndex {
        RuleIndex::build(&self.rules)
    }

    /// Number of students that cannot be seated because seats run out.
    pub fn capacity_shortfall(&self) -> usize {
        self.roster.len().saturating_sub(self.layout.seat_count())
    }
}
