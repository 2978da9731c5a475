//! Per-student rule index

use std::collections::{HashMap, HashSet};

use smallvec::SmallVec;

use super::{MinDistance, Rule, RuleId, RuleKind};
use crate::student::StudentId;

/// One direction of a separation constraint: the indexed student must stay
/// at least `min_distance` away from `peer`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparationEdge {
    pub peer: StudentId,
    pub min_distance: MinDistance,
    pub rule: RuleId,
}

/// Rules reorganised for placement lookups.
///
/// Every `Separate` rule contributes one edge per ordered pair of distinct
/// members, so a group rule enforces pairwise separation among all members.
/// A rule with fewer than two distinct members contributes nothing. Members
/// missing from the roster are indexed too; they are never seated, so their
/// edges never fire.
///
/// # Examples
///
/// ```
/// use seatforge_core::{MinDistance, Rule, RuleIndex};
///
/// let rules = vec![
///     Rule::separate("r1", "a", "b", MinDistance::DEFAULT),
///     Rule::front_priority("r2", ["c"]),
/// ];
/// let index = RuleIndex::build(&rules);
///
/// assert_eq!(index.separations(&"a".into()).len(), 1);
/// assert!(index.is_priority(&"c".into()));
/// assert!(!index.is_priority(&"a".into()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleIndex {
    separations: HashMap<StudentId, SmallVec<[SeparationEdge; 4]>>,
    priority: HashSet<StudentId>,
    separate_rules: usize,
    priority_rules: usize,
    reserved_rules: usize,
    inert_rules: usize,
}

impl RuleIndex {
    pub fn build(rules: &[Rule]) -> Self {
        let mut index = Self::default();
        for rule in rules {
            index.insert(rule);
        }
        index
    }

    fn insert(&mut self, rule: &Rule) {
        match &rule.kind {
            RuleKind::Separate {
                members,
                min_distance,
            } => {
                let mut distinct: SmallVec<[&StudentId; 4]> = SmallVec::new();
                for member in members {
                    if !distinct.contains(&member) {
                        distinct.push(member);
                    }
                }
                if distinct.len() < 2 {
                    self.inert_rules += 1;
                    return;
                }

                self.separate_rules += 1;
                for &student in &distinct {
                    let edges = self.separations.entry(student.clone()).or_default();
                    for &peer in &distinct {
                        if peer != student {
                            edges.push(SeparationEdge {
                                peer: peer.clone(),
                                min_distance: *min_distance,
                                rule: rule.id.clone(),
                            });
                        }
                    }
                }
            }
            RuleKind::FrontPriority { students } => {
                if students.is_empty() {
                    self.inert_rules += 1;
                    return;
                }
                self.priority_rules += 1;
                self.priority.extend(students.iter().cloned());
            }
            RuleKind::Pair { .. } => {
                self.reserved_rules += 1;
            }
        }
    }

    /// Separation edges starting at `student`.
    pub fn separations(&self, student: &StudentId) -> &[SeparationEdge] {
        self.separations
            .get(student)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// Returns true if any front-priority rule names `student`.
    pub fn is_priority(&self, student: &StudentId) -> bool {
        self.priority.contains(student)
    }

    /// Number of distinct students in the priority set.
    pub fn priority_count(&self) -> usize {
        self.priority.len()
    }

    /// Separate rules that produced at least one edge.
    pub fn separate_rule_count(&self) -> usize {
        self.separate_rules
    }

    /// Front-priority rules that named at least one student.
    pub fn priority_rule_count(&self) -> usize {
        self.priority_rules
    }

    /// Reserved rules that were accepted but are not enforced.
    pub fn reserved_rule_count(&self) -> usize {
        self.reserved_rules
    }

    /// Rules that can never affect placement.
    pub fn inert_rule_count(&self) -> usize {
        self.inert_rules
    }
}
