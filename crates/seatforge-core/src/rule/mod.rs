//! Placement rules
//!
//! Rules are declarative requirements over a group of students:
//! - [`RuleKind::Separate`] keeps every pair of members at least a minimum
//!   distance apart
//! - [`RuleKind::FrontPriority`] gives members first pick of the front seats
//! - [`RuleKind::Pair`] is reserved and never enforced
//!
//! A [`RuleIndex`] is built from a rule list once per run so placement
//! decisions only look at the rules that mention the student being placed.

mod distance;
mod index;


use std::fmt;

use smallvec::SmallVec;

use crate::student::StudentId;

pub use distance::MinDistance;
pub use index::{RuleIndex, SeparationEdge};

/// Rule member list. Most rules name one or two students.
pub type Members = SmallVec<[StudentId; 2]>;

/// Identifier of a rule, carried into diagnostics.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleId(String);

impl RuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RuleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RuleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The requirement a rule expresses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum RuleKind {
    /// No two members may sit strictly closer than `min_distance`.
    Separate {
        members: Members,
        #[cfg_attr(feature = "serde", serde(default))]
        min_distance: MinDistance,
    },

    /// Members are seated before everyone else, front row first.
    FrontPriority { students: Members },

    /// Reserved. Stored but not enforced by the engine.
    Pair {
        students: Members,
        #[cfg_attr(feature = "serde", serde(default))]
        radius: MinDistance,
    },
}

impl RuleKind {
    /// Students named by this rule, in declaration order.
    pub fn students(&self) -> &[StudentId] {
        match self {
            RuleKind::Separate { members, .. } => members,
            RuleKind::FrontPriority { students } => students,
            RuleKind::Pair { students, .. } => students,
        }
    }

    /// Label shown for a rule that has none of its own.
    pub fn default_label(&self) -> &'static str {
        match self {
            RuleKind::Separate { .. } => "Keep Separate",
            RuleKind::FrontPriority { .. } => "Sit in Front",
            RuleKind::Pair { .. } => "Pair Together",
        }
    }
}

/// A placement rule.
///
/// # Examples
///
/// ```
/// use seatforge_core::{MinDistance, Rule};
///
/// let rule = Rule::separate("r1", "amy", "bob", MinDistance::new(2.0).unwrap());
/// assert_eq!(rule.label(), "Keep Separate");
/// assert!(rule.mentions(&"bob".into()));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub id: RuleId,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: RuleKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
}

impl Rule {
    pub fn new(id: impl Into<RuleId>, kind: RuleKind) -> Self {
        Self {
            id: id.into(),
            kind,
            label: None,
        }
    }

    /// Keeps two students at least `min_distance` apart.
    pub fn separate(
        id: impl Into<RuleId>,
        a: impl Into<StudentId>,
        b: impl Into<StudentId>,
        min_distance: MinDistance,
    ) -> Self {
        let members: Members = smallvec::smallvec![a.into(), b.into()];
        Self::new(id, RuleKind::Separate { members, min_distance })
    }

    /// Keeps every pair drawn from `members` at least `min_distance` apart.
    pub fn separate_group<I, T>(id: impl Into<RuleId>, members: I, min_distance: MinDistance) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StudentId>,
    {
        let members = members.into_iter().map(Into::into).collect();
        Self::new(id, RuleKind::Separate { members, min_distance })
    }

    /// Gives the listed students first pick of the front seats.
    pub fn front_priority<I, T>(id: impl Into<RuleId>, students: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StudentId>,
    {
        let students = students.into_iter().map(Into::into).collect();
        Self::new(id, RuleKind::FrontPriority { students })
    }

    /// Reserved pairing rule.
    pub fn pair<I, T>(id: impl Into<RuleId>, students: I, radius: MinDistance) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StudentId>,
    {
        let students = students.into_iter().map(Into::into).collect();
        Self::new(id, RuleKind::Pair { students, radius })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The custom label, or the kind's default label.
    pub fn label(&self) -> &str {
        self.label
            .as_deref()
            .unwrap_or_else(|| self.kind.default_label())
    }

    pub fn mentions(&self, student: &StudentId) -> bool {
        self.kind.students().contains(student)
    }
}
