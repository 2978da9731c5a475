//! Placement records

use std::fmt;

use seatforge_core::{Position, StudentId};

/// How a student ended up in their seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementKind {
    /// Front-priority scan found a safe seat.
    Priority,
    /// A random probe hit a safe seat on the given trial (1-based).
    Probe { trial: usize },
    /// Every probe missed; the fallback scan found a safe seat.
    Rescue,
    /// The seat breaks at least one separation rule.
    ///
    /// `safe_seat_available` records whether any free seat would have been
    /// safe at the moment of placement.
    Forced { safe_seat_available: bool },
}

impl PlacementKind {
    pub fn is_forced(self) -> bool {
        matches!(self, PlacementKind::Forced { .. })
    }

    /// Short name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            PlacementKind::Priority => "priority",
            PlacementKind::Probe { .. } => "probe",
            PlacementKind::Rescue => "rescue",
            PlacementKind::Forced { .. } => "forced",
        }
    }
}

impl fmt::Display for PlacementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementKind::Probe { trial } => write!(f, "probe #{trial}"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// One committed placement, in commit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRecord {
    pub student: StudentId,
    pub seat: Position,
    pub kind: PlacementKind,
}
