//! Roster fixtures.

use seatforge_core::{Roster, Student};

/// Roster with one student per id. Names are the uppercased ids.
///
/// # Panics
///
/// Panics on duplicate ids.
pub fn roster_of(ids: &[&str]) -> Roster {
    Roster::new(
        ids.iter()
            .map(|id| Student::new(*id, id.to_uppercase()))
            .collect(),
    )
    .expect("fixture ids should be unique")
}

/// Roster of `count` students with ids `s0`, `s1`, ...
pub fn numbered_roster(count: usize) -> Roster {
    Roster::new(
        (0..count)
            .map(|i| Student::new(format!("s{i}"), format!("Student {i}")))
            .collect(),
    )
    .expect("numbered ids are unique")
}
