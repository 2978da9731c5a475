//! A full-size classroom fixture.

use seatforge_core::{MinDistance, Rule, SeatingProblem};

use crate::layout::layout_from_ascii;
use crate::roster::numbered_roster;

/// A 12x16 classroom: teacher at the front, a door on the right wall and
/// paired desks with an aisle down the middle. 48 seats.
pub const CLASSROOM_ASCII: &str = "
    .......T.......|
    ................
    .DD.DD....DD.DD.
    ................
    .DD.DD....DD.DD.
    ................
    .DD.DD....DD.DD.
    ................
    .DD.DD....DD.DD.
    ................
    .DD.DD....DD.DD.
    .DD.DD....DD.DD.
";

/// Classroom with 30 students and a typical mix of rules.
pub fn classroom_problem() -> SeatingProblem {
    let rules = vec![
        Rule::separate("talkers", "s0", "s1", MinDistance::DEFAULT),
        Rule::separate("rivals", "s2", "s3", MinDistance::DEFAULT).with_label("Never together"),
        Rule::separate_group("cliques", ["s4", "s5", "s6"], MinDistance::DEFAULT),
        Rule::front_priority("glasses", ["s7", "s8"]),
    ];
    SeatingProblem::new(layout_from_ascii(CLASSROOM_ASCII), numbered_roster(30), rules)
}
