//! Seating score
//!
//! Summarises a finished assignment on two levels, the same way a
//! hard/soft constraint score does:
//! - hard: minus the number of students left without a seat
//! - soft: minus the number of violated separation pairs

mod seating;


pub use seating::{ScoreParseError, SeatingScore};
