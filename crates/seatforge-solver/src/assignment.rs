//! Partial seat assignment

use std::collections::{BTreeMap, HashMap};

use seatforge_core::{Position, Seat, StudentId};

/// Seat-to-student mapping plus its inverse.
///
/// A seat holds at most one student and a student occupies at most one
/// seat. Both maps are updated together so the mapping stays injective.
///
/// # Examples
///
/// ```
/// use seatforge_core::Position;
/// use seatforge_solver::Assignment;
///
/// let mut assignment = Assignment::new();
/// assert!(assignment.assign("amy".into(), Position::new(0, 1)));
/// assert!(!assignment.assign("bob".into(), Position::new(0, 1)));
///
/// assert_eq!(assignment.seat_of(&"amy".into()), Some(Position::new(0, 1)));
/// assert!(assignment.is_occupied(Position::new(0, 1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    by_seat: BTreeMap<Position, StudentId>,
    by_student: HashMap<StudentId, Position>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats `student` at `position`.
    ///
    /// Returns false and changes nothing if the seat is taken or the
    /// student is already seated.
    pub fn assign(&mut self, student: StudentId, position: Position) -> bool {
        if self.by_seat.contains_key(&position) || self.by_student.contains_key(&student) {
            return false;
        }
        self.by_student.insert(student.clone(), position);
        self.by_seat.insert(position, student);
        true
    }

    /// Frees the seat held by `student`, returning it.
    pub fn unassign(&mut self, student: &StudentId) -> Option<Position> {
        let position = self.by_student.remove(student)?;
        self.by_seat.remove(&position);
        Some(position)
    }

    pub fn seat_of(&self, student: &StudentId) -> Option<Position> {
        self.by_student.get(student).copied()
    }

    pub fn student_at(&self, position: Position) -> Option<&StudentId> {
        self.by_seat.get(&position)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.by_seat.contains_key(&position)
    }

    pub fn is_seated(&self, student: &StudentId) -> bool {
        self.by_student.contains_key(student)
    }

    /// Number of occupied seats.
    pub fn len(&self) -> usize {
        self.by_seat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_seat.is_empty()
    }

    /// Occupied seats in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &StudentId)> {
        self.by_seat.iter().map(|(&pos, id)| (pos, id))
    }

    /// Pairs every seat with its occupant, if any.
    ///
    /// This is the shape the presentation layer renders: one entry per
    /// seat, in the order of `seats`.
    pub fn chart<'a>(&'a self, seats: &[Seat]) -> Vec<(Seat, Option<&'a StudentId>)> {
        seats
            .iter()
            .map(|seat| (*seat, self.by_seat.get(&seat.position)))
            .collect()
    }
}
