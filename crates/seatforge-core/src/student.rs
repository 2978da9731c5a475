//! Students and rosters

use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, SeatForgeError};

/// Opaque student identifier.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StudentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&StudentId> for StudentId {
    fn from(id: &StudentId) -> Self {
        id.clone()
    }
}

/// A student on the roster.
///
/// Only `id` matters for placement; the rest is display payload carried
/// through for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub initials: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<String>,
}

impl Student {
    /// Creates a student, deriving initials from the name.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatforge_core::Student;
    ///
    /// let s = Student::new("s1", "ada lovelace byron");
    /// assert_eq!(s.initials, "AL");
    /// ```
    pub fn new(id: impl Into<StudentId>, name: impl Into<String>) -> Self {
        let name = name.into();
        let initials = initials_of(&name);
        Self {
            id: id.into(),
            name,
            initials,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// First letter of the first two words, upper-cased.
fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Ordered collection of students with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Student>", into = "Vec<Student>"))]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Creates a roster.
    ///
    /// # Errors
    ///
    /// Returns [`SeatForgeError::DuplicateStudent`] if two students share an id.
    pub fn new(students: Vec<Student>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(students.len());
        for student in &students {
            if !seen.insert(&student.id) {
                return Err(SeatForgeError::DuplicateStudent(student.id.clone()));
            }
        }
        Ok(Self { students })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn get(&self, id: &StudentId) -> Option<&Student> {
        self.students.iter().find(|s| &s.id == id)
    }

    pub fn contains(&self, id: &StudentId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &StudentId> {
        self.students.iter().map(|s| &s.id)
    }

    pub fn as_slice(&self) -> &[Student] {
        &self.students
    }
}

impl TryFrom<Vec<Student>> for Roster {
    type Error = SeatForgeError;

    fn try_from(students: Vec<Student>) -> Result<Self> {
        Self::new(students)
    }
}

impl From<Roster> for Vec<Student> {
    fn from(roster: Roster) -> Self {
        roster.students
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}
