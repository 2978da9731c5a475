//! SeatingScore - Two-level score for seat assignments

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// A score with separate hard and soft levels.
///
/// When comparing scores:
/// 1. Hard scores are compared first
/// 2. Soft scores are only compared when hard scores are equal
///
/// # Examples
///
/// ```
/// use seatforge_core::SeatingScore;
///
/// let everyone_seated = SeatingScore::of(0, -3);
/// let one_unseated = SeatingScore::of(-1, 0);
/// assert!(everyone_seated > one_unseated);
/// assert_eq!(everyone_seated.to_string(), "0hard/-3soft");
/// assert_eq!("0hard/-3soft".parse::<SeatingScore>().unwrap(), everyone_seated);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatingScore {
    hard: i64,
    soft: i64,
}

impl SeatingScore {
    /// The zero score: everyone seated, no rule broken.
    pub const ZERO: SeatingScore = SeatingScore { hard: 0, soft: 0 };

    #[inline]
    pub const fn of(hard: i64, soft: i64) -> Self {
        SeatingScore { hard, soft }
    }

    /// Score for a run with `unseated` students and `violations` broken pairs.
    #[inline]
    pub const fn from_counts(unseated: usize, violations: usize) -> Self {
        SeatingScore {
            hard: -(unseated as i64),
            soft: -(violations as i64),
        }
    }

    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }

    /// True when every student has a seat.
    #[inline]
    pub const fn is_feasible(&self) -> bool {
        self.hard >= 0
    }
}

impl Ord for SeatingScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.hard.cmp(&other.hard) {
            Ordering::Equal => self.soft.cmp(&other.soft),
            other => other,
        }
    }
}

impl PartialOrd for SeatingScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for SeatingScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        SeatingScore::of(self.hard + other.hard, self.soft + other.soft)
    }
}

impl Sub for SeatingScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        SeatingScore::of(self.hard - other.hard, self.soft - other.soft)
    }
}

impl Neg for SeatingScore {
    type Output = Self;

    fn neg(self) -> Self {
        SeatingScore::of(-self.hard, -self.soft)
    }
}

impl fmt::Debug for SeatingScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeatingScore({}, {})", self.hard, self.soft)
    }
}

impl fmt::Display for SeatingScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hard/{}soft", self.hard, self.soft)
    }
}

/// Error when parsing a score from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreParseError {
    pub message: String,
}

impl fmt::Display for ScoreParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score parse error: {}", self.message)
    }
}

impl std::error::Error for ScoreParseError {}

impl FromStr for SeatingScore {
    type Err = ScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (hard, soft) = s.split_once('/').ok_or_else(|| ScoreParseError {
            message: format!("Invalid SeatingScore format '{s}': expected 2 parts separated by '/'"),
        })?;

        Ok(SeatingScore::of(
            parse_level(hard, "hard")?,
            parse_level(soft, "soft")?,
        ))
    }
}

fn parse_level(part: &str, suffix: &str) -> Result<i64, ScoreParseError> {
    let part = part.trim();
    let num = part.strip_suffix(suffix).ok_or_else(|| ScoreParseError {
        message: format!("{suffix} part '{part}' must end with '{suffix}'"),
    })?;
    num.parse::<i64>().map_err(|e| ScoreParseError {
        message: format!("Invalid {suffix} score '{num}': {e}"),
    })
}
