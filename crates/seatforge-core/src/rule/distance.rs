//! Separation radius

use std::fmt;

use crate::error::{Result, SeatForgeError};

/// Minimum Euclidean distance, in grid units, between separated students.
///
/// Always finite and non-negative. A pair of seats at exactly this distance
/// satisfies the rule; only strictly closer seats violate it.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct MinDistance(f64);

impl MinDistance {
    /// Radius used when a rule does not specify one.
    pub const DEFAULT: MinDistance = MinDistance(1.5);

    /// Creates a separation radius.
    ///
    /// # Errors
    ///
    /// Returns [`SeatForgeError::InvalidDistance`] for NaN, infinite or
    /// negative values.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(SeatForgeError::InvalidDistance(value))
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns true when `distance` is too close under this radius.
    #[inline]
    pub fn is_violated_by(self, distance: f64) -> bool {
        distance < self.0
    }
}

impl Default for MinDistance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Debug for MinDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MinDistance({})", self.0)
    }
}

impl fmt::Display for MinDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for MinDistance {
    type Error = SeatForgeError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MinDistance> for f64 {
    fn from(d: MinDistance) -> Self {
        d.0
    }
}
