//! Bounded belief dimensions.
//!
//! Competence and willingness are stored as `BeliefScore` values: every
//! write path clips to [-1.0, 1.0] and rounds to five decimal places so
//! that scores stay stable under comparison and storage.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BeliefError;

/// A belief dimension in [-1.0, 1.0].
///
/// The inner value is private; all construction goes through [`clip`],
/// so a `BeliefScore` is in range by construction.
///
/// # Examples
///
/// ```
/// use trustbelief::BeliefScore;
///
/// let score = BeliefScore::clipped(1.7);
/// assert_eq!(score.value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeliefScore(f64);

/// Clamps `x` to [-1.0, 1.0] and rounds it to five decimal places.
///
/// Idempotent: `clip(clip(x)) == clip(x)`.
#[must_use]
pub fn clip(x: f64) -> f64 {
    let clamped = x.clamp(BeliefScore::MIN_VALUE, BeliefScore::MAX_VALUE);
    (clamped * ROUND_SCALE).round() / ROUND_SCALE
}

const ROUND_SCALE: f64 = 1e5;

impl BeliefScore {
    /// Minimum valid score value.
    pub const MIN_VALUE: f64 = -1.0;

    /// Maximum valid score value.
    pub const MAX_VALUE: f64 = 1.0;

    /// Creates a score from a finite value, clipping it into range.
    ///
    /// # Errors
    ///
    /// Returns `BeliefError::ScoreNotFinite` if `value` is NaN or infinite.
    pub fn new(field: &'static str, value: f64) -> Result<Self, BeliefError> {
        if !value.is_finite() {
            return Err(BeliefError::ScoreNotFinite { field, value });
        }
        Ok(Self(clip(value)))
    }

    /// Creates a score by clipping, without the finiteness check.
    ///
    /// Infinities clamp to the nearest bound; callers that may hold NaN
    /// must go through [`BeliefScore::new`] instead.
    #[must_use]
    pub fn clipped(value: f64) -> Self {
        Self(clip(value))
    }

    /// A neutral score (zero).
    #[must_use]
    pub const fn neutral() -> Self {
        Self(0.0)
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns a new score shifted by `delta` and re-clipped.
    #[must_use]
    pub fn offset(&self, delta: f64) -> Self {
        Self(clip(self.0 + delta))
    }

    /// Returns true if this score is at or above `minimum`.
    #[must_use]
    pub fn meets(&self, minimum: f64) -> bool {
        self.0 >= minimum
    }
}

impl Default for BeliefScore {
    fn default() -> Self {
        Self::neutral()
    }
}

impl fmt::Display for BeliefScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}", self.0)
    }
}
