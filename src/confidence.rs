//! Confidence derived from accumulated interaction time.
//!
//! Confidence here is not a calibrated probability: it is a hand-tuned
//! certainty scalar that grows with the number of ticks spent interacting
//! with a human. Early interactions shift trust strongly; once confidence
//! has grown, the same observation moves the belief less.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Certainty in the current belief, in [0.05, 0.9].
///
/// Derived purely from ticks of interaction time (10 ticks = 1 second).
/// The curve is an exponential approach that saturates after 40 minutes
/// of interaction; it never claims full certainty and never drops below
/// a small floor.
///
/// # Examples
///
/// ```
/// use trustbelief::Confidence;
///
/// assert_eq!(Confidence::from_ticks(0).value(), Confidence::FLOOR);
/// assert_eq!(Confidence::from_ticks(10_000_000).value(), Confidence::CEILING);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

/// Simulation rate: ticks per second of interaction time.
pub const TICKS_PER_SECOND: f64 = 10.0;

/// Seconds of interaction after which confidence is saturated (40 minutes).
pub const SATURATION_SECONDS: f64 = 2400.0;

// Hand-tuned steepness of the approach curve. At saturation the raw curve
// sits at 1 - e^-3 ~= 0.95, above the ceiling clamp.
const RISE_RATE: f64 = 3.0;

impl Confidence {
    /// Lower bound: confidence never drops below this floor.
    pub const FLOOR: f64 = 0.05;

    /// Upper bound: confidence never claims more certainty than this.
    pub const CEILING: f64 = 0.9;

    /// Computes confidence from elapsed interaction ticks.
    ///
    /// Strictly increasing in `ticks_played` between the floor and the
    /// ceiling, constant once either clamp applies.
    #[must_use]
    pub fn from_ticks(ticks_played: u64) -> Self {
        // Precision loss is irrelevant at the tick counts involved: the
        // curve saturates after 24_000 ticks.
        #[allow(clippy::cast_precision_loss)]
        let seconds = (ticks_played as f64 / TICKS_PER_SECOND).min(SATURATION_SECONDS);
        let raw = 1.0 - (-RISE_RATE * seconds / SATURATION_SECONDS).exp();
        Self(raw.clamp(Self::FLOOR, Self::CEILING))
    }

    /// Returns the confidence value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns the update damping factor, `1 - confidence`.
    ///
    /// Raw belief deltas are scaled by this factor before being applied.
    #[must_use]
    pub fn damping(&self) -> f64 {
        1.0 - self.0
    }

    /// Returns true if confidence has reached its ceiling.
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        self.0 >= Self::CEILING
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::from_ticks(0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
