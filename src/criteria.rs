//! Decision criteria for trust gating.
//!
//! An activity that wants to delegate work to a human describes its
//! requirements as minimum competence/willingness thresholds plus a weight
//! for each dimension. Passing a minimum of -1.0 disables that gate: a
//! score can never fall below it, so the corresponding term cannot fail
//! the decision.

use serde::{Deserialize, Serialize};

use crate::error::BeliefError;
use crate::score::BeliefScore;

/// Validated inputs to a trust decision.
///
/// # Examples
///
/// ```
/// use trustbelief::TrustCriteria;
///
/// // An activity that needs willingness but no particular competence.
/// let criteria = TrustCriteria::new(-1.0, 0.0, 0.3, 0.7).unwrap();
/// assert_eq!(criteria.weighted_threshold(), 0.3 * -1.0 + 0.7 * 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustCriteria {
    /// Minimum competence required; -1.0 disables the competence gate.
    pub min_competence: f64,

    /// Minimum willingness required; -1.0 disables the willingness gate.
    pub min_willingness: f64,

    /// Weight of the competence dimension in the decision.
    pub competence_weight: f64,

    /// Weight of the willingness dimension in the decision.
    pub willingness_weight: f64,
}

impl TrustCriteria {
    /// Creates criteria with validation.
    ///
    /// # Errors
    ///
    /// Returns `BeliefError::CriterionNotFinite` if any input is NaN or
    /// infinite.
    pub fn new(
        min_competence: f64,
        min_willingness: f64,
        competence_weight: f64,
        willingness_weight: f64,
    ) -> Result<Self, BeliefError> {
        for (field, value) in [
            ("min_competence", min_competence),
            ("min_willingness", min_willingness),
            ("competence_weight", competence_weight),
            ("willingness_weight", willingness_weight),
        ] {
            if !value.is_finite() {
                return Err(BeliefError::CriterionNotFinite { field, value });
            }
        }
        Ok(Self {
            min_competence,
            min_willingness,
            competence_weight,
            willingness_weight,
        })
    }

    /// Computes the weighted score of a competence/willingness pair.
    #[must_use]
    pub fn weighted_score(&self, competence: BeliefScore, willingness: BeliefScore) -> f64 {
        competence.value() * self.competence_weight + willingness.value() * self.willingness_weight
    }

    /// Computes the same weighted combination applied to the thresholds.
    #[must_use]
    pub fn weighted_threshold(&self) -> f64 {
        self.min_competence * self.competence_weight
            + self.min_willingness * self.willingness_weight
    }

    /// Returns true if the pair clears both hard minimums.
    #[must_use]
    pub fn meets_minimums(&self, competence: BeliefScore, willingness: BeliefScore) -> bool {
        competence.meets(self.min_competence) && willingness.meets(self.min_willingness)
    }
}
