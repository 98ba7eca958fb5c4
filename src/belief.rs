//! The trust belief object.
//!
//! A `TrustBelief` is the whole model: two bounded scalars (competence and
//! willingness), a fixed trust mechanism, and a tick counter from which
//! certainty is derived. Observed human behavior feeds in through the
//! increment/decrement mutators; delegation decisions come out through
//! [`TrustBelief::should_trust`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;
use crate::criteria::TrustCriteria;
use crate::error::{BeliefError, BeliefResult};
use crate::mechanism::TrustMechanism;
use crate::score::BeliefScore;

/// An agent's evolving trust in one human collaborator.
///
/// Constructed once per tracked human, mutated over the course of an
/// interaction session, and discarded when tracking ends. The object is
/// single-threaded by contract: callers with concurrent interaction
/// streams must serialize access themselves.
///
/// # Examples
///
/// ```
/// use trustbelief::{TrustBelief, TrustCriteria, TrustMechanism};
///
/// let mut belief = TrustBelief::neutral(TrustMechanism::CustomTrust);
/// belief.increment_trust(0.5).unwrap();
///
/// let criteria = TrustCriteria::new(-1.0, 0.0, 0.3, 0.7).unwrap();
/// assert!(belief.should_trust(&criteria));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustBelief {
    competence: BeliefScore,
    willingness: BeliefScore,
    mechanism: TrustMechanism,

    /// Ticks of interaction with this human so far. Advanced externally,
    /// never decreased.
    ticks_played: u64,
}

impl TrustBelief {
    /// Creates a belief from initial scores and a mechanism.
    ///
    /// Initial values are clipped into [-1.0, 1.0]; `ticks_played` starts
    /// at zero.
    ///
    /// # Errors
    ///
    /// Returns `BeliefError::ScoreNotFinite` if either initial score is
    /// NaN or infinite.
    pub fn new(
        competence: f64,
        willingness: f64,
        mechanism: TrustMechanism,
    ) -> BeliefResult<Self> {
        Ok(Self {
            competence: BeliefScore::new("competence", competence)?,
            willingness: BeliefScore::new("willingness", willingness)?,
            mechanism,
            ticks_played: 0,
        })
    }

    /// Creates a belief with both dimensions at zero.
    #[must_use]
    pub fn neutral(mechanism: TrustMechanism) -> Self {
        Self {
            competence: BeliefScore::neutral(),
            willingness: BeliefScore::neutral(),
            mechanism,
            ticks_played: 0,
        }
    }

    /// Current competence estimate.
    #[must_use]
    pub const fn competence(&self) -> BeliefScore {
        self.competence
    }

    /// Current willingness estimate.
    #[must_use]
    pub const fn willingness(&self) -> BeliefScore {
        self.willingness
    }

    /// The mechanism fixed at construction.
    #[must_use]
    pub const fn mechanism(&self) -> TrustMechanism {
        self.mechanism
    }

    /// Ticks of interaction recorded so far.
    #[must_use]
    pub const fn ticks_played(&self) -> u64 {
        self.ticks_played
    }

    /// Certainty in the current belief, derived from `ticks_played`.
    #[must_use]
    pub fn confidence(&self) -> Confidence {
        Confidence::from_ticks(self.ticks_played)
    }

    /// Advances interaction time to `tick`.
    ///
    /// Time comes from an external simulation clock and must not move
    /// backwards.
    ///
    /// # Errors
    ///
    /// Returns `BeliefError::TickRegression` if `tick` is behind the
    /// current tick count.
    pub fn advance_to_tick(&mut self, tick: u64) -> BeliefResult<()> {
        if tick < self.ticks_played {
            return Err(BeliefError::TickRegression {
                current: self.ticks_played,
                requested: tick,
            });
        }
        self.ticks_played = tick;
        Ok(())
    }

    /// Raises competence by `delta`, damped by confidence.
    ///
    /// Only `CustomTrust` beliefs evolve; under every other mechanism the
    /// call validates its input and does nothing. The effective change is
    /// `delta * (1 - confidence)`, clipped into range.
    ///
    /// # Errors
    ///
    /// Returns `BeliefError::DeltaNotFinite` if `delta` is NaN or infinite.
    pub fn increment_competence(&mut self, delta: f64) -> BeliefResult<()> {
        let damped = self.damped(delta)?;
        if self.mechanism.is_adaptive() {
            let updated = self.competence.offset(damped);
            if updated != self.competence {
                tracing::debug!(
                    from = %self.competence,
                    to = %updated,
                    "competence changed"
                );
            }
            self.competence = updated;
        }
        Ok(())
    }

    /// Raises willingness by `delta`, damped by confidence.
    ///
    /// Same mechanism gating and damping as
    /// [`TrustBelief::increment_competence`].
    ///
    /// # Errors
    ///
    /// Returns `BeliefError::DeltaNotFinite` if `delta` is NaN or infinite.
    pub fn increment_willingness(&mut self, delta: f64) -> BeliefResult<()> {
        let damped = self.damped(delta)?;
        if self.mechanism.is_adaptive() {
            let updated = self.willingness.offset(damped);
            if updated != self.willingness {
                tracing::debug!(
                    from = %self.willingness,
                    to = %updated,
                    "willingness changed"
                );
            }
            self.willingness = updated;
        }
        Ok(())
    }

    /// Lowers competence by `delta`. Negated increment, no separate logic.
    ///
    /// # Errors
    ///
    /// Returns `BeliefError::DeltaNotFinite` if `delta` is NaN or infinite.
    pub fn decrement_competence(&mut self, delta: f64) -> BeliefResult<()> {
        self.increment_competence(-delta)
    }

    /// Lowers willingness by `delta`. Negated increment, no separate logic.
    ///
    /// # Errors
    ///
    /// Returns `BeliefError::DeltaNotFinite` if `delta` is NaN or infinite.
    pub fn decrement_willingness(&mut self, delta: f64) -> BeliefResult<()> {
        self.increment_willingness(-delta)
    }

    /// Raises both dimensions by `delta`: competence first, then
    /// willingness. The fields are independent, so the order has no
    /// observable effect.
    ///
    /// # Errors
    ///
    /// Returns `BeliefError::DeltaNotFinite` if `delta` is NaN or infinite.
    pub fn increment_trust(&mut self, delta: f64) -> BeliefResult<()> {
        self.increment_competence(delta)?;
        self.increment_willingness(delta)
    }

    /// Lowers both dimensions by `delta`.
    ///
    /// # Errors
    ///
    /// Returns `BeliefError::DeltaNotFinite` if `delta` is NaN or infinite.
    pub fn decrement_trust(&mut self, delta: f64) -> BeliefResult<()> {
        self.increment_trust(-delta)
    }

    /// Decides whether to delegate, using a thread-local RNG for the
    /// `RandomTrust` draw.
    #[must_use]
    pub fn should_trust(&self, criteria: &TrustCriteria) -> bool {
        self.should_trust_with(criteria, &mut rand::thread_rng())
    }

    /// Decides whether to delegate, drawing any randomness from `rng`.
    ///
    /// - `NeverTrust`: always false.
    /// - `AlwaysTrust`: always true.
    /// - `RandomTrust`: false if either dimension is below its minimum;
    ///   otherwise the weighted score is compared to a fresh uniform draw
    ///   in [0, 1), so the decision is probabilistic.
    /// - `CustomTrust`: deterministic; the weighted score must reach the
    ///   same weighted combination of the thresholds.
    pub fn should_trust_with<R: Rng>(&self, criteria: &TrustCriteria, rng: &mut R) -> bool {
        match self.mechanism {
            TrustMechanism::NeverTrust => false,
            TrustMechanism::AlwaysTrust => true,
            TrustMechanism::RandomTrust => {
                if !criteria.meets_minimums(self.competence, self.willingness) {
                    return false;
                }
                let draw: f64 = rng.gen();
                criteria.weighted_score(self.competence, self.willingness) >= draw
            }
            TrustMechanism::CustomTrust => {
                criteria.weighted_score(self.competence, self.willingness)
                    >= criteria.weighted_threshold()
            }
        }
    }

    /// Scales a raw delta by the current damping factor, validating it.
    fn damped(&self, delta: f64) -> BeliefResult<f64> {
        if !delta.is_finite() {
            return Err(BeliefError::DeltaNotFinite { value: delta });
        }
        Ok(delta * self.confidence().damping())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::score::clip;

    fn custom() -> TrustBelief {
        TrustBelief::neutral(TrustMechanism::CustomTrust)
    }

    #[test]
    fn test_new_clips_initial_scores() {
        let belief = TrustBelief::new(1.5, -2.0, TrustMechanism::CustomTrust).unwrap();
        assert_eq!(belief.competence().value(), 1.0);
        assert_eq!(belief.willingness().value(), -1.0);
        assert_eq!(belief.ticks_played(), 0);
    }

    #[test]
    fn test_new_rejects_non_finite_scores() {
        assert!(matches!(
            TrustBelief::new(f64::NAN, 0.0, TrustMechanism::CustomTrust),
            Err(BeliefError::ScoreNotFinite { field: "competence", .. })
        ));
        assert!(matches!(
            TrustBelief::new(0.0, f64::INFINITY, TrustMechanism::CustomTrust),
            Err(BeliefError::ScoreNotFinite { field: "willingness", .. })
        ));
    }

    #[test]
    fn test_increment_trust_at_floor_confidence() {
        // At tick 0 confidence sits on its 0.05 floor, so a 0.5 delta
        // lands as 0.5 * 0.95 = 0.475 on both dimensions.
        let mut belief = custom();
        belief.increment_trust(0.5).unwrap();
        assert_eq!(belief.competence().value(), 0.475);
        assert_eq!(belief.willingness().value(), 0.475);
    }

    #[test]
    fn test_non_adaptive_mechanisms_ignore_updates() {
        for mechanism in [
            TrustMechanism::NeverTrust,
            TrustMechanism::AlwaysTrust,
            TrustMechanism::RandomTrust,
        ] {
            let mut belief = TrustBelief::new(0.2, -0.3, mechanism).unwrap();
            belief.increment_trust(0.5).unwrap();
            belief.decrement_competence(0.8).unwrap();
            belief.increment_willingness(0.1).unwrap();
            assert_eq!(belief.competence().value(), 0.2);
            assert_eq!(belief.willingness().value(), -0.3);
        }
    }

    #[test]
    fn test_increment_then_decrement_restores_value() {
        // Holds when no clip boundary is crossed and ticks do not change.
        let mut belief = custom();
        belief.increment_competence(0.4).unwrap();
        belief.decrement_competence(0.4).unwrap();
        assert_eq!(belief.competence().value(), 0.0);
    }

    #[test]
    fn test_updates_never_leave_range() {
        let mut belief = custom();
        for _ in 0..10 {
            belief.increment_trust(0.9).unwrap();
        }
        assert_eq!(belief.competence().value(), 1.0);
        for _ in 0..30 {
            belief.decrement_willingness(0.7).unwrap();
        }
        assert_eq!(belief.willingness().value(), -1.0);
    }

    #[test]
    fn test_damping_grows_with_ticks() {
        let mut early = custom();
        early.increment_competence(0.5).unwrap();

        let mut late = custom();
        late.advance_to_tick(12_000).unwrap();
        late.increment_competence(0.5).unwrap();

        assert!(late.competence().value() < early.competence().value());
        let expected = clip(0.5 * Confidence::from_ticks(12_000).damping());
        assert_eq!(late.competence().value(), expected);
    }

    #[test]
    fn test_non_finite_delta_rejected_for_all_mechanisms() {
        for mechanism in [
            TrustMechanism::NeverTrust,
            TrustMechanism::AlwaysTrust,
            TrustMechanism::RandomTrust,
            TrustMechanism::CustomTrust,
        ] {
            let mut belief = TrustBelief::neutral(mechanism);
            assert!(matches!(
                belief.increment_trust(f64::NAN),
                Err(BeliefError::DeltaNotFinite { .. })
            ));
        }
    }

    #[test]
    fn test_tick_regression_rejected() {
        let mut belief = custom();
        belief.advance_to_tick(100).unwrap();
        assert_eq!(
            belief.advance_to_tick(40),
            Err(BeliefError::TickRegression {
                current: 100,
                requested: 40,
            })
        );
        // Standing still is allowed.
        belief.advance_to_tick(100).unwrap();
        assert_eq!(belief.ticks_played(), 100);
    }

    #[test]
    fn test_should_trust_weighted_threshold() {
        let mut belief = custom();
        belief.advance_to_tick(24_000).unwrap();
        // Saturated confidence damps to 0.1, so 5.0 raw lands as 0.5.
        belief.increment_trust(5.0).unwrap();
        assert_eq!(belief.competence().value(), 0.5);

        // Weighted score 0.5*0.3 + 0.5*0.7 = 0.5, threshold -1*0.3 + 0*0.7.
        let criteria = TrustCriteria::new(-1.0, 0.0, 0.3, 0.7).unwrap();
        assert!(belief.should_trust(&criteria));

        // Threshold 0.9*0.3 + 0.9*0.7 = 0.9 is out of reach.
        let strict = TrustCriteria::new(0.9, 0.9, 0.3, 0.7).unwrap();
        assert!(!belief.should_trust(&strict));
    }

    #[test]
    fn test_never_and_always_ignore_scores() {
        let criteria = TrustCriteria::new(1.0, 1.0, 0.5, 0.5).unwrap();
        let lenient = TrustCriteria::new(-1.0, -1.0, 0.5, 0.5).unwrap();

        let never = TrustBelief::new(1.0, 1.0, TrustMechanism::NeverTrust).unwrap();
        assert!(!never.should_trust(&criteria));
        assert!(!never.should_trust(&lenient));

        let always = TrustBelief::new(-1.0, -1.0, TrustMechanism::AlwaysTrust).unwrap();
        assert!(always.should_trust(&criteria));
        assert!(always.should_trust(&lenient));
    }

    #[test]
    fn test_random_trust_gates_on_minimums() {
        let mut rng = StdRng::seed_from_u64(7);
        let belief = TrustBelief::new(0.2, 0.9, TrustMechanism::RandomTrust).unwrap();
        let gated = TrustCriteria::new(0.5, 0.0, 0.5, 0.5).unwrap();
        for _ in 0..50 {
            assert!(!belief.should_trust_with(&gated, &mut rng));
        }
    }

    #[test]
    fn test_random_trust_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let criteria = TrustCriteria::new(-1.0, -1.0, 0.5, 0.5).unwrap();

        // Weighted score 1.0: no draw in [0, 1) can exceed it.
        let certain = TrustBelief::new(1.0, 1.0, TrustMechanism::RandomTrust).unwrap();
        for _ in 0..50 {
            assert!(certain.should_trust_with(&criteria, &mut rng));
        }

        // Weighted score -1.0: every draw beats it.
        let hopeless = TrustBelief::new(-1.0, -1.0, TrustMechanism::RandomTrust).unwrap();
        for _ in 0..50 {
            assert!(!hopeless.should_trust_with(&criteria, &mut rng));
        }
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut belief = TrustBelief::new(0.25, -0.5, TrustMechanism::CustomTrust).unwrap();
        belief.advance_to_tick(600).unwrap();

        let json = serde_json::to_string(&belief).unwrap();
        let restored: TrustBelief = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.competence(), belief.competence());
        assert_eq!(restored.willingness(), belief.willingness());
        assert_eq!(restored.mechanism(), belief.mechanism());
        assert_eq!(restored.ticks_played(), 600);
    }
}
