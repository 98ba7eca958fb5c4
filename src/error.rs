//! Error types for trustbelief.
//!
//! All errors are strongly typed using thiserror. Belief arithmetic is
//! total (clipping keeps scores in range), so the taxonomy only covers
//! caller misuse: non-finite numeric inputs and time moving backwards.

use thiserror::Error;

/// Errors raised when constructing or mutating a trust belief.
#[derive(Debug, Error, PartialEq)]
pub enum BeliefError {
    #[error("{field} score {value} is not a finite number")]
    ScoreNotFinite {
        field: &'static str,
        value: f64,
    },

    #[error("Update delta {value} is not a finite number")]
    DeltaNotFinite {
        value: f64,
    },

    #[error("Criterion '{field}' value {value} is not a finite number")]
    CriterionNotFinite {
        field: &'static str,
        value: f64,
    },

    #[error("Tick {requested} is behind the current tick {current}; interaction time cannot regress")]
    TickRegression {
        current: u64,
        requested: u64,
    },
}

/// Result type alias for trustbelief operations.
pub type BeliefResult<T> = Result<T, BeliefError>;
