//! Trust mechanism selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Policy governing whether and how a belief evolves and decides.
///
/// The mechanism is chosen at construction and never changes for the
/// lifetime of the belief. Every dispatch site matches exhaustively, so
/// adding a fifth mechanism is a compile-time event, not a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustMechanism {
    /// Never delegate; belief updates are ignored.
    NeverTrust,

    /// Always delegate; belief updates are ignored.
    AlwaysTrust,

    /// Gate on the minimums, then compare the weighted score against a
    /// fresh uniform draw. Belief updates are ignored.
    RandomTrust,

    /// Evolve the belief from observations and decide deterministically
    /// by weighted threshold comparison.
    CustomTrust,
}

impl TrustMechanism {
    /// Returns true if this mechanism lets the belief evolve from
    /// observed behavior.
    #[must_use]
    pub const fn is_adaptive(&self) -> bool {
        match self {
            Self::CustomTrust => true,
            Self::NeverTrust | Self::AlwaysTrust | Self::RandomTrust => false,
        }
    }
}

impl fmt::Display for TrustMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NeverTrust => write!(f, "never_trust"),
            Self::AlwaysTrust => write!(f, "always_trust"),
            Self::RandomTrust => write!(f, "random_trust"),
            Self::CustomTrust => write!(f, "custom_trust"),
        }
    }
}
