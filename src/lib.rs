//! # trustbelief - Bounded trust beliefs for human-agent collaboration
//!
//! An agent working alongside a human keeps a [`TrustBelief`] per
//! collaborator: two bounded scalars, **competence** and **willingness**,
//! that evolve as behavior is observed and gate whether a task gets
//! delegated.
//!
//! ## Core Concepts
//!
//! - **BeliefScore**: a belief dimension clipped into [-1.0, 1.0]
//! - **Confidence**: certainty derived from interaction time; damps updates
//! - **TrustMechanism**: never / always / random / custom decision policy
//! - **TrustCriteria**: an activity's thresholds and dimension weights
//!
//! ## Usage
//!
//! ```rust
//! use trustbelief::{TrustBelief, TrustCriteria, TrustMechanism};
//!
//! // Track a new collaborator.
//! let mut belief = TrustBelief::neutral(TrustMechanism::CustomTrust);
//!
//! // Reward observed behavior; early updates land almost at full weight.
//! belief.increment_trust(0.5)?;
//!
//! // Gate a task that cares mostly about willingness.
//! let criteria = TrustCriteria::new(-1.0, 0.0, 0.3, 0.7)?;
//! assert!(belief.should_trust(&criteria));
//! # Ok::<(), trustbelief::BeliefError>(())
//! ```
//!
//! The crate does no I/O and holds no locks: a belief is a plain value,
//! and callers with concurrent interaction streams must serialize access.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod belief;
pub mod confidence;
pub mod criteria;
pub mod error;
pub mod mechanism;
pub mod score;

// Re-export primary types at crate root for convenience
pub use belief::TrustBelief;
pub use confidence::{Confidence, SATURATION_SECONDS, TICKS_PER_SECOND};
pub use criteria::TrustCriteria;
pub use error::{BeliefError, BeliefResult};
pub use mechanism::TrustMechanism;
pub use score::{clip, BeliefScore};
