//! `pe-estimate`: probabilistic estimates of where the evader is.
//!
//! Two interchangeable representations of the same occupancy distribution:
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`belief`]     | `BeliefState`: exact discrete distribution over nodes       |
//! | [`particle`]   | `Particle`, `ParticleSet`, `PointEstimate`, `ResampleOutcome` |
//! | [`transition`] | `TransitionModel`: row-stochastic movement model with online re-estimation |
//! | [`error`]      | `EstimateError`, `EstimateResult<T>`                         |
//!
//! # Invariants
//!
//! After every public mutating operation a `BeliefState` is non-negative and
//! sums to 1 within `1e-9`.  If an update would leave no probability mass
//! anywhere, the operation fails with [`EstimateError::ZeroMass`] and the
//! state must be discarded: continuing with NaN probabilities would
//! silently corrupt every later decision.

pub mod belief;
pub mod error;
pub mod particle;
pub mod transition;


pub use belief::BeliefState;
pub use error::{EstimateError, EstimateResult};
pub use particle::{Particle, ParticleSet, PointEstimate, ResampleOutcome};
pub use transition::TransitionModel;

/// Tolerance used by normalization checks.
pub const SUM_TOLERANCE: f64 = 1e-9;
