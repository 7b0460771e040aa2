//! `pe-strategy`: pursuit policies and the trait they share.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`model`]       | `PursuitStrategy` trait, `Pursuer` (position + counters)      |
//! | [`context`]     | `PursuitContext<'a>`, `EvaderView`                            |
//! | [`kind`]        | `StrategyKind` catalogue and factory                          |
//! | [`params`]      | `StrategyParams`: estimator constants                        |
//! | [`select`]      | uniform tie-breaking helpers                                  |
//! | [`error`]       | `StrategyError`, `StrategyResult<T>`                          |
//!
//! The eight variants live in their own modules:
//!
//! | Strategy            | Keeps                                   | Moves toward                       |
//! |---------------------|-----------------------------------------|------------------------------------|
//! | [`StationaryWait`]  | nothing                                 | never moves                        |
//! | [`GreedyNeighbor`]  | nothing                                 | closest label to the evader        |
//! | [`ExactPursuit`]    | nothing                                 | evader, by shortest path           |
//! | [`SingleProbe`]     | belief                                  | never moves; examines its own node |
//! | [`BeliefSeeking`]   | belief                                  | belief argmax, by label            |
//! | [`BeliefCoverage`]  | belief, visited set                     | least-explored belief argmax       |
//! | [`BeliefDiffusion`] | belief                                  | highest-belief neighbor            |
//! | [`ParticleHmm`]     | belief, particles, transition model     | particle estimate, by shortest path |
//!
//! # Tick protocol
//!
//! The harness calls, in order: [`PursuitStrategy::capture`], then (if that
//! failed) [`PursuitStrategy::pursue`], then `capture` again.  Estimates are
//! only touched inside `pursue` and on a successful capture.

pub mod belief_seek;
pub mod context;
pub mod coverage;
pub mod diffusion;
pub mod error;
pub mod exact;
pub mod greedy;
pub mod hybrid;
pub mod kind;
pub mod model;
pub mod params;
pub mod probe;
pub mod select;
pub mod stationary;


pub use belief_seek::BeliefSeeking;
pub use context::{EvaderView, PursuitContext};
pub use coverage::BeliefCoverage;
pub use diffusion::BeliefDiffusion;
pub use error::{StrategyError, StrategyResult};
pub use exact::ExactPursuit;
pub use greedy::GreedyNeighbor;
pub use hybrid::ParticleHmm;
pub use kind::StrategyKind;
pub use model::{Pursuer, PursuitStrategy};
pub use params::StrategyParams;
pub use probe::SingleProbe;
pub use stationary::StationaryWait;
