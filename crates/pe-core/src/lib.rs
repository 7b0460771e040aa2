//! `pe-core`: foundational types for the pursuit-evasion workspace.
//!
//! This crate is a dependency of every other `pe-*` crate.  It has no `pe-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `NodeId` (1-based label), `AgentId`, `TrialId`          |
//! | [`time`]   | `Tick`                                                  |
//! | [`config`] | `TrialConfig`: graph size, trial count, seed, caps     |
//! | [`rng`]    | `AgentRng` (per-agent, per-trial), `SimRng` (root)      |
//! | [`error`]  | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TrialConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, NodeId, TrialId};
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
