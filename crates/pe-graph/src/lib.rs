//! `pe-graph`: pursuit graph topology and shortest-path routing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`topology`] | `Topology` (CSR adjacency), `TopologyBuilder` (ring + chords)   |
//! | [`router`]   | `Router` trait, `Route`, `BfsRouter`, `shortest_path`, `next_hop` |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod router;
pub mod topology;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use router::{BfsRouter, Route, Router, distances_from, next_hop, shortest_path};
pub use topology::{Topology, TopologyBuilder};
