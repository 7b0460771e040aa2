//! Read-only game state passed to every strategy call.

use pe_core::{NodeId, Tick};
use pe_graph::Topology;

/// What a pursuer may observe about the evader this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvaderView {
    /// Node the evader occupies now.
    pub position: NodeId,

    /// Node it occupied one tick earlier; `None` before its first move.
    pub previous: Option<NodeId>,
}

impl EvaderView {
    /// A view of an evader that has not moved yet.
    pub fn at(position: NodeId) -> Self {
        Self { position, previous: None }
    }
}

/// A snapshot of the game for one [`pursue`][crate::PursuitStrategy::pursue]
/// call.
///
/// Built fresh by the harness every tick.  Strategies must not keep the
/// topology borrow or the evader view beyond the call.
#[derive(Copy, Clone, Debug)]
pub struct PursuitContext<'a> {
    /// Current tick of the trial.
    pub tick: Tick,

    /// The graph both players move on.
    pub topology: &'a Topology,

    /// Observable evader state.
    pub evader: EvaderView,
}

impl<'a> PursuitContext<'a> {
    #[inline]
    pub fn new(tick: Tick, topology: &'a Topology, evader: EvaderView) -> Self {
        Self { tick, topology, evader }
    }
}
