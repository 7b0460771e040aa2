//! The evader: an unbiased random walk.

use pe_core::{AgentRng, NodeId};
use pe_graph::Topology;
use pe_strategy::EvaderView;

/// Moves to a uniformly chosen neighbor every tick.
///
/// Owns its RNG stream, so its walk depends only on the seed and the trial
/// number, never on which strategy is chasing it.
#[derive(Clone, Debug)]
pub struct Evader {
    position: NodeId,
    previous: Option<NodeId>,
    steps:    u32,
    rng:      AgentRng,
}

impl Evader {
    pub fn new(start: NodeId, rng: AgentRng) -> Self {
        Self { position: start, previous: None, steps: 0, rng }
    }

    #[inline]
    pub fn position(&self) -> NodeId {
        self.position
    }

    pub fn steps_taken(&self) -> u32 {
        self.steps
    }

    /// What a pursuer is allowed to see.
    pub fn view(&self) -> EvaderView {
        EvaderView { position: self.position, previous: self.previous }
    }

    /// Take one random-walk step.  With no neighbors the evader stays put
    /// (the step still counts).
    pub fn step(&mut self, topology: &Topology) {
        self.previous = Some(self.position);
        if let Some(&next) = self.rng.choose(topology.neighbors(self.position)) {
            self.position = next;
        }
        self.steps += 1;
    }
}
