//! Belief seeking biased toward unexplored territory.

use std::cmp::Reverse;

use pe_core::{AgentRng, NodeId};
use pe_estimate::BeliefState;
use pe_graph::Topology;
use rustc_hash::FxHashSet;
use tracing::warn;

use crate::belief_seek::label_step;
use crate::select::choose_min_by_key;
use crate::{Pursuer, PursuitContext, PursuitStrategy, StrategyKind, StrategyResult};

/// Like [`BeliefSeeking`](crate::BeliefSeeking), but when several nodes
/// share the maximum belief it prefers the one with the most neighbors it
/// has never stood on.
#[derive(Clone, Debug)]
pub struct BeliefCoverage {
    pursuer: Pursuer,
    belief:  BeliefState,
    visited: FxHashSet<NodeId>,
}

impl BeliefCoverage {
    pub fn new(start: NodeId, topology: &Topology) -> StrategyResult<Self> {
        topology.check(start)?;
        let mut visited = FxHashSet::default();
        visited.insert(start);
        Ok(Self {
            pursuer: Pursuer::new(start),
            belief:  BeliefState::uniform(topology.node_count())?,
            visited,
        })
    }

    /// Nodes this pursuer has occupied, start included.
    pub fn visited(&self) -> &FxHashSet<NodeId> {
        &self.visited
    }

    fn unvisited_neighbors(&self, topology: &Topology, node: NodeId) -> usize {
        topology
            .neighbors(node)
            .iter()
            .filter(|nb| !self.visited.contains(nb))
            .count()
    }

    fn pick_target(&self, topology: &Topology, rng: &mut AgentRng) -> NodeId {
        let candidates = self.belief.argmax_nodes();
        choose_min_by_key(&candidates, |n| Reverse(self.unvisited_neighbors(topology, n)), rng)
            .unwrap_or(self.pursuer.position())
    }
}

impl PursuitStrategy for BeliefCoverage {
    fn kind(&self) -> StrategyKind {
        StrategyKind::BeliefCoverage
    }

    fn pursuer(&self) -> &Pursuer {
        &self.pursuer
    }

    fn pursuer_mut(&mut self) -> &mut Pursuer {
        &mut self.pursuer
    }

    fn pursue(&mut self, ctx: &PursuitContext<'_>, rng: &mut AgentRng) -> StrategyResult<()> {
        let target = self.pick_target(ctx.topology, rng);
        let next = label_step(ctx.topology, self.pursuer.position(), target, rng);
        self.pursuer.advance(next);
        self.visited.insert(self.pursuer.position());
        self.belief
            .condition_on_examination(ctx.topology, target, target == ctx.evader.position)?;
        Ok(())
    }

    fn reset(
        &self,
        start:    NodeId,
        topology: &Topology,
        _rng:     &mut AgentRng,
    ) -> StrategyResult<Box<dyn PursuitStrategy>> {
        Ok(Box::new(Self::new(start, topology)?))
    }

    fn on_capture(&mut self, node: NodeId) {
        if let Err(error) = self.belief.collapse_to(node) {
            warn!(%error, "capture outside belief support");
        }
    }

    fn belief(&self) -> Option<&BeliefState> {
        Some(&self.belief)
    }
}
