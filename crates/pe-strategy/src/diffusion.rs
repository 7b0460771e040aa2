//! Belief reweighted toward the observed evader, followed by local ascent.

use pe_core::{AgentRng, NodeId};
use pe_estimate::BeliefState;
use pe_graph::{Topology, distances_from};
use tracing::warn;

use crate::select::choose_min_by_key;
use crate::{
    Pursuer, PursuitContext, PursuitStrategy, StrategyKind, StrategyParams, StrategyResult,
};

/// Each tick:
///
/// 1. diffuse the belief toward the evader's observed node
///    (`params.diffusion_hit`);
/// 2. step to the neighbor with the highest belief, preferring the one
///    closest (in hops) to the overall belief peak, then at random;
/// 3. examine the node it landed on and condition the belief.
#[derive(Clone, Debug)]
pub struct BeliefDiffusion {
    pursuer: Pursuer,
    params:  StrategyParams,
    belief:  BeliefState,
}

impl BeliefDiffusion {
    pub fn new(start: NodeId, topology: &Topology, params: &StrategyParams) -> StrategyResult<Self> {
        topology.check(start)?;
        Ok(Self {
            pursuer: Pursuer::new(start),
            params:  *params,
            belief:  BeliefState::uniform(topology.node_count())?,
        })
    }

    fn ascend(&self, topology: &Topology, rng: &mut AgentRng) -> Option<NodeId> {
        let neighbors = topology.neighbors(self.pursuer.position());
        let best = neighbors
            .iter()
            .map(|&nb| self.belief.prob(nb))
            .fold(f64::NEG_INFINITY, f64::max);
        let top: Vec<NodeId> = neighbors
            .iter()
            .copied()
            .filter(|&nb| self.belief.prob(nb) == best)
            .collect();
        if top.len() <= 1 {
            return top.first().copied();
        }
        let peak = self.belief.argmax(rng);
        let dist = distances_from(topology, peak);
        choose_min_by_key(&top, |nb| dist[nb.index()].unwrap_or(u32::MAX), rng)
    }
}

impl PursuitStrategy for BeliefDiffusion {
    fn kind(&self) -> StrategyKind {
        StrategyKind::BeliefDiffusion
    }

    fn pursuer(&self) -> &Pursuer {
        &self.pursuer
    }

    fn pursuer_mut(&mut self) -> &mut Pursuer {
        &mut self.pursuer
    }

    fn pursue(&mut self, ctx: &PursuitContext<'_>, rng: &mut AgentRng) -> StrategyResult<()> {
        self.belief.diffuse(ctx.evader.position, self.params.diffusion_hit)?;
        let next = self.ascend(ctx.topology, rng);
        self.pursuer.advance(next);

        let here = self.pursuer.position();
        self.belief
            .condition_on_examination(ctx.topology, here, here == ctx.evader.position)?;
        Ok(())
    }

    fn reset(
        &self,
        start:    NodeId,
        topology: &Topology,
        _rng:     &mut AgentRng,
    ) -> StrategyResult<Box<dyn PursuitStrategy>> {
        Ok(Box::new(Self::new(start, topology, &self.params)?))
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
