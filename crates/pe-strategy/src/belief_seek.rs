//! Chase the most probable evader location.

use pe_core::{AgentRng, NodeId};
use pe_estimate::BeliefState;
use pe_graph::Topology;
use tracing::warn;

use crate::select::choose_min_by_key;
use crate::{Pursuer, PursuitContext, PursuitStrategy, StrategyKind, StrategyResult};

/// One hop toward `target` by label: the neighbor with the smallest label
/// difference, but only if it is strictly closer than `here`.
pub(crate) fn label_step(
    topology: &Topology,
    here:     NodeId,
    target:   NodeId,
    rng:      &mut AgentRng,
) -> Option<NodeId> {
    let current = here.label_distance(target);
    let closer: Vec<NodeId> = topology
        .neighbors(here)
        .iter()
        .copied()
        .filter(|nb| nb.label_distance(target) < current)
        .collect();
    choose_min_by_key(&closer, |nb| nb.label_distance(target), rng)
}

/// Picks the belief argmax as its target, steps toward it, examines it and
/// conditions the belief on what it saw.
#[derive(Clone, Debug)]
pub struct BeliefSeeking {
    pursuer: Pursuer,
    belief:  BeliefState,
}

impl BeliefSeeking {
    pub fn new(start: NodeId, topology: &Topology) -> StrategyResult<Self> {
        topology.check(start)?;
        Ok(Self {
            pursuer: Pursuer::new(start),
            belief:  BeliefState::uniform(topology.node_count())?,
        })
    }
}

impl PursuitStrategy for BeliefSeeking {
    fn kind(&self) -> StrategyKind {
        StrategyKind::BeliefSeeking
    }

    fn pursuer(&self) -> &Pursuer {
        &self.pursuer
    }

    fn pursuer_mut(&mut self) -> &mut Pursuer {
        &mut self.pursuer
    }

    fn pursue(&mut self, ctx: &PursuitContext<'_>, rng: &mut AgentRng) -> StrategyResult<()> {
        let target = self.belief.argmax(rng);
        let next = label_step(ctx.topology, self.pursuer.position(), target, rng);
        self.pursuer.advance(next);
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
