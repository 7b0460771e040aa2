//! Fixed-position examination.

use pe_core::{AgentRng, NodeId};
use pe_estimate::BeliefState;
use pe_graph::Topology;
use tracing::warn;

use crate::{Pursuer, PursuitContext, PursuitStrategy, StrategyKind, StrategyResult};

/// Never moves.  Each tick it advances its belief by one random-walk step
/// (the evader has just moved), then examines its own node and conditions
/// the belief on the result.
#[derive(Clone, Debug)]
pub struct SingleProbe {
    pursuer: Pursuer,
    belief:  BeliefState,
}

impl SingleProbe {
    pub fn new(start: NodeId, topology: &Topology) -> StrategyResult<Self> {
        topology.check(start)?;
        Ok(Self {
            pursuer: Pursuer::new(start),
            belief:  BeliefState::uniform(topology.node_count())?,
        })
    }

    /// The node examined every tick.
    pub fn probe(&self) -> NodeId {
        self.pursuer.position()
    }
}

impl PursuitStrategy for SingleProbe {
    fn kind(&self) -> StrategyKind {
        StrategyKind::SingleProbe
    }

    fn pursuer(&self) -> &Pursuer {
        &self.pursuer
    }

    fn pursuer_mut(&mut self) -> &mut Pursuer {
        &mut self.pursuer
    }

    fn pursue(&mut self, ctx: &PursuitContext<'_>, _rng: &mut AgentRng) -> StrategyResult<()> {
        let probe = self.probe();
        self.belief.propagate(ctx.topology)?;
        self.belief
            .condition_on_examination(ctx.topology, probe, probe == ctx.evader.position)?;
        self.pursuer.hold();
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
