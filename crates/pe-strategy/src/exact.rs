//! Full-information shortest-path chase.

use pe_core::{AgentRng, NodeId};
use pe_graph::{Topology, next_hop};

use crate::{Pursuer, PursuitContext, PursuitStrategy, StrategyKind, StrategyResult};

/// Re-plans a minimum-hop path to the evader every tick and takes its first
/// hop.  Among several shortest first hops one is picked at random.
#[derive(Clone, Debug)]
pub struct ExactPursuit {
    pursuer: Pursuer,
}

impl ExactPursuit {
    pub fn new(start: NodeId) -> Self {
        Self { pursuer: Pursuer::new(start) }
    }
}

impl PursuitStrategy for ExactPursuit {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ExactPursuit
    }

    fn pursuer(&self) -> &Pursuer {
        &self.pursuer
    }

    fn pursuer_mut(&mut self) -> &mut Pursuer {
        &mut self.pursuer
    }

    fn pursue(&mut self, ctx: &PursuitContext<'_>, rng: &mut AgentRng) -> StrategyResult<()> {
        let here = self.pursuer.position();
        if here == ctx.evader.position {
            self.pursuer.hold();
            return Ok(());
        }
        let next = next_hop(ctx.topology, here, ctx.evader.position, rng);
        self.pursuer.advance(next);
        Ok(())
    }

    fn reset(
        &self,
        start:    NodeId,
        topology: &Topology,
        _rng:     &mut AgentRng,
    ) -> StrategyResult<Box<dyn PursuitStrategy>> {
        topology.check(start)?;
        Ok(Box::new(Self::new(start)))
    }
}
