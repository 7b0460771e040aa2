//! Baseline: never move.

use pe_core::{AgentRng, NodeId};
use pe_graph::Topology;

use crate::{Pursuer, PursuitContext, PursuitStrategy, StrategyKind, StrategyResult};

/// Waits at its start node for the evader to walk in.  Still counts one
/// step per tick so its averages compare with the moving strategies.
#[derive(Clone, Debug)]
pub struct StationaryWait {
    pursuer: Pursuer,
}

impl StationaryWait {
    pub fn new(start: NodeId) -> Self {
        Self { pursuer: Pursuer::new(start) }
    }
}

impl PursuitStrategy for StationaryWait {
    fn kind(&self) -> StrategyKind {
        StrategyKind::StationaryWait
    }

    fn pursuer(&self) -> &Pursuer {
        &self.pursuer
    }

    fn pursuer_mut(&mut self) -> &mut Pursuer {
        &mut self.pursuer
    }

    fn pursue(&mut self, _ctx: &PursuitContext<'_>, _rng: &mut AgentRng) -> StrategyResult<()> {
        self.pursuer.hold();
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
