//! Label-greedy chase.

use pe_core::{AgentRng, NodeId};
use pe_graph::Topology;

use crate::select::choose_min_by_key;
use crate::{Pursuer, PursuitContext, PursuitStrategy, StrategyKind, StrategyResult};

/// Steps to the neighbor whose label is numerically closest to the evader's.
///
/// The label difference is not a graph distance, so on a ring with chords
/// this can move away from the evader; it always moves when it has any
/// neighbor at all.
#[derive(Clone, Debug)]
pub struct GreedyNeighbor {
    pursuer: Pursuer,
}

impl GreedyNeighbor {
    pub fn new(start: NodeId) -> Self {
        Self { pursuer: Pursuer::new(start) }
    }
}

impl PursuitStrategy for GreedyNeighbor {
    fn kind(&self) -> StrategyKind {
        StrategyKind::GreedyNeighbor
    }

    fn pursuer(&self) -> &Pursuer {
        &self.pursuer
    }

    fn pursuer_mut(&mut self) -> &mut Pursuer {
        &mut self.pursuer
    }

    fn pursue(&mut self, ctx: &PursuitContext<'_>, rng: &mut AgentRng) -> StrategyResult<()> {
        let goal = ctx.evader.position;
        let neighbors = ctx.topology.neighbors(self.pursuer.position());
        let next = choose_min_by_key(neighbors, |nb| nb.label_distance(goal), rng);
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
