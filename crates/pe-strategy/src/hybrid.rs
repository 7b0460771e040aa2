//! Particle filter and HMM belief run side by side.
//!
//! The two estimators see the same observation each tick.  The particle
//! population, propagated through the learned [`TransitionModel`], decides
//! where to move; the smoothed belief decides where to look.
//!
//! Every tick ends with a tracked evader position: the examined node on a
//! sighting, the particle point estimate otherwise.  The move from the
//! previous tracked position to the new one is counted in the transition
//! model, so the model drifts from the topology prior toward the walk
//! actually observed.  A sighting also reveals where the evader came from,
//! and that node replaces the previous estimate as the source.  Moves the
//! graph does not permit (an estimate jumping several hops) are skipped.

use pe_core::{AgentRng, NodeId};
use pe_estimate::{BeliefState, ParticleSet, ResampleOutcome, TransitionModel};
use pe_graph::{Topology, next_hop};
use tracing::{trace, warn};

use crate::{
    Pursuer, PursuitContext, PursuitStrategy, StrategyKind, StrategyParams, StrategyResult,
};

#[derive(Clone, Debug)]
pub struct ParticleHmm {
    pursuer:       Pursuer,
    params:        StrategyParams,
    belief:        BeliefState,
    particles:     ParticleSet,
    model:         TransitionModel,
    /// Where the evader was believed to be at the end of the previous tick.
    last_tracked:  Option<NodeId>,
}

impl ParticleHmm {
    pub fn new(
        start:    NodeId,
        topology: &Topology,
        params:   &StrategyParams,
        rng:      &mut AgentRng,
    ) -> StrategyResult<Self> {
        topology.check(start)?;
        let n = topology.node_count();
        let model = TransitionModel::from_topology(topology, params.stay_probability)?
            .with_pseudocount(params.transition_pseudocount);
        Ok(Self {
            pursuer:       Pursuer::new(start),
            params:        *params,
            belief:        BeliefState::uniform(n)?,
            particles:     ParticleSet::initialize(params.particle_count, n, rng)?,
            model,
            last_tracked:  None,
        })
    }

    pub fn model(&self) -> &TransitionModel {
        &self.model
    }

    /// Count the evader's move from its previous tracked node to `to`.
    /// `source` overrides the previous tracked node when the move was seen.
    fn track(&mut self, source: Option<NodeId>, to: NodeId) -> StrategyResult<()> {
        if let Some(from) = source.or(self.last_tracked) {
            if self.model.allows(from, to) {
                self.model.record(from, to)?;
            } else {
                trace!(%from, %to, "untracked jump");
            }
        }
        self.last_tracked = Some(to);
        Ok(())
    }

    fn filter(&mut self, examined: NodeId, found: bool, rng: &mut AgentRng) -> StrategyResult<()> {
        self.particles.predict(&self.model, rng)?;
        self.particles.weight(|n| if (n == examined) == found { 1.0 } else { 0.0 });
        let outcome = self.particles.resample(rng);
        if outcome == ResampleOutcome::Degenerate && found {
            // No particle predicted the confirmed position.
            self.particles.collapse_to(examined)?;
        }
        Ok(())
    }

    fn smooth(&mut self, topology: &Topology, examined: NodeId, found: bool) -> StrategyResult<()> {
        self.belief.propagate_with(&self.model)?;
        self.belief.condition_on_examination(topology, examined, found)?;
        let histogram = self.particles.histogram()?;
        self.belief.blend(&histogram, self.params.smoothing_weight)?;
        Ok(())
    }
}

impl PursuitStrategy for ParticleHmm {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ParticleHmm
    }

    fn pursuer(&self) -> &Pursuer {
        &self.pursuer
    }

    fn pursuer_mut(&mut self) -> &mut Pursuer {
        &mut self.pursuer
    }

    fn pursue(&mut self, ctx: &PursuitContext<'_>, rng: &mut AgentRng) -> StrategyResult<()> {
        let examined = self.belief.argmax(rng);
        let found = examined == ctx.evader.position;

        self.filter(examined, found, rng)?;
        self.smooth(ctx.topology, examined, found)?;

        let here = self.pursuer.position();
        let goal = self.particles.estimate(self.params.point_estimate, rng);
        if found {
            self.track(ctx.evader.previous, examined)?;
        } else {
            self.track(None, goal)?;
        }
        trace!(%examined, found, %goal, "particle-hmm step");
        if goal == here {
            self.pursuer.hold();
        } else {
            self.pursuer.advance(next_hop(ctx.topology, here, goal, rng));
        }
        Ok(())
    }

    fn reset(
        &self,
        start:    NodeId,
        topology: &Topology,
        rng:      &mut AgentRng,
    ) -> StrategyResult<Box<dyn PursuitStrategy>> {
        Ok(Box::new(Self::new(start, topology, &self.params, rng)?))
    }

    fn on_capture(&mut self, node: NodeId) {
        let collapsed = self
            .belief
            .collapse_to(node)
            .and_then(|()| self.particles.collapse_to(node));
        if let Err(error) = collapsed {
            warn!(%error, "capture outside estimate support");
        }
    }

    fn belief(&self) -> Option<&BeliefState> {
        Some(&self.belief)
    }

    fn particles(&self) -> Option<&ParticleSet> {
        Some(&self.particles)
    }
}
