//! The `PursuitStrategy` trait: the extension point every variant implements.

use std::fmt;

use pe_core::{AgentRng, NodeId};
use pe_estimate::{BeliefState, ParticleSet};
use pe_graph::Topology;
use tracing::debug;

use crate::{EvaderView, PursuitContext, StrategyKind, StrategyResult};

// ── Pursuer ───────────────────────────────────────────────────────────────────

/// Position and counters common to every strategy.
///
/// Strategies embed one `Pursuer` and route all movement through
/// [`advance`](Self::advance) or [`hold`](Self::hold), so a step is counted
/// exactly once per [`pursue`](PursuitStrategy::pursue) call whether or not
/// the pursuer actually changes node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pursuer {
    position: NodeId,
    steps:    u32,
    captures: u32,
}

impl Pursuer {
    pub fn new(start: NodeId) -> Self {
        Self { position: start, steps: 0, captures: 0 }
    }

    #[inline]
    pub fn position(&self) -> NodeId {
        self.position
    }

    pub fn steps_taken(&self) -> u32 {
        self.steps
    }

    pub fn successful_captures(&self) -> u32 {
        self.captures
    }

    /// Count a step and move to `next`.  `None` means no candidate move
    /// existed; the pursuer holds position.
    pub fn advance(&mut self, next: Option<NodeId>) {
        self.steps += 1;
        match next {
            Some(node) => self.position = node,
            None => debug!(position = %self.position, "no candidate move; holding"),
        }
    }

    /// Count a step without moving.
    pub fn hold(&mut self) {
        self.steps += 1;
    }

    /// `true` if the pursuer stands on the evader's node; counts the capture.
    pub fn try_capture(&mut self, evader: &EvaderView) -> bool {
        let captured = self.position == evader.position;
        if captured {
            self.captures += 1;
        }
        captured
    }
}

// ── PursuitStrategy ───────────────────────────────────────────────────────────

/// A pluggable pursuit policy.
///
/// The harness drives a strategy with one [`pursue`](Self::pursue) call per
/// tick, bracketed by [`capture`](Self::capture) checks.  All game state
/// arrives through the [`PursuitContext`]; randomness arrives through the
/// per-trial [`AgentRng`], so a strategy is reproducible from the seed alone.
///
/// Between trials the harness calls [`reset`](Self::reset), which builds a
/// brand-new instance rather than mutating this one: no belief, particle or
/// visited-set state can leak from one trial into the next.
///
/// # Required methods
///
/// `kind`, the two `pursuer` accessors, `pursue` and `reset`.  The counters,
/// `capture` and the estimate views have defaults.
pub trait PursuitStrategy: fmt::Debug + Send {
    fn kind(&self) -> StrategyKind;

    fn pursuer(&self) -> &Pursuer;

    fn pursuer_mut(&mut self) -> &mut Pursuer;

    /// Take one tick's action: update internal estimates, then move (or
    /// hold).  Increments the step counter exactly once.
    fn pursue(&mut self, ctx: &PursuitContext<'_>, rng: &mut AgentRng) -> StrategyResult<()>;

    /// A fresh instance of the same strategy at `start`, counters zeroed and
    /// estimator state rebuilt.
    fn reset(
        &self,
        start:    NodeId,
        topology: &Topology,
        rng:      &mut AgentRng,
    ) -> StrategyResult<Box<dyn PursuitStrategy>>;

    /// `true` iff the pursuer occupies the evader's node.  On success the
    /// capture counter is incremented and [`on_capture`](Self::on_capture)
    /// runs.
    fn capture(&mut self, evader: &EvaderView) -> bool {
        let captured = self.pursuer_mut().try_capture(evader);
        if captured {
            self.on_capture(evader.position);
        }
        captured
    }

    /// Hook for estimators to absorb a confirmed evader position.
    ///
    /// Default: nothing.
    fn on_capture(&mut self, _node: NodeId) {}

    fn position(&self) -> NodeId {
        self.pursuer().position()
    }

    fn steps_taken(&self) -> u32 {
        self.pursuer().steps_taken()
    }

    fn successful_captures(&self) -> u32 {
        self.pursuer().successful_captures()
    }

    /// Current belief over the evader's position, for strategies that keep one.
    fn belief(&self) -> Option<&BeliefState> {
        None
    }

    /// Current particle population, for strategies that keep one.
    fn particles(&self) -> Option<&ParticleSet> {
        None
    }
}
