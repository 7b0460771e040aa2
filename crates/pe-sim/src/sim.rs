//! The `Harness` struct and its trial loop.

use pe_core::{AgentId, AgentRng, NodeId, SimRng, Tick, TrialConfig, TrialId};
use pe_graph::Topology;
use pe_strategy::{PursuitContext, PursuitStrategy, StrategyKind, StrategyParams};
use tracing::{debug, info, info_span};

use crate::{Evader, SimResult, StrategyStats, TrialObserver, TrialOutcome};

/// Offset of the start-position stream derived from the master seed.
const START_STREAM: u64 = 1;

/// Runs pursuit trials on one fixed topology.
///
/// # Tick protocol
///
/// ```text
/// loop until capture or max_ticks_per_trial:
///   ① evader takes one random-walk step
///   ② capture check           → captured, strategy does not move
///   ③ strategy.pursue(ctx)    (exactly one counted step)
///   ④ capture check           → captured
/// ```
///
/// Checking on both sides of the pursuer's move means neither player can
/// slip past the other on an edge-parity technicality.
///
/// # Determinism
///
/// Start positions come from a stream derived from the master seed that is
/// rebuilt for every strategy, so trial `k` places the players identically
/// for all strategies.  The evader's walk uses `AgentId::EVADER` and the
/// strategy uses its catalogue slot; both are reseeded per trial.
///
/// Create via [`HarnessBuilder`][crate::HarnessBuilder].
pub struct Harness {
    pub config:   TrialConfig,
    pub params:   StrategyParams,
    pub topology: Topology,
}

impl Harness {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run every strategy in catalogue order.
    pub fn run_all<O: TrialObserver>(&self, observer: &mut O) -> SimResult<Vec<StrategyStats>> {
        self.run_strategies(&StrategyKind::ALL, observer)
    }

    /// Run the given strategies in order.
    pub fn run_strategies<O: TrialObserver>(
        &self,
        kinds:    &[StrategyKind],
        observer: &mut O,
    ) -> SimResult<Vec<StrategyStats>> {
        kinds.iter().map(|&kind| self.run_strategy(kind, observer)).collect()
    }

    /// Run `config.trials` trials of one strategy, resetting it before each.
    pub fn run_strategy<O: TrialObserver>(
        &self,
        kind:     StrategyKind,
        observer: &mut O,
    ) -> SimResult<StrategyStats> {
        let _span = info_span!("strategy", %kind).entered();
        let seed = self.config.seed;
        let slot = strategy_slot(kind);
        let n = self.topology.node_count() as u32;

        let mut starts = SimRng::new(seed).child(START_STREAM);
        let mut strategy: Option<Box<dyn PursuitStrategy>> = None;
        let mut stats = StrategyStats::new(kind);

        observer.on_strategy_start(kind);
        for t in 0..self.config.trials {
            let trial = TrialId(t);
            let pursuer_start = NodeId(starts.gen_range(1..=n));
            let evader_start = NodeId(starts.gen_range(1..=n));

            let mut rng = AgentRng::for_trial(seed, slot, trial);
            let fresh = match &strategy {
                Some(previous) => previous.reset(pursuer_start, &self.topology, &mut rng)?,
                None => kind.build(pursuer_start, &self.topology, &self.params, &mut rng)?,
            };
            let current = strategy.insert(fresh);
            let mut evader = Evader::new(evader_start, AgentRng::for_trial(seed, AgentId::EVADER, trial));

            let outcome = self.run_trial(trial, current.as_mut(), &mut evader, &mut rng, observer)?;
            stats.record(&outcome);
        }
        observer.on_strategy_end(&stats);

        info!(
            trials = stats.trials,
            average_steps = stats.average_steps(),
            capture_percent = stats.capture_percent(),
            "strategy finished"
        );
        Ok(stats)
    }

    /// Play one trial to capture or to the tick cap.
    ///
    /// `strategy` and `evader` must already be placed; `rng` is the
    /// strategy's stream for this trial.
    pub fn run_trial<O: TrialObserver>(
        &self,
        trial:    TrialId,
        strategy: &mut dyn PursuitStrategy,
        evader:   &mut Evader,
        rng:      &mut AgentRng,
        observer: &mut O,
    ) -> SimResult<TrialOutcome> {
        let kind = strategy.kind();
        let pursuer_start = strategy.position();
        let evader_start = evader.position();
        observer.on_trial_start(kind, trial, pursuer_start, evader_start);

        let mut tick = Tick::ZERO;
        let captured = loop {
            if tick.0 >= self.config.max_ticks_per_trial {
                break false;
            }
            tick = tick.next();

            evader.step(&self.topology);
            let view = evader.view();
            if strategy.capture(&view) {
                break true;
            }

            let ctx = PursuitContext::new(tick, &self.topology, view);
            strategy.pursue(&ctx, rng)?;
            observer.on_tick(tick, strategy.position(), &view);
            if strategy.capture(&view) {
                break true;
            }
        };

        let outcome = TrialOutcome {
            strategy: kind,
            trial,
            steps: strategy.steps_taken(),
            ticks: tick.0,
            captured,
            pursuer_start,
            evader_start,
        };
        if captured {
            debug!(%trial, steps = outcome.steps, ticks = outcome.ticks, "captured");
        } else {
            debug!(%trial, ticks = outcome.ticks, "tick cap reached without capture");
        }
        observer.on_trial_end(&outcome);
        Ok(outcome)
    }
}

/// RNG slot of a strategy: its position in the catalogue.
fn strategy_slot(kind: StrategyKind) -> AgentId {
    let index = StrategyKind::ALL.iter().position(|&k| k == kind).unwrap_or(0);
    AgentId(index as u32)
}
