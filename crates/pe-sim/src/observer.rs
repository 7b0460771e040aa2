//! Harness observer trait for progress reporting and data collection.

use pe_core::{NodeId, Tick, TrialId};
use pe_strategy::{EvaderView, StrategyKind};

use crate::{StrategyStats, TrialOutcome};

/// Callbacks invoked by the [`Harness`][crate::Harness] at key points of a
/// run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: capture counter
///
/// ```rust,ignore
/// struct Captures(u32);
///
/// impl TrialObserver for Captures {
///     fn on_trial_end(&mut self, outcome: &TrialOutcome) {
///         self.0 += outcome.captured as u32;
///     }
/// }
/// ```
pub trait TrialObserver {
    /// Called once before the first trial of a strategy.
    fn on_strategy_start(&mut self, _strategy: StrategyKind) {}

    /// Called after both players are placed, before the first tick.
    fn on_trial_start(
        &mut self,
        _strategy: StrategyKind,
        _trial:    TrialId,
        _pursuer:  NodeId,
        _evader:   NodeId,
    ) {}

    /// Called after the pursuer's move in every tick that did not end in a
    /// capture before the move.
    fn on_tick(&mut self, _tick: Tick, _pursuer: NodeId, _evader: &EvaderView) {}

    fn on_trial_end(&mut self, _outcome: &TrialOutcome) {}

    /// Called once after the last trial of a strategy.
    fn on_strategy_end(&mut self, _stats: &StrategyStats) {}
}

/// A [`TrialObserver`] that does nothing.
pub struct NoopObserver;

impl TrialObserver for NoopObserver {}
