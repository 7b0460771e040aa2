//! Per-trial outcomes and their per-strategy aggregate.

use pe_core::{NodeId, TrialId};
use pe_strategy::StrategyKind;

/// Result of one trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrialOutcome {
    pub strategy:      StrategyKind,
    pub trial:         TrialId,
    /// Steps counted by the strategy (one per `pursue` call).
    pub steps:         u32,
    /// Ticks the trial lasted.
    pub ticks:         u64,
    /// `false` only when the tick cap was reached.
    pub captured:      bool,
    pub pursuer_start: NodeId,
    pub evader_start:  NodeId,
}

/// Aggregate over all trials of one strategy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrategyStats {
    pub strategy:    StrategyKind,
    pub trials:      u32,
    pub captures:    u32,
    pub total_steps: u64,
    pub total_ticks: u64,
}

impl StrategyStats {
    pub fn new(strategy: StrategyKind) -> Self {
        Self { strategy, trials: 0, captures: 0, total_steps: 0, total_ticks: 0 }
    }

    pub fn record(&mut self, outcome: &TrialOutcome) {
        self.trials += 1;
        self.captures += outcome.captured as u32;
        self.total_steps += outcome.steps as u64;
        self.total_ticks += outcome.ticks;
    }

    /// Mean steps per trial, capped trials included.  `0.0` before any trial.
    pub fn average_steps(&self) -> f64 {
        if self.trials == 0 { 0.0 } else { self.total_steps as f64 / self.trials as f64 }
    }

    /// Fraction of trials that ended in capture, in `[0, 1]`.
    pub fn capture_rate(&self) -> f64 {
        if self.trials == 0 { 0.0 } else { self.captures as f64 / self.trials as f64 }
    }

    pub fn capture_percent(&self) -> f64 {
        self.capture_rate() * 100.0
    }
}
