//! Plain data row types written by output backends.

use pe_sim::{StrategyStats, TrialOutcome};

/// One finished trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialRow {
    pub strategy: &'static str,
    pub trial:    u32,
    pub steps:    u32,
    pub ticks:    u64,
    pub captured: bool,
}

impl From<&TrialOutcome> for TrialRow {
    fn from(o: &TrialOutcome) -> Self {
        Self {
            strategy: o.strategy.name(),
            trial:    o.trial.0,
            steps:    o.steps,
            ticks:    o.ticks,
            captured: o.captured,
        }
    }
}

/// Aggregate line for one strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategySummaryRow {
    pub strategy:        &'static str,
    pub trials:          u32,
    pub average_steps:   f64,
    pub capture_percent: f64,
}

impl From<&StrategyStats> for StrategySummaryRow {
    fn from(s: &StrategyStats) -> Self {
        Self {
            strategy:        s.strategy.name(),
            trials:          s.trials,
            average_steps:   s.average_steps(),
            capture_percent: s.capture_percent(),
        }
    }
}
