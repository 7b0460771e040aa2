//! `TrialOutputObserver<W>`: bridges `TrialObserver` to an `OutputWriter`.

use pe_sim::{StrategyStats, TrialObserver, TrialOutcome};

use crate::row::{StrategySummaryRow, TrialRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`TrialObserver`] that writes one row per trial and one summary row
/// per strategy to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run returns, call
/// [`finish`][Self::finish] to flush and collect the first error.
pub struct TrialOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TrialOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer and report the first error seen during the run.
    pub fn finish(&mut self) -> crate::OutputResult<()> {
        let result = self.writer.finish();
        self.store_err(result);
        match self.take_error() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TrialObserver for TrialOutputObserver<W> {
    fn on_trial_end(&mut self, outcome: &TrialOutcome) {
        let result = self.writer.write_trial(&TrialRow::from(outcome));
        self.store_err(result);
    }

    fn on_strategy_end(&mut self, stats: &StrategyStats) {
        let result = self.writer.write_summary(&StrategySummaryRow::from(stats));
        self.store_err(result);
    }
}
