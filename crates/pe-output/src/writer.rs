//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, StrategySummaryRow, TrialRow};

/// Sink for run results.
///
/// Driven by [`TrialOutputObserver`][crate::TrialOutputObserver], which
/// stores the first error for retrieval with
/// [`take_error`][crate::TrialOutputObserver::take_error].
pub trait OutputWriter {
    fn write_trial(&mut self, row: &TrialRow) -> OutputResult<()>;

    fn write_summary(&mut self, row: &StrategySummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
