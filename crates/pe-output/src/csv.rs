//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trials.csv`: `strategy,trial,steps,ticks,captured`
//! - `summaries.csv`: `strategy,trials,average_steps,capture_percent`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, StrategySummaryRow, TrialRow};

pub const TRIALS_FILE: &str = "trials.csv";
pub const SUMMARIES_FILE: &str = "summaries.csv";

/// Writes run output to two CSV files.
pub struct CsvWriter {
    trials:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut trials = Writer::from_path(dir.join(TRIALS_FILE))?;
        trials.write_record(["strategy", "trial", "steps", "ticks", "captured"])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record(["strategy", "trials", "average_steps", "capture_percent"])?;

        Ok(Self { trials, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trial(&mut self, row: &TrialRow) -> OutputResult<()> {
        self.trials.write_record(&[
            row.strategy.to_owned(),
            row.trial.to_string(),
            row.steps.to_string(),
            row.ticks.to_string(),
            (row.captured as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &StrategySummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.strategy.to_owned(),
            row.trials.to_string(),
            format!("{:.2}", row.average_steps),
            format!("{:.1}", row.capture_percent),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trials.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
