//! Integration tests for pe-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SUMMARIES_FILE, TRIALS_FILE};
    use crate::row::{StrategySummaryRow, TrialRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn trial_row(trial: u32, steps: u32, captured: bool) -> TrialRow {
        TrialRow { strategy: "greedy-neighbor", trial, steps, ticks: steps as u64 + 1, captured }
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(TRIALS_FILE).exists());
        assert!(dir.path().join(SUMMARIES_FILE).exists());
    }

    #[test]
    fn missing_directory_is_created() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("seed-42");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(TRIALS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir.path().join(TRIALS_FILE)),
            ["strategy", "trial", "steps", "ticks", "captured"]
        );
        assert_eq!(
            headers(&dir.path().join(SUMMARIES_FILE)),
            ["strategy", "trials", "average_steps", "capture_percent"]
        );
    }

    #[test]
    fn trial_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        for row in [trial_row(0, 7, true), trial_row(1, 3, true), trial_row(2, 50, false)] {
            w.write_trial(&row).unwrap();
        }
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TRIALS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "greedy-neighbor");
        assert_eq!(&rows[0][2], "7"); // steps
        assert_eq!(&rows[0][3], "8"); // ticks
        assert_eq!(&rows[0][4], "1"); // captured
        assert_eq!(&rows[2][1], "2");
        assert_eq!(&rows[2][4], "0");
    }

    #[test]
    fn summary_formatting() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&StrategySummaryRow {
            strategy:        "exact-pursuit",
            trials:          100,
            average_steps:   12.3456,
            capture_percent: 100.0,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "exact-pursuit");
        assert_eq!(&rows[0][1], "100");
        assert_eq!(&rows[0][2], "12.35");
        assert_eq!(&rows[0][3], "100.0");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use pe_core::TrialConfig;
    use pe_sim::HarnessBuilder;
    use pe_strategy::StrategyKind;

    use crate::csv::{SUMMARIES_FILE, TRIALS_FILE};
    use crate::{CsvWriter, OutputResult, OutputWriter, StrategySummaryRow, TrialOutputObserver, TrialRow};

    /// In-memory writer that fails on demand.
    #[derive(Default)]
    struct MemoryWriter {
        trials:    Vec<TrialRow>,
        summaries: Vec<StrategySummaryRow>,
        fail:      bool,
        finished:  u32,
    }

    impl OutputWriter for MemoryWriter {
        fn write_trial(&mut self, row: &TrialRow) -> OutputResult<()> {
            if self.fail {
                return Err(std::io::Error::other("disk full").into());
            }
            self.trials.push(*row);
            Ok(())
        }

        fn write_summary(&mut self, row: &StrategySummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    fn config(trials: u32) -> TrialConfig {
        TrialConfig { trials, max_ticks_per_trial: 2_000, ..TrialConfig::default() }
    }

    #[test]
    fn observer_writes_one_row_per_trial() {
        let h = HarnessBuilder::new(config(10)).build().unwrap();
        let mut obs = TrialOutputObserver::new(MemoryWriter::default());
        let stats = h
            .run_strategies(&[StrategyKind::GreedyNeighbor, StrategyKind::ExactPursuit], &mut obs)
            .unwrap();
        obs.finish().unwrap();

        let w = obs.into_writer();
        assert_eq!(w.trials.len(), 20);
        assert_eq!(w.summaries.len(), 2);
        assert_eq!(w.finished, 1);
        assert_eq!(w.summaries[0].strategy, "greedy-neighbor");
        assert_eq!(w.summaries[1].average_steps, stats[1].average_steps());
        assert!(w.trials[..10].iter().all(|r| r.strategy == "greedy-neighbor"));
    }

    #[test]
    fn first_error_is_reported_by_finish() {
        let h = HarnessBuilder::new(config(3)).build().unwrap();
        let mut obs = TrialOutputObserver::new(MemoryWriter { fail: true, ..MemoryWriter::default() });
        h.run_strategy(StrategyKind::GreedyNeighbor, &mut obs).unwrap();
        assert!(obs.finish().is_err());
        // The error was consumed.
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn csv_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let h = HarnessBuilder::new(config(5)).build().unwrap();
        let mut obs = TrialOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        h.run_strategy(StrategyKind::ExactPursuit, &mut obs).unwrap();
        obs.finish().unwrap();

        let trials = std::fs::read_to_string(dir.path().join(TRIALS_FILE)).unwrap();
        assert_eq!(trials.lines().count(), 6);
        let summaries = std::fs::read_to_string(dir.path().join(SUMMARIES_FILE)).unwrap();
        assert!(summaries.lines().nth(1).unwrap().starts_with("exact-pursuit,5,"));
    }
}
