//! `pe-output`: run output writers for the pursuit-evasion workspace.
//!
//! | Backend | Files created                    |
//! |---------|----------------------------------|
//! | CSV     | `trials.csv`, `summaries.csv`    |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`TrialOutputObserver`], which implements `pe_sim::TrialObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pe_output::{CsvWriter, TrialOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TrialOutputObserver::new(writer);
//! harness.run_all(&mut obs)?;
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrialOutputObserver;
pub use row::{StrategySummaryRow, TrialRow};
pub use writer::OutputWriter;
