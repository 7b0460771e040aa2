//! JSON run file: a `TrialConfig` and a `StrategyParams` block, both optional.
//!
//! ```json
//! {
//!   "trial":  { "trials": 500, "seed": 7 },
//!   "params": { "smoothing_weight": 0.6, "point_estimate": "mean" }
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use pe_core::TrialConfig;
use pe_strategy::StrategyParams;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunFile {
    pub trial:  TrialConfig,
    pub params: StrategyParams,
}

impl RunFile {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening run file {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing run file {}", path.display()))
    }
}
