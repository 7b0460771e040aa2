//! `pe-sim`: evader and trial harness for the pursuit-evasion workspace.
//!
//! # Run structure
//!
//! ```text
//! for strategy in kinds:
//!   for trial in 0..config.trials:
//!     place pursuer and evader (seeded start stream)
//!     strategy = strategy.reset(pursuer_start)
//!     tick loop until capture or config.max_ticks_per_trial
//!   aggregate → StrategyStats
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pe_core::TrialConfig;
//! use pe_sim::{HarnessBuilder, NoopObserver};
//!
//! let harness = HarnessBuilder::new(TrialConfig::default()).build()?;
//! for stats in harness.run_all(&mut NoopObserver)? {
//!     println!("{}: {:.2}", stats.strategy, stats.average_steps());
//! }
//! ```

pub mod builder;
pub mod error;
pub mod evader;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::HarnessBuilder;
pub use error::{SimError, SimResult};
pub use evader::Evader;
pub use observer::{NoopObserver, TrialObserver};
pub use sim::Harness;
pub use stats::{StrategyStats, TrialOutcome};
