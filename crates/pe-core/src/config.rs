//! Top-level run configuration.

use crate::{CoreError, CoreResult};

/// Parameters of one multi-trial run.
///
/// The defaults reproduce the reference configuration: a 40-node ring with
/// 10 extra chords (degree ≤ 3), 100 trials per strategy, 1000 particles.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrialConfig {
    /// Number of graph nodes `N`; labels run `1..=N`.
    pub node_count: usize,

    /// Extra random edges added on top of the ring.
    pub chord_count: usize,

    /// Degree bound enforced while adding chords.
    pub max_degree: usize,

    /// Trials per strategy.
    pub trials: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// A trial that has not ended in capture after this many ticks is
    /// recorded as a failure.  Belief-driven strategies can wander for a
    /// long time; the cap keeps a run bounded.
    pub max_ticks_per_trial: u64,

    /// Particle population for the particle-filter strategy.
    pub particle_count: usize,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            node_count:          40,
            chord_count:         10,
            max_degree:          3,
            trials:              100,
            seed:                42,
            max_ticks_per_trial: 100_000,
            particle_count:      1_000,
        }
    }
}

impl TrialConfig {
    /// Reject configurations that cannot produce a playable game.
    pub fn validate(&self) -> CoreResult<()> {
        if self.node_count < 2 {
            return Err(CoreError::Config(format!(
                "node_count must be at least 2, got {}",
                self.node_count
            )));
        }
        if self.max_degree < 2 {
            return Err(CoreError::Config(format!(
                "max_degree must be at least 2 to hold a ring, got {}",
                self.max_degree
            )));
        }
        if self.trials == 0 {
            return Err(CoreError::Config("trials must be positive".into()));
        }
        if self.max_ticks_per_trial == 0 {
            return Err(CoreError::Config("max_ticks_per_trial must be positive".into()));
        }
        if self.particle_count == 0 {
            return Err(CoreError::Config("particle_count must be positive".into()));
        }
        Ok(())
    }
}
