//! Tunable constants shared by the belief-driven strategies.

use pe_estimate::PointEstimate;

use crate::{StrategyError, StrategyResult};

/// Parameters of the estimator-backed strategies.
///
/// Strategies that keep no estimate ignore them.  The defaults are the
/// reference values the result tables were produced with.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StrategyParams {
    /// Weight kept by the observed node in [`BeliefState::diffuse`], in `(0, 1)`.
    ///
    /// [`BeliefState::diffuse`]: pe_estimate::BeliefState::diffuse
    pub diffusion_hit: f64,

    /// Self-transition probability of the transition-model prior.
    pub stay_probability: f64,

    /// Dirichlet concentration used when re-estimating transition rows.
    pub transition_pseudocount: f64,

    /// Share of the HMM belief kept when blending with the particle histogram.
    pub smoothing_weight: f64,

    pub particle_count: usize,

    /// How the particle population is reduced to a movement goal.
    pub point_estimate: PointEstimate,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            diffusion_hit:          0.8,
            stay_probability:       0.025,
            transition_pseudocount: 4.0,
            smoothing_weight:       0.5,
            particle_count:         1_000,
            point_estimate:         PointEstimate::Mode,
        }
    }
}

impl StrategyParams {
    pub fn validate(&self) -> StrategyResult<()> {
        // Either extreme lets a single diffuse step zero out a certain belief.
        if !(self.diffusion_hit > 0.0 && self.diffusion_hit < 1.0) {
            return Err(StrategyError::Config(format!(
                "diffusion_hit must lie strictly between 0 and 1, got {}",
                self.diffusion_hit
            )));
        }
        let unit = [
            ("stay_probability", self.stay_probability),
            ("smoothing_weight", self.smoothing_weight),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(StrategyError::Config(format!("{name} must lie in [0, 1], got {value}")));
            }
        }
        if !(self.transition_pseudocount >= 0.0) {
            return Err(StrategyError::Config(format!(
                "transition_pseudocount must be non-negative, got {}",
                self.transition_pseudocount
            )));
        }
        if self.particle_count == 0 {
            return Err(StrategyError::Config("particle_count must be positive".into()));
        }
        Ok(())
    }
}
