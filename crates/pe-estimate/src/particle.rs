//! Sampling-based evader estimate.
//!
//! A [`ParticleSet`] carries a fixed population of weighted hypotheses.  One
//! filter cycle is `predict → weight → resample`; the population size never
//! changes.

use pe_core::{AgentRng, NodeId};
use tracing::warn;

use crate::belief::BeliefState;
use crate::transition::TransitionModel;
use crate::{EstimateError, EstimateResult};

/// One hypothesis about the evader's position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: NodeId,
    pub weight:   f64,
}

impl Particle {
    /// Advance this particle one tick under `model`.
    #[inline]
    pub fn predict(&mut self, model: &TransitionModel, rng: &mut AgentRng) {
        self.position = model.sample_next(self.position, rng);
    }
}

/// How a population is collapsed to a single node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointEstimate {
    /// Rounded mean label, clamped into `1..=N`.
    Mean,
    /// Most populated node, ties broken at random.
    #[default]
    Mode,
}

/// What [`ParticleSet::resample`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResampleOutcome {
    /// Importance resampling over the normalized weights.
    Weighted,
    /// Every weight was zero; positions were resampled uniformly instead.
    Degenerate,
}

/// Fixed-size particle population over nodes `1..=N`.
#[derive(Clone, Debug)]
pub struct ParticleSet {
    particles:  Vec<Particle>,
    node_count: usize,
}

impl ParticleSet {
    /// `count` particles at uniformly random positions, each with weight 1.
    pub fn initialize(count: usize, node_count: usize, rng: &mut AgentRng) -> EstimateResult<Self> {
        if count == 0 || node_count == 0 {
            return Err(EstimateError::EmptySupport);
        }
        let particles = (0..count)
            .map(|_| Particle {
                position: NodeId(rng.gen_range(1..=node_count as u32)),
                weight:   1.0,
            })
            .collect();
        Ok(Self { particles, node_count })
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Move every particle one tick under `model`.
    pub fn predict(&mut self, model: &TransitionModel, rng: &mut AgentRng) -> EstimateResult<()> {
        if model.node_count() != self.node_count {
            return Err(EstimateError::SizeMismatch {
                what:     "transition model",
                expected: self.node_count,
                got:      model.node_count(),
            });
        }
        for particle in &mut self.particles {
            particle.predict(model, rng);
        }
        Ok(())
    }

    /// Set each weight to `likelihood(position)`.  Negative or non-finite
    /// likelihoods count as zero.
    pub fn weight<F>(&mut self, likelihood: F)
    where
        F: Fn(NodeId) -> f64,
    {
        for particle in &mut self.particles {
            let w = likelihood(particle.position);
            particle.weight = if w.is_finite() && w > 0.0 { w } else { 0.0 };
        }
    }

    /// Effective sample size `(Σw)² / Σw²`.  Zero when every weight is zero.
    pub fn ess(&self) -> f64 {
        let (sum, sum_sq) = self
            .particles
            .iter()
            .fold((0.0, 0.0), |(s, q), p| (s + p.weight, q + p.weight * p.weight));
        if sum_sq > 0.0 { sum * sum / sum_sq } else { 0.0 }
    }

    /// Multinomial resampling proportional to weight; weights reset to 1.
    ///
    /// A degenerate population (total weight zero or non-finite) is
    /// resampled uniformly from its current positions instead.
    pub fn resample(&mut self, rng: &mut AgentRng) -> ResampleOutcome {
        let mut cumulative = Vec::with_capacity(self.particles.len());
        let mut total = 0.0;
        for particle in &self.particles {
            total += particle.weight;
            cumulative.push(total);
        }

        let count = self.particles.len();
        let (next, outcome): (Vec<Particle>, _) = if total.is_finite() && total > 0.0 {
            let next = (0..count)
                .map(|_| {
                    let u = rng.random::<f64>() * total;
                    let i = cumulative.partition_point(|&c| c <= u).min(count - 1);
                    self.particles[i]
                })
                .collect();
            (next, ResampleOutcome::Weighted)
        } else {
            warn!(particles = count, total, "degenerate particle weights; resampling uniformly");
            let next = (0..count).map(|_| self.particles[rng.gen_range(0..count)]).collect();
            (next, ResampleOutcome::Degenerate)
        };

        self.particles = next;
        for particle in &mut self.particles {
            particle.weight = 1.0;
        }
        outcome
    }

    /// Move every particle to `node` with weight 1.
    pub fn collapse_to(&mut self, node: NodeId) -> EstimateResult<()> {
        if !node.is_within(self.node_count) {
            return Err(EstimateError::NodeOutOfRange { node, node_count: self.node_count });
        }
        for particle in &mut self.particles {
            *particle = Particle { position: node, weight: 1.0 };
        }
        Ok(())
    }

    /// Per-node particle counts.
    fn counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.node_count];
        for particle in &self.particles {
            if particle.position.is_within(self.node_count) {
                counts[particle.position.index()] += 1;
            }
        }
        counts
    }

    /// Population histogram as a belief over nodes.
    pub fn histogram(&self) -> EstimateResult<BeliefState> {
        BeliefState::from_weights(self.counts().into_iter().map(|c| c as f64).collect())
    }

    /// Collapse the population to a single node.
    pub fn estimate(&self, estimator: PointEstimate, rng: &mut AgentRng) -> NodeId {
        match estimator {
            PointEstimate::Mean => {
                let sum: f64 = self.particles.iter().map(|p| p.position.0 as f64).sum();
                let mean = (sum / self.particles.len() as f64).round();
                NodeId(mean.clamp(1.0, self.node_count as f64) as u32)
            }
            PointEstimate::Mode => {
                let counts = self.counts();
                let best = counts.iter().copied().max().unwrap_or(0);
                let modes: Vec<NodeId> = counts
                    .iter()
                    .enumerate()
                    .filter(|&(_, &c)| c == best)
                    .map(|(i, _)| NodeId::from_index(i))
                    .collect();
                rng.choose(&modes).copied().unwrap_or(NodeId::FIRST)
            }
        }
    }
}
