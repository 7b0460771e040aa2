//! Discrete belief state over evader location.
//!
//! A `BeliefState` holds one probability per graph node, indexed by
//! [`NodeId::index`].  Every mutating operation ends with a renormalization,
//! including the negative-observation update, which redistributes the
//! examined node's mass to its neighbors before renormalizing.

use pe_core::{AgentRng, NodeId};
use pe_graph::Topology;

use crate::transition::TransitionModel;
use crate::{EstimateError, EstimateResult};

/// Probability distribution over node occupancy.
#[derive(Clone, Debug, PartialEq)]
pub struct BeliefState {
    probs: Vec<f64>,
}

impl BeliefState {
    // ── Construction ──────────────────────────────────────────────────────

    /// Every node equally likely (`1 / N` each).
    pub fn uniform(node_count: usize) -> EstimateResult<Self> {
        if node_count == 0 {
            return Err(EstimateError::EmptySupport);
        }
        Ok(Self { probs: vec![1.0 / node_count as f64; node_count] })
    }

    /// All mass on `node`.
    pub fn certain(node_count: usize, node: NodeId) -> EstimateResult<Self> {
        let mut belief = Self::uniform(node_count)?;
        belief.collapse_to(node)?;
        Ok(belief)
    }

    /// Normalize arbitrary non-negative weights into a belief.
    ///
    /// Negative and non-finite weights count as zero.
    pub fn from_weights(weights: Vec<f64>) -> EstimateResult<Self> {
        if weights.is_empty() {
            return Err(EstimateError::EmptySupport);
        }
        let mut belief = Self {
            probs: weights
                .into_iter()
                .map(|w| if w.is_finite() && w > 0.0 { w } else { 0.0 })
                .collect(),
        };
        belief.normalize("from_weights")?;
        Ok(belief)
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Probability that the evader is at `node` (0 for unknown labels).
    pub fn prob(&self, node: NodeId) -> f64 {
        if node.is_within(self.len()) { self.probs[node.index()] } else { 0.0 }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.probs
    }

    pub fn total(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// `true` if the entries sum to 1 within `tolerance` and none is negative.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total() - 1.0).abs() <= tolerance && self.probs.iter().all(|&p| p >= 0.0)
    }

    /// Largest single-node probability.
    pub fn max_prob(&self) -> f64 {
        self.probs.iter().copied().fold(0.0, f64::max)
    }

    /// Shannon entropy in nats.  `0` means certainty; `ln N` means uniform.
    pub fn entropy(&self) -> f64 {
        -self
            .probs
            .iter()
            .filter(|&&p| p > 0.0)
            .map(|&p| p * p.ln())
            .sum::<f64>()
    }

    /// All nodes sharing the maximum probability, in label order.
    pub fn argmax_nodes(&self) -> Vec<NodeId> {
        let max = self.max_prob();
        self.probs
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p == max)
            .map(|(i, _)| NodeId::from_index(i))
            .collect()
    }

    /// A maximum-belief node, chosen uniformly among co-maximal nodes.
    pub fn argmax(&self, rng: &mut AgentRng) -> NodeId {
        let best = self.argmax_nodes();
        rng.choose(&best).copied().unwrap_or(NodeId::FIRST)
    }

    // ── Updates ───────────────────────────────────────────────────────────

    /// Put all mass on `node`: the absorbing "found" state.
    pub fn collapse_to(&mut self, node: NodeId) -> EstimateResult<()> {
        self.check(node)?;
        self.probs.fill(0.0);
        self.probs[node.index()] = 1.0;
        Ok(())
    }

    /// Reweight toward an observed or predicted position: `node` is scaled
    /// by `hit`, every other node by `(1 - hit) / (N - 1)`.
    pub fn diffuse(&mut self, node: NodeId, hit: f64) -> EstimateResult<()> {
        self.check(node)?;
        if !(0.0..=1.0).contains(&hit) {
            return Err(EstimateError::InvalidProbability { name: "hit", value: hit });
        }
        let n = self.len();
        if n == 1 {
            return Ok(());
        }
        let miss = (1.0 - hit) / (n - 1) as f64;
        for (i, p) in self.probs.iter_mut().enumerate() {
            *p *= if i == node.index() { hit } else { miss };
        }
        self.normalize("diffuse")
    }

    /// Bayesian update after examining `node`.
    ///
    /// `found` collapses to certainty.  Otherwise the examined node's mass
    /// is removed and handed to its neighbors in proportion to
    /// `1 / degree(neighbor)`, then the whole distribution is renormalized.
    pub fn condition_on_examination(
        &mut self,
        topology: &Topology,
        node:     NodeId,
        found:    bool,
    ) -> EstimateResult<()> {
        self.check_topology(topology)?;
        if found {
            return self.collapse_to(node);
        }
        self.check(node)?;

        let mass = std::mem::replace(&mut self.probs[node.index()], 0.0);
        let neighbors = topology.neighbors(node);
        let inverse_degree_sum: f64 = neighbors
            .iter()
            .map(|&nb| 1.0 / topology.degree(nb) as f64)
            .sum();

        if mass > 0.0 && inverse_degree_sum > 0.0 {
            for &nb in neighbors {
                let share = (1.0 / topology.degree(nb) as f64) / inverse_degree_sum;
                self.probs[nb.index()] += mass * share;
            }
        }
        self.normalize("condition_on_examination")
    }

    /// One step of the evader's random walk: each node's mass is split
    /// evenly over its neighbors.  A node with no neighbors keeps its mass.
    pub fn propagate(&mut self, topology: &Topology) -> EstimateResult<()> {
        self.check_topology(topology)?;
        let mut next = vec![0.0; self.len()];
        for (i, &p) in self.probs.iter().enumerate() {
            if p == 0.0 {
                continue;
            }
            let neighbors = topology.neighbors(NodeId::from_index(i));
            if neighbors.is_empty() {
                next[i] += p;
                continue;
            }
            let share = p / neighbors.len() as f64;
            for &nb in neighbors {
                next[nb.index()] += share;
            }
        }
        self.probs = next;
        self.normalize("propagate")
    }

    /// HMM forward prediction: `p' = p · T`.
    pub fn propagate_with(&mut self, model: &TransitionModel) -> EstimateResult<()> {
        if model.node_count() != self.len() {
            return Err(EstimateError::SizeMismatch {
                what:     "transition model",
                expected: self.len(),
                got:      model.node_count(),
            });
        }
        let mut next = vec![0.0; self.len()];
        for (i, &p) in self.probs.iter().enumerate() {
            if p == 0.0 {
                continue;
            }
            for (j, &t) in model.row(NodeId::from_index(i)).iter().enumerate() {
                next[j] += p * t;
            }
        }
        self.probs = next;
        self.normalize("propagate_with")
    }

    /// Convex combination `weight · self + (1 - weight) · other`.
    pub fn blend(&mut self, other: &BeliefState, weight: f64) -> EstimateResult<()> {
        if other.len() != self.len() {
            return Err(EstimateError::SizeMismatch {
                what:     "blended belief",
                expected: self.len(),
                got:      other.len(),
            });
        }
        if !(0.0..=1.0).contains(&weight) {
            return Err(EstimateError::InvalidProbability { name: "weight", value: weight });
        }
        for (p, &q) in self.probs.iter_mut().zip(&other.probs) {
            *p = weight * *p + (1.0 - weight) * q;
        }
        self.normalize("blend")
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check(&self, node: NodeId) -> EstimateResult<()> {
        if node.is_within(self.len()) {
            Ok(())
        } else {
            Err(EstimateError::NodeOutOfRange { node, node_count: self.len() })
        }
    }

    fn check_topology(&self, topology: &Topology) -> EstimateResult<()> {
        if topology.node_count() == self.len() {
            Ok(())
        } else {
            Err(EstimateError::SizeMismatch {
                what:     "topology",
                expected: self.len(),
                got:      topology.node_count(),
            })
        }
    }

    fn normalize(&mut self, during: &'static str) -> EstimateResult<()> {
        let total = self.total();
        if !(total.is_finite() && total > 0.0) {
            return Err(EstimateError::ZeroMass { total, during });
        }
        for p in &mut self.probs {
            *p /= total;
        }
        Ok(())
    }
}
