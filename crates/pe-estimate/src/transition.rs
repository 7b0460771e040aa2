//! Row-stochastic evader movement model with online re-estimation.
//!
//! `rows[i * N + j]` is the probability that an evader at node `i + 1`
//! is at node `j + 1` one tick later.  Each row sums to 1.
//!
//! The model keeps the matrix it was built with as a prior.  Every observed
//! transition is counted, and the affected row is re-estimated as the
//! posterior mean of a Dirichlet whose concentration is
//! `pseudocount · prior_row`:
//!
//! ```text
//! row[j] = (count[j] + α · prior[j]) / (Σ count + α)
//! ```
//!
//! so a single sighting shifts the row without collapsing it.

use pe_core::{AgentRng, NodeId};
use pe_graph::Topology;

use crate::{EstimateError, EstimateResult};

/// Evader transition matrix plus observation counts.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionModel {
    node_count:  usize,
    rows:        Vec<f64>,
    prior:       Vec<f64>,
    counts:      Vec<u32>,
    pseudocount: f64,
}

impl TransitionModel {
    pub const DEFAULT_PSEUDOCOUNT: f64 = 4.0;

    /// Random-walk prior: stay with probability `stay`, otherwise move to a
    /// uniformly chosen neighbor.  Nodes without neighbors always stay.
    pub fn from_topology(topology: &Topology, stay: f64) -> EstimateResult<Self> {
        if !(0.0..=1.0).contains(&stay) {
            return Err(EstimateError::InvalidProbability { name: "stay", value: stay });
        }
        let n = topology.node_count();
        if n == 0 {
            return Err(EstimateError::EmptySupport);
        }
        let mut rows = vec![0.0; n * n];
        for node in topology.nodes() {
            let row = &mut rows[node.index() * n..(node.index() + 1) * n];
            let neighbors = topology.neighbors(node);
            if neighbors.is_empty() {
                row[node.index()] = 1.0;
                continue;
            }
            row[node.index()] = stay;
            let share = (1.0 - stay) / neighbors.len() as f64;
            for nb in neighbors {
                row[nb.index()] += share;
            }
        }
        Ok(Self::from_rows(n, rows))
    }

    /// Every destination equally likely from every node.
    pub fn uniform(node_count: usize) -> EstimateResult<Self> {
        if node_count == 0 {
            return Err(EstimateError::EmptySupport);
        }
        let p = 1.0 / node_count as f64;
        Ok(Self::from_rows(node_count, vec![p; node_count * node_count]))
    }

    fn from_rows(node_count: usize, rows: Vec<f64>) -> Self {
        Self {
            node_count,
            prior: rows.clone(),
            rows,
            counts: vec![0; node_count * node_count],
            pseudocount: Self::DEFAULT_PSEUDOCOUNT,
        }
    }

    /// Override the Dirichlet concentration used by [`record`](Self::record).
    /// Negative values are treated as zero (pure empirical frequencies).
    pub fn with_pseudocount(mut self, pseudocount: f64) -> Self {
        self.pseudocount = pseudocount.max(0.0);
        self
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn pseudocount(&self) -> f64 {
        self.pseudocount
    }

    /// Outgoing distribution of `from` (empty for unknown labels).
    pub fn row(&self, from: NodeId) -> &[f64] {
        if !from.is_within(self.node_count) {
            return &[];
        }
        let start = from.index() * self.node_count;
        &self.rows[start..start + self.node_count]
    }

    /// `P(next = to | current = from)`.
    pub fn prob(&self, from: NodeId, to: NodeId) -> f64 {
        if to.is_within(self.node_count) {
            self.row(from).get(to.index()).copied().unwrap_or(0.0)
        } else {
            0.0
        }
    }

    /// How many times `from → to` has been recorded.
    pub fn observations(&self, from: NodeId, to: NodeId) -> u32 {
        if from.is_within(self.node_count) && to.is_within(self.node_count) {
            self.counts[from.index() * self.node_count + to.index()]
        } else {
            0
        }
    }

    /// `true` if the prior gives `from → to` positive probability, i.e. the
    /// move is possible on the graph the model was built from.
    pub fn allows(&self, from: NodeId, to: NodeId) -> bool {
        from.is_within(self.node_count)
            && to.is_within(self.node_count)
            && self.prior[from.index() * self.node_count + to.index()] > 0.0
    }

    /// `true` if every row sums to 1 within `tolerance`.
    pub fn is_stochastic(&self, tolerance: f64) -> bool {
        self.rows
            .chunks(self.node_count)
            .all(|row| (row.iter().sum::<f64>() - 1.0).abs() <= tolerance)
    }

    // ── Learning ──────────────────────────────────────────────────────────

    /// Count one observed transition and re-estimate the row of `from`.
    pub fn record(&mut self, from: NodeId, to: NodeId) -> EstimateResult<()> {
        self.check(from)?;
        self.check(to)?;
        let n = self.node_count;
        let start = from.index() * n;
        self.counts[start + to.index()] += 1;

        let counts = &self.counts[start..start + n];
        let prior = &self.prior[start..start + n];
        let total: f64 = counts.iter().map(|&c| c as f64).sum::<f64>() + self.pseudocount;
        if !(total > 0.0) {
            return Err(EstimateError::ZeroMass { total, during: "record" });
        }
        for j in 0..n {
            self.rows[start + j] = (counts[j] as f64 + self.pseudocount * prior[j]) / total;
        }
        Ok(())
    }

    // ── Sampling ──────────────────────────────────────────────────────────

    /// Draw the next position from `from`'s row by inverse-CDF sampling.
    ///
    /// Rounding slack (a uniform draw above the row's cumulative sum) falls
    /// through to the last positive entry.  A row with no mass keeps the
    /// particle where it is.
    pub fn sample_next(&self, from: NodeId, rng: &mut AgentRng) -> NodeId {
        let row = self.row(from);
        let u: f64 = rng.random();
        let mut cumulative = 0.0;
        let mut last_positive = None;
        for (j, &p) in row.iter().enumerate() {
            if p <= 0.0 {
                continue;
            }
            cumulative += p;
            last_positive = Some(j);
            if u < cumulative {
                return NodeId::from_index(j);
            }
        }
        last_positive.map_or(from, NodeId::from_index)
    }

    fn check(&self, node: NodeId) -> EstimateResult<()> {
        if node.is_within(self.node_count) {
            Ok(())
        } else {
            Err(EstimateError::NodeOutOfRange { node, node_count: self.node_count })
        }
    }
}
