//! Pursuit graph representation and builder.
//!
//! # Data layout
//!
//! The undirected graph is stored in **Compressed Sparse Row (CSR)** form.
//! Every undirected edge `{a, b}` appears twice, once in each endpoint's row.
//! The neighbors of `NodeId n` occupy the slice:
//!
//! ```text
//! neighbors[ row_start[n.index()] .. row_start[n.index() + 1] ]
//! ```
//!
//! Within a row, neighbors keep the order in which their edges were added.
//! That order is the tie-break order of [`shortest_path`](crate::shortest_path)
//! and is stable for the lifetime of a `Topology`.
//!
//! A `Topology` is immutable once built and is shared by reference between
//! the evader and every strategy of a trial.

use pe_core::{NodeId, SimRng};
use tracing::debug;

use crate::{GraphError, GraphResult};

// ── Topology ──────────────────────────────────────────────────────────────────

/// Undirected, symmetric, degree-bounded graph over labels `1..=N`.
///
/// Do not construct directly; use [`TopologyBuilder`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Topology {
    /// CSR row pointer.  Length = `node_count + 1`.
    row_start: Vec<u32>,

    /// Flat neighbor array, grouped by source node.
    neighbors: Vec<NodeId>,
}

impl Topology {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.row_start.len() - 1
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.neighbors.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// `true` if `node` is a valid label of this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.is_within(self.node_count())
    }

    /// Reject labels outside `1..=N`.
    pub fn check(&self, node: NodeId) -> GraphResult<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange { node, node_count: self.node_count() })
        }
    }

    /// Iterator over every label `1..=N`.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        NodeId::all(self.node_count())
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbors of `node` in insertion order.
    ///
    /// An unknown label yields an empty slice rather than a panic, so a
    /// caller holding a stale id simply sees a node it cannot leave.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        if !self.contains(node) {
            return &[];
        }
        let start = self.row_start[node.index()] as usize;
        let end   = self.row_start[node.index() + 1] as usize;
        &self.neighbors[start..end]
    }

    /// Number of neighbors of `node` (0 for unknown labels).
    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// `true` if `a` and `b` are adjacent.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Largest degree over all nodes.
    pub fn max_degree(&self) -> usize {
        self.nodes().map(|n| self.degree(n)).max().unwrap_or(0)
    }
}

// ── TopologyBuilder ───────────────────────────────────────────────────────────

/// Construct a [`Topology`] incrementally, then call [`build`](Self::build).
///
/// Edges are undirected; adding `{a, b}` twice is a no-op.  The optional
/// degree bound is enforced at insertion time.
///
/// # Example
///
/// ```
/// use pe_core::{NodeId, SimRng};
/// use pe_graph::TopologyBuilder;
///
/// let mut rng = SimRng::new(42);
/// let topo = TopologyBuilder::ring(40)
///     .unwrap()
///     .with_max_degree(3)
///     .add_random_chords(10, &mut rng)
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(topo.node_count(), 40);
/// assert_eq!(topo.edge_count(), 50);
/// assert!(topo.max_degree() <= 3);
/// assert!(topo.has_edge(NodeId(40), NodeId(1)));
/// ```
#[derive(Clone, Debug)]
pub struct TopologyBuilder {
    adjacency:  Vec<Vec<NodeId>>,
    max_degree: Option<usize>,
}

impl TopologyBuilder {
    /// A builder for `node_count` isolated nodes labelled `1..=node_count`.
    pub fn new(node_count: usize) -> Self {
        Self { adjacency: vec![Vec::new(); node_count], max_degree: None }
    }

    /// A builder pre-populated with the cycle `1 - 2 - … - N - 1`.
    pub fn ring(node_count: usize) -> GraphResult<Self> {
        if node_count < 2 {
            return Err(GraphError::TooFewNodes { min: 2, got: node_count });
        }
        let mut b = Self::new(node_count);
        for i in 1..=node_count as u32 {
            let next = i % node_count as u32 + 1;
            b.add_edge(NodeId(i), NodeId(next))?;
        }
        Ok(b)
    }

    /// Enforce `degree ≤ max_degree` for all subsequent insertions.
    pub fn with_max_degree(mut self, max_degree: usize) -> Self {
        self.max_degree = Some(max_degree);
        self
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(node.index()).map_or(0, Vec::len)
    }

    fn check(&self, node: NodeId) -> GraphResult<()> {
        if node.is_within(self.node_count()) {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange { node, node_count: self.node_count() })
        }
    }

    /// Add the undirected edge `{a, b}`.
    ///
    /// Returns `Ok(false)` if the edge already existed.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<bool> {
        self.check(a)?;
        self.check(b)?;
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if self.adjacency[a.index()].contains(&b) {
            return Ok(false);
        }
        if let Some(max_degree) = self.max_degree {
            for node in [a, b] {
                if self.degree(node) >= max_degree {
                    return Err(GraphError::DegreeExceeded { node, max_degree });
                }
            }
        }
        self.adjacency[a.index()].push(b);
        self.adjacency[b.index()].push(a);
        Ok(true)
    }

    /// Add `count` random chords between distinct, non-adjacent nodes whose
    /// degree is still below the bound.
    ///
    /// Candidate pairs are drawn uniformly; rejected draws are retried up to
    /// a fixed budget so an unsatisfiable request fails instead of spinning.
    pub fn add_random_chords(mut self, count: usize, rng: &mut SimRng) -> GraphResult<Self> {
        let n = self.node_count();
        if n < 2 {
            return Err(GraphError::TooFewNodes { min: 2, got: n });
        }
        let budget = 1_000 * (count + 1);
        let mut placed = 0;
        let mut attempts = 0;

        while placed < count {
            if attempts >= budget {
                return Err(GraphError::ChordBudgetExhausted { requested: count, placed, attempts });
            }
            attempts += 1;

            let a = NodeId(rng.gen_range(1..=n as u32));
            let b = NodeId(rng.gen_range(1..=n as u32));
            if a == b || self.adjacency[a.index()].contains(&b) {
                continue;
            }
            if let Some(max_degree) = self.max_degree {
                if self.degree(a) >= max_degree || self.degree(b) >= max_degree {
                    continue;
                }
            }
            self.add_edge(a, b)?;
            placed += 1;
        }

        debug!(placed, attempts, "random chords added");
        Ok(self)
    }

    /// Consume the builder and produce a [`Topology`].
    ///
    /// Fails if any node is isolated: a pursuer or evader starting there
    /// could never move, which is a setup error rather than a game outcome.
    pub fn build(self) -> GraphResult<Topology> {
        if let Some(i) = self.adjacency.iter().position(Vec::is_empty) {
            return Err(GraphError::IsolatedNode(NodeId::from_index(i)));
        }
        Ok(self.build_unchecked())
    }

    /// Build without the isolated-node check.  Used by tests that need
    /// deliberately disconnected graphs.
    pub fn build_unchecked(self) -> Topology {
        let node_count = self.adjacency.len();
        let mut row_start = Vec::with_capacity(node_count + 1);
        let mut neighbors = Vec::with_capacity(self.adjacency.iter().map(Vec::len).sum());

        row_start.push(0u32);
        for row in &self.adjacency {
            neighbors.extend_from_slice(row);
            row_start.push(neighbors.len() as u32);
        }
        debug_assert_eq!(row_start.len(), node_count + 1);

        Topology { row_start, neighbors }
    }
}
