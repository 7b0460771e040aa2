//! Routing trait and breadth-first shortest-path implementation.
//!
//! # Pluggability
//!
//! Strategies that need a path call through the [`Router`] trait or the free
//! functions below.  The graph is unweighted, so breadth-first search gives
//! minimum-hop paths; the default [`BfsRouter`] is all the game needs.
//!
//! # No caching
//!
//! The pursuit goal (the evader) moves every tick, so every query runs a
//! fresh search.  Nothing here keeps state between calls.

use std::collections::VecDeque;

use pe_core::{AgentRng, NodeId};

use crate::topology::Topology;
use crate::{GraphError, GraphResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the ordered node sequence from source to
/// destination, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub nodes: Vec<NodeId>,
}

impl Route {
    /// Number of edges on the route.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// The node to step onto next, or `None` if already at the destination.
    pub fn next_hop(&self) -> Option<NodeId> {
        self.nodes.get(1).copied()
    }

    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
pub trait Router: Send + Sync {
    /// Compute a minimum-hop route from `from` to `to`.
    ///
    /// `from == to` yields a single-node route.  An unreachable destination
    /// yields [`GraphError::NoRoute`].
    fn route(&self, topology: &Topology, from: NodeId, to: NodeId) -> GraphResult<Route>;
}

// ── BfsRouter ─────────────────────────────────────────────────────────────────

/// Breadth-first search over the topology.
///
/// Neighbors are expanded in insertion order, so among several
/// minimum-hop paths the one through earlier-inserted edges wins.
/// Strategies that want unbiased tie-breaking use [`next_hop`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsRouter;

impl Router for BfsRouter {
    fn route(&self, topology: &Topology, from: NodeId, to: NodeId) -> GraphResult<Route> {
        topology.check(from)?;
        topology.check(to)?;
        bfs(topology, from, to)
    }
}

/// Minimum-hop path `start..=goal`, or an empty vector if `goal` is
/// unreachable (or either label is unknown).
///
/// Callers treat the empty result as "hold position".
pub fn shortest_path(topology: &Topology, start: NodeId, goal: NodeId) -> Vec<NodeId> {
    BfsRouter
        .route(topology, start, goal)
        .map(|r| r.nodes)
        .unwrap_or_default()
}

/// Hop distance from `source` to every node; `None` marks unreachable nodes.
///
/// Indexed by [`NodeId::index`].
pub fn distances_from(topology: &Topology, source: NodeId) -> Vec<Option<u32>> {
    let mut dist = vec![None; topology.node_count()];
    if !topology.contains(source) {
        return dist;
    }
    dist[source.index()] = Some(0);

    let mut queue = VecDeque::from([source]);
    while let Some(node) = queue.pop_front() {
        let d = dist[node.index()].unwrap_or(0);
        for &neighbor in topology.neighbors(node) {
            if dist[neighbor.index()].is_none() {
                dist[neighbor.index()] = Some(d + 1);
                queue.push_back(neighbor);
            }
        }
    }
    dist
}

/// First hop from `from` toward `to`, chosen uniformly at random among all
/// neighbors of `from` that start *some* minimum-hop path.
///
/// Returns `None` when `from == to`, when `to` is unreachable, or when either
/// label is unknown.
pub fn next_hop(
    topology: &Topology,
    from:     NodeId,
    to:       NodeId,
    rng:      &mut AgentRng,
) -> Option<NodeId> {
    if from == to || !topology.contains(from) || !topology.contains(to) {
        return None;
    }
    // Distances measured from the goal: a neighbor is on a shortest path iff
    // it is exactly one hop closer to the goal than `from` is.
    let dist = distances_from(topology, to);
    let here = dist[from.index()]?;
    let candidates: Vec<NodeId> = topology
        .neighbors(from)
        .iter()
        .copied()
        .filter(|n| dist[n.index()] == Some(here - 1))
        .collect();
    rng.choose(&candidates).copied()
}

// ── BFS internals ─────────────────────────────────────────────────────────────

fn bfs(topology: &Topology, from: NodeId, to: NodeId) -> GraphResult<Route> {
    if from == to {
        return Ok(Route { nodes: vec![from] });
    }

    let n = topology.node_count();
    // parent[v] = node that first reached v; None for unreached nodes.
    let mut parent: Vec<Option<NodeId>> = vec![None; n];
    let mut visited = vec![false; n];
    visited[from.index()] = true;

    let mut queue = VecDeque::from([from]);
    while let Some(node) = queue.pop_front() {
        if node == to {
            return Ok(reconstruct(&parent, from, to));
        }
        for &neighbor in topology.neighbors(node) {
            if !visited[neighbor.index()] {
                visited[neighbor.index()] = true;
                parent[neighbor.index()] = Some(node);
                queue.push_back(neighbor);
            }
        }
    }

    Err(GraphError::NoRoute { from, to })
}

fn reconstruct(parent: &[Option<NodeId>], from: NodeId, to: NodeId) -> Route {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        match parent[cur.index()] {
            Some(p) => {
                nodes.push(p);
                cur = p;
            }
            None => break,
        }
    }
    nodes.reverse();
    Route { nodes }
}
