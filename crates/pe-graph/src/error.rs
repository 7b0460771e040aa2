//! Graph-subsystem error type.

use thiserror::Error;

use pe_core::NodeId;

/// Errors produced by `pe-graph`.
///
/// `NoRoute` is the only variant a running trial ever sees, and strategies
/// treat it as "hold position".  Everything else is a construction-time
/// misconfiguration.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("{node} is outside the label range 1..={node_count}")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error("self-loop on {0} is not allowed")]
    SelfLoop(NodeId),

    #[error("adding an edge at {node} would exceed the degree bound {max_degree}")]
    DegreeExceeded { node: NodeId, max_degree: usize },

    #[error("{0} has no neighbors")]
    IsolatedNode(NodeId),

    #[error("placed only {placed} of {requested} chords after {attempts} attempts")]
    ChordBudgetExhausted {
        requested: usize,
        placed:    usize,
        attempts:  usize,
    },

    #[error("topology must contain at least {min} nodes, got {got}")]
    TooFewNodes { min: usize, got: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;
