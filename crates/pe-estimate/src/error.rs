use thiserror::Error;

use pe_core::NodeId;

/// Errors raised while updating an estimate.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// Normalization found no positive mass.  This is an invariant
    /// violation, not a game outcome.
    #[error("invariant violation: total probability mass is {total} during {during}")]
    ZeroMass { total: f64, during: &'static str },

    #[error("an estimate over zero nodes or zero particles is undefined")]
    EmptySupport,

    #[error("{what} has {got} entries, expected {expected}")]
    SizeMismatch {
        what:     &'static str,
        expected: usize,
        got:      usize,
    },

    #[error("{node} is outside the label range 1..={node_count}")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error("probability parameter {name} = {value} is outside [0, 1]")]
    InvalidProbability { name: &'static str, value: f64 },
}

pub type EstimateResult<T> = Result<T, EstimateError>;
