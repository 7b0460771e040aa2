//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::NodeId;

/// Errors raised by `pe-core` types (configuration validation, id ranges).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{node} is outside the graph's label range 1..={node_count}")]
    NodeOutOfRange { node: NodeId, node_count: usize },
}

/// Shorthand result type for `pe-core`.
pub type CoreResult<T> = Result<T, CoreError>;
