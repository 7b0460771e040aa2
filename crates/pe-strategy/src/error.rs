use thiserror::Error;

use pe_estimate::EstimateError;
use pe_graph::GraphError;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("estimate error: {0}")]
    Estimate(#[from] EstimateError),

    #[error("strategy configuration error: {0}")]
    Config(String),

    #[error("unknown strategy {0:?} (expected one of: {names})", names = crate::StrategyKind::names())]
    UnknownKind(String),
}

pub type StrategyResult<T> = Result<T, StrategyError>;
