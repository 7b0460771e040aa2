use pe_core::CoreError;
use pe_graph::GraphError;
use pe_strategy::StrategyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("harness configuration error: {0}")]
    Config(String),

    #[error("invalid trial configuration: {0}")]
    Core(#[from] CoreError),

    #[error("topology error: {0}")]
    Graph(#[from] GraphError),

    #[error("strategy error: {0}")]
    Strategy(#[from] StrategyError),
}

pub type SimResult<T> = Result<T, SimError>;
