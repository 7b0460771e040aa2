//! Fluent builder for constructing a [`Harness`].

use pe_core::{SimRng, TrialConfig};
use pe_graph::{Topology, TopologyBuilder};
use pe_strategy::StrategyParams;
use tracing::debug;

use crate::{Harness, SimError, SimResult};

/// Fluent builder for [`Harness`].
///
/// # Inputs
///
/// | Method          | Default                                              |
/// |-----------------|------------------------------------------------------|
/// | `new(config)`   | required                                             |
/// | `.params(p)`    | `StrategyParams::default()`                          |
/// | `.topology(t)`  | ring of `config.node_count` + `config.chord_count` random chords |
///
/// `config.particle_count` overrides `params.particle_count`, so one config
/// file controls the whole run.
///
/// # Example
///
/// ```rust,ignore
/// let harness = HarnessBuilder::new(TrialConfig::default()).build()?;
/// let stats = harness.run_all(&mut NoopObserver)?;
/// ```
pub struct HarnessBuilder {
    config:   TrialConfig,
    params:   StrategyParams,
    topology: Option<Topology>,
}

impl HarnessBuilder {
    pub fn new(config: TrialConfig) -> Self {
        Self { config, params: StrategyParams::default(), topology: None }
    }

    pub fn params(mut self, params: StrategyParams) -> Self {
        self.params = params;
        self
    }

    /// Play on a caller-supplied graph instead of generating one.
    ///
    /// Its node count must equal `config.node_count`.
    pub fn topology(mut self, topology: Topology) -> Self {
        self.topology = Some(topology);
        self
    }

    /// Validate inputs, generate the topology if needed, and return a
    /// ready-to-run [`Harness`].
    pub fn build(self) -> SimResult<Harness> {
        self.config.validate()?;
        let params = StrategyParams { particle_count: self.config.particle_count, ..self.params };
        params.validate()?;

        let topology = match self.topology {
            Some(t) => {
                if t.node_count() != self.config.node_count {
                    return Err(SimError::Config(format!(
                        "topology has {} nodes but config.node_count is {}",
                        t.node_count(),
                        self.config.node_count
                    )));
                }
                t
            }
            None => {
                let mut rng = SimRng::new(self.config.seed);
                TopologyBuilder::ring(self.config.node_count)?
                    .with_max_degree(self.config.max_degree)
                    .add_random_chords(self.config.chord_count, &mut rng)?
                    .build()?
            }
        };
        debug!(
            nodes = topology.node_count(),
            edges = topology.edge_count(),
            max_degree = topology.max_degree(),
            "harness topology ready"
        );

        Ok(Harness { config: self.config, params, topology })
    }
}
