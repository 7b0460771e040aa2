//! Catalogue of the built-in strategies and the factory that builds them.

use std::fmt;
use std::str::FromStr;

use pe_core::{AgentRng, NodeId};
use pe_graph::Topology;

use crate::{
    BeliefCoverage, BeliefDiffusion, BeliefSeeking, ExactPursuit, GreedyNeighbor, ParticleHmm,
    PursuitStrategy, SingleProbe, StationaryWait, StrategyError, StrategyParams, StrategyResult,
};

/// The eight pursuit strategies, in the order results are reported.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StrategyKind {
    StationaryWait,
    GreedyNeighbor,
    ExactPursuit,
    SingleProbe,
    BeliefSeeking,
    BeliefCoverage,
    BeliefDiffusion,
    ParticleHmm,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 8] = [
        StrategyKind::StationaryWait,
        StrategyKind::GreedyNeighbor,
        StrategyKind::ExactPursuit,
        StrategyKind::SingleProbe,
        StrategyKind::BeliefSeeking,
        StrategyKind::BeliefCoverage,
        StrategyKind::BeliefDiffusion,
        StrategyKind::ParticleHmm,
    ];

    /// Stable kebab-case name used on the command line and in output files.
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::StationaryWait  => "stationary-wait",
            StrategyKind::GreedyNeighbor  => "greedy-neighbor",
            StrategyKind::ExactPursuit    => "exact-pursuit",
            StrategyKind::SingleProbe     => "single-probe",
            StrategyKind::BeliefSeeking   => "belief-seeking",
            StrategyKind::BeliefCoverage  => "belief-coverage",
            StrategyKind::BeliefDiffusion => "belief-diffusion",
            StrategyKind::ParticleHmm     => "particle-hmm",
        }
    }

    /// Comma-separated list of every name, for error messages.
    pub fn names() -> String {
        Self::ALL.map(Self::name).join(", ")
    }

    /// Build a fresh strategy of this kind at `start`.
    pub fn build(
        self,
        start:    NodeId,
        topology: &Topology,
        params:   &StrategyParams,
        rng:      &mut AgentRng,
    ) -> StrategyResult<Box<dyn PursuitStrategy>> {
        topology.check(start)?;
        params.validate()?;
        Ok(match self {
            StrategyKind::StationaryWait  => Box::new(StationaryWait::new(start)),
            StrategyKind::GreedyNeighbor  => Box::new(GreedyNeighbor::new(start)),
            StrategyKind::ExactPursuit    => Box::new(ExactPursuit::new(start)),
            StrategyKind::SingleProbe     => Box::new(SingleProbe::new(start, topology)?),
            StrategyKind::BeliefSeeking   => Box::new(BeliefSeeking::new(start, topology)?),
            StrategyKind::BeliefCoverage  => Box::new(BeliefCoverage::new(start, topology)?),
            StrategyKind::BeliefDiffusion => {
                Box::new(BeliefDiffusion::new(start, topology, params)?)
            }
            StrategyKind::ParticleHmm => Box::new(ParticleHmm::new(start, topology, params, rng)?),
        })
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = StrategyError;

    /// Accepts the kebab-case name, case-insensitively, with `_` allowed in
    /// place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| StrategyError::UnknownKind(s.to_owned()))
    }
}
