//! Configuration for succession-diagram construction, attractor detection and control queries.
//!
//! Mirrors the shape of the teacher crate's flat configuration objects
//! (`ReachabilityConfig`, `SccConfig`, `AttractorConfig`): a plain `Clone`-able struct with
//! public fields and sensible defaults, optionally `serde`-serializable.

use crate::space::Space;
use std::collections::BTreeSet;

/// Which subtree of the succession diagram should be materialized.
///
/// See §4.G of the design notes: `Bfs`/`Dfs` expand the whole diagram (differing only in
/// traversal order), `MinimalOnly` stops as soon as every minimal trap space has been reached,
/// and `Target` restricts expansion to the ancestors of a chosen trap space (used by the
/// control planner). `Block` is not a separate traversal order; it is an orthogonal
/// optimization (see [`SdConfig::block_decomposition`]) that any of the above can use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpansionStrategy {
    /// Expand every node, visiting nodes breadth-first.
    Bfs,
    /// Expand every node, visiting nodes depth-first.
    Dfs,
    /// Expand only until every reachable minimal trap space has been materialized.
    MinimalOnly,
    /// Expand only nodes whose space contains `target` (plus one sibling per expansion step,
    /// which the control planner needs to measure alternative driver sets).
    Target(Space),
}

impl Default for ExpansionStrategy {
    fn default() -> Self {
        ExpansionStrategy::Bfs
    }
}

/// Top-level configuration object (§6 "Configuration object").
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SdConfig {
    /// Abort expansion once the diagram holds this many nodes (default `2^20`).
    pub max_sd_nodes: usize,
    /// Abort a symbolic operation once its BDD representation exceeds this many nodes
    /// (default `2^24`).
    pub max_bdd_size: usize,
    /// Candidate-generation cap per SD leaf (default `10^5`).
    pub max_candidates: usize,
    /// Cooperative-simulation step budget per candidate in pruning Phase 1 (default `1024`).
    pub simulation_steps: usize,
    /// Number of resampled retained sets to try per leaf before keeping the smallest
    /// candidate set (default `5`).
    pub retained_set_samples: usize,
    /// Enable the Petri-net-unfolding reachability oracle (default `true`).
    pub pint_reachability: bool,
    /// Enable the symbolic (BDD) reachability oracle (default `true`).
    pub symbolic_reachability: bool,
    /// Seed for the single shared PRNG used by the NFVS solver, the retained-set sampler and
    /// cooperative simulation (default `0`).
    pub rng_seed: u64,
    /// Which subset of the diagram to materialize (default [`ExpansionStrategy::Bfs`]).
    #[cfg_attr(feature = "serde", serde(skip))]
    pub expansion: ExpansionStrategy,
    /// Enable block decomposition during expansion (§4.G.5). Independent of `expansion`.
    pub block_decomposition: bool,
    /// Emit progress events via the `log` facade (default `false`, i.e. only `warn`/`error`
    /// are emitted regardless of this flag — this toggles the `info`/`debug` chatter).
    pub debug: bool,
}

impl Default for SdConfig {
    fn default() -> Self {
        SdConfig {
            max_sd_nodes: 1 << 20,
            max_bdd_size: 1 << 24,
            max_candidates: 100_000,
            simulation_steps: 1024,
            retained_set_samples: 5,
            pint_reachability: true,
            symbolic_reachability: true,
            rng_seed: 0,
            expansion: ExpansionStrategy::Bfs,
            block_decomposition: true,
            debug: false,
        }
    }
}

impl SdConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expansion(mut self, strategy: ExpansionStrategy) -> Self {
        self.expansion = strategy;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    pub fn with_block_decomposition(mut self, enabled: bool) -> Self {
        self.block_decomposition = enabled;
        self
    }

    pub fn without_unfolding_oracle(mut self) -> Self {
        self.pint_reachability = false;
        self
    }

    pub fn without_symbolic_oracle(mut self) -> Self {
        self.symbolic_reachability = false;
        self
    }
}

/// Which reachability oracles are consulted during candidate pruning (§4.F Phase 2, and the
/// "fixed three-way tagged variant" design note in §9).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OracleMode {
    Symbolic,
    Unfolding,
    Both,
}

impl OracleMode {
    pub fn from_config(config: &SdConfig) -> Option<OracleMode> {
        match (config.symbolic_reachability, config.pint_reachability) {
            (true, true) => Some(OracleMode::Both),
            (true, false) => Some(OracleMode::Symbolic),
            (false, true) => Some(OracleMode::Unfolding),
            (false, false) => None,
        }
    }
}

/// Restricts which variables a computation is allowed to touch. Reused by the Petri-net
/// restriction, the trap-space oracle and the candidate generator, in the same spirit as the
/// teacher's `ReachabilityConfig::variables`.
#[derive(Clone, Debug, Default)]
pub struct VariableScope(pub BTreeSet<biodivine_lib_param_bn::VariableId>);
