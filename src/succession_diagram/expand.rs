//! Expands a single node: computes its candidate child trap spaces and its own pruned
//! attractor-seed states (§4.G step).

use crate::candidates::generate_candidates;
use crate::config::SdConfig;
use crate::error::SdError;
use crate::influence_graph::InfluenceGraph;
use crate::pruning::prune;
use crate::space::Space;
use crate::succession_diagram::block;
use crate::trap_space::{TrapSpaceOracle, TrapSpaceQuery};
use biodivine_lib_param_bn::BooleanNetwork;
use biodivine_lib_param_bn::VariableId;
use biodivine_lib_param_bn::symbolic_async_graph::{GraphColoredVertices, SymbolicAsyncGraph};
use std::collections::HashSet;

pub struct ExpansionResult {
    pub child_spaces: Vec<Space>,
    pub attractor_seeds: Vec<GraphColoredVertices>,
}

/// Computes one node's children and its own attractor seeds. `space` is assumed already
/// percolated (see [`crate::space::percolate`]).
pub fn expand_node(
    graph: &SymbolicAsyncGraph,
    bn: &BooleanNetwork,
    influence: &InfluenceGraph,
    oracle: &dyn TrapSpaceOracle,
    config: &SdConfig,
    space: &Space,
) -> Result<ExpansionResult, SdError> {
    let scope: HashSet<VariableId> = space.free_variables(graph).into_iter().collect();

    let child_spaces = if scope.is_empty() {
        Vec::new()
    } else if config.block_decomposition {
        expand_block_decomposed(graph, influence, oracle, config, space, &scope)?
    } else {
        let query = TrapSpaceQuery::minimal_within(space.clone());
        let found = oracle.solve(graph, query, config.max_sd_nodes)?;
        found.into_iter().filter(|s| s != space).collect()
    };

    let candidates = generate_candidates(graph, influence, space, oracle, config)?;
    let attractor_seeds = prune(graph, bn, space, candidates, &child_spaces, config)?;

    Ok(ExpansionResult {
        child_spaces,
        attractor_seeds,
    })
}

/// Picks the smallest block of `scope` (ties broken by lowest variable index, for determinism
/// independent of the `HashSet`-ordered singleton blocks [`block::blocks`] may append) and asks
/// the oracle for every maximal trap sub-space reachable by branching only within it (§4.G steps
/// 2-4). One level of the succession diagram resolves one block at a time.
fn expand_block_decomposed(
    graph: &SymbolicAsyncGraph,
    influence: &InfluenceGraph,
    oracle: &dyn TrapSpaceOracle,
    config: &SdConfig,
    space: &Space,
    scope: &HashSet<VariableId>,
) -> Result<Vec<Space>, SdError> {
    let blocks = block::blocks(influence, scope);
    let chosen = blocks
        .into_iter()
        .min_by_key(|b| {
            let min_index = b.iter().map(|v| v.to_index()).min().unwrap_or(usize::MAX);
            (b.len(), min_index)
        })
        .expect("scope is non-empty, so at least one block exists");

    let query = TrapSpaceQuery::maximal_within_block(space.clone(), chosen);
    let found = oracle.solve(graph, query, config.max_sd_nodes)?;

    let mut seen = HashSet::new();
    let mut children = Vec::new();
    for candidate in found {
        if &candidate == space {
            // No progress: the block didn't refine the space any further.
            continue;
        }
        if seen.insert(candidate.canonical_key()) {
            children.push(candidate);
        }
    }
    Ok(children)
}
