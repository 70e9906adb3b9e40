//! Combines both pruning phases (§4.F) into the `prune(candidates, space, children) ->
//! attractor_seeds` contract used by [`crate::succession_diagram`].

use crate::config::{OracleMode, SdConfig};
use crate::error::SdError;
use crate::pruning::reachability::ReachabilityOracle;
use crate::pruning::simulation::{collapse_by_convergence, escapes_terminal};
use crate::pruning::symbolic::SymbolicReachabilityOracle;
use crate::pruning::unfolding::UnfoldingReachabilityOracle;
use crate::space::Space;
use biodivine_lib_param_bn::BooleanNetwork;
use biodivine_lib_param_bn::biodivine_std::traits::Set;
use biodivine_lib_param_bn::symbolic_async_graph::{GraphColoredVertices, SymbolicAsyncGraph};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Reduces a leaf's candidate attractor-seed states down to one representative per actual
/// attractor contained in `space` but outside every already-discovered child trap space.
///
/// `|candidates| == 0` returns an empty vector (nothing to prune). `|candidates| == 1` short
/// circuits: a single candidate from [`crate::candidates::generate_candidates`] is always kept
/// without spending a reachability query on it, mirroring how the retained-set construction
/// already special-cases an empty NFVS as "one candidate, trivially the whole attractor".
pub fn prune(
    graph: &SymbolicAsyncGraph,
    bn: &BooleanNetwork,
    space: &Space,
    candidates: Vec<GraphColoredVertices>,
    children: &[Space],
    config: &SdConfig,
) -> Result<Vec<GraphColoredVertices>, SdError> {
    if candidates.len() <= 1 {
        return Ok(candidates);
    }

    let universe = space.to_symbolic(graph);
    let mut carved = universe.minus(&universe);
    for child in children {
        carved = carved.union(&child.to_symbolic(graph));
    }
    let terminal = universe.minus(&carved);

    let scope = space.free_variables(graph);
    let mut rng = StdRng::seed_from_u64(config.rng_seed);

    let survivors: Vec<GraphColoredVertices> = candidates
        .into_iter()
        .filter(|candidate| {
            !escapes_terminal(
                graph,
                &terminal,
                &scope,
                candidate,
                config.simulation_steps,
                &mut rng,
            )
        })
        .collect();
    if survivors.is_empty() {
        return Ok(Vec::new());
    }

    let representatives = collapse_by_convergence(
        graph,
        &terminal,
        &scope,
        survivors,
        config.simulation_steps,
        &mut rng,
    );

    merge_by_reachability(graph, bn, &terminal, representatives, OracleMode::from_config(config))
}

/// Merges candidates that can reach each other within `terminal` (i.e. belong to the same
/// attractor), keeping one representative per equivalence class.
fn merge_by_reachability(
    graph: &SymbolicAsyncGraph,
    bn: &BooleanNetwork,
    terminal: &GraphColoredVertices,
    candidates: Vec<GraphColoredVertices>,
    mode: Option<OracleMode>,
) -> Result<Vec<GraphColoredVertices>, SdError> {
    let Some(mode) = mode else {
        // No reachability oracle configured at all: nothing can verify a merge, so every
        // surviving representative is conservatively kept as its own seed.
        return Ok(candidates);
    };

    let symbolic = SymbolicReachabilityOracle;
    let unfolding = UnfoldingReachabilityOracle;

    let mut kept: Vec<GraphColoredVertices> = Vec::new();
    'candidates: for candidate in candidates {
        for existing in &kept {
            let mutually_reachable = mutual_reachability(
                graph, bn, &candidate, existing, terminal, mode, &symbolic, &unfolding,
            )?;
            if mutually_reachable {
                continue 'candidates;
            }
        }
        kept.push(candidate);
    }
    Ok(kept)
}

fn mutual_reachability(
    graph: &SymbolicAsyncGraph,
    bn: &BooleanNetwork,
    a: &GraphColoredVertices,
    b: &GraphColoredVertices,
    terminal: &GraphColoredVertices,
    mode: OracleMode,
    symbolic: &SymbolicReachabilityOracle,
    unfolding: &UnfoldingReachabilityOracle,
) -> Result<bool, SdError> {
    let a_to_b = consult(graph, bn, a, b, terminal, mode, symbolic, unfolding)?;
    if !a_to_b {
        return Ok(false);
    }
    consult(graph, bn, b, a, terminal, mode, symbolic, unfolding)
}

fn consult(
    graph: &SymbolicAsyncGraph,
    bn: &BooleanNetwork,
    from: &GraphColoredVertices,
    to: &GraphColoredVertices,
    terminal: &GraphColoredVertices,
    mode: OracleMode,
    symbolic: &SymbolicReachabilityOracle,
    unfolding: &UnfoldingReachabilityOracle,
) -> Result<bool, SdError> {
    match mode {
        OracleMode::Symbolic => symbolic.can_reach(graph, bn, from, to, terminal),
        OracleMode::Unfolding => unfolding.can_reach(graph, bn, from, to, terminal),
        OracleMode::Both => {
            let by_symbolic = symbolic.can_reach(graph, bn, from, to, terminal)?;
            let by_unfolding = unfolding.can_reach(graph, bn, from, to, terminal)?;
            if by_symbolic != by_unfolding {
                return Err(SdError::Inconsistent {
                    detail: format!(
                        "symbolic reachability={by_symbolic}, unfolding reachability={by_unfolding}"
                    ),
                });
            }
            Ok(by_symbolic)
        }
    }
}
