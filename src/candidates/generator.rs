//! Candidate attractor-seed generation (§4.E): the retained set picks which literals to fix, and
//! the trap-space oracle's fix-extension query enumerates every trap space consistent with them —
//! that enumeration, not a sampled walk, is the candidate set (§4.D/§4.E).

use crate::candidates::retained_set::build_retained_set;
use crate::config::SdConfig;
use crate::error::SdError;
use crate::influence_graph::InfluenceGraph;
use crate::nfvs::negative_feedback_vertex_set;
use crate::space::Space;
use crate::trap_space::{TrapSpaceOracle, TrapSpaceQuery};
use biodivine_lib_param_bn::VariableId;
use biodivine_lib_param_bn::symbolic_async_graph::{GraphColoredVertices, SymbolicAsyncGraph};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Generates candidate attractor-seed states for an SD leaf (§4.E).
///
/// Tries up to `config.retained_set_samples` independently sampled retained sets. Each retained
/// set's fixed literals drive a fix-extension query against `oracle`, bounded by
/// `config.max_candidates`; every trap space the oracle reports back is a candidate. Keeps the
/// attempt yielding the fewest candidates (less work for [`crate::pruning`]) and stops early once
/// an attempt yields at most one. Returns an empty vector, not an error, if every attempt's
/// retained set turns out inconsistent with `space` — a legitimate outcome when the NFVS is empty
/// and `space` is already a single state.
pub fn generate_candidates(
    graph: &SymbolicAsyncGraph,
    influence: &InfluenceGraph,
    space: &Space,
    oracle: &dyn TrapSpaceOracle,
    config: &SdConfig,
) -> Result<Vec<GraphColoredVertices>, SdError> {
    let scope: HashSet<VariableId> = space.free_variables(graph).into_iter().collect();
    if scope.is_empty() {
        // Already a single state: it is its own sole candidate.
        return Ok(vec![space.to_symbolic(graph)]);
    }

    let nfvs = negative_feedback_vertex_set(influence, &scope, config.rng_seed);
    if nfvs.is_empty() {
        // No negative feedback at all within this space: the whole space collapses to a single
        // monotone attractor, so the space itself is the one candidate.
        return Ok(vec![space.to_symbolic(graph)]);
    }

    let mut rng = StdRng::seed_from_u64(config.rng_seed);
    let mut best: Option<Vec<Space>> = None;

    for _ in 0..config.retained_set_samples.max(1) {
        let retained = build_retained_set(graph, space, &nfvs, config.simulation_steps, &mut rng);

        let literals: Vec<(VariableId, bool)> = retained.fixings().collect();
        let query = TrapSpaceQuery::fix_extension(space.clone(), literals);
        let found = oracle.solve(graph, query, config.max_candidates)?;
        if found.is_empty() {
            continue;
        }

        let improves = best
            .as_ref()
            .map(|current| found.len() < current.len())
            .unwrap_or(true);
        if improves {
            best = Some(found);
        }

        if let Some(current) = &best {
            if current.len() <= 1 {
                break;
            }
        }
    }

    Ok(best
        .unwrap_or_default()
        .into_iter()
        .map(|s| s.to_symbolic(graph))
        .collect())
}
