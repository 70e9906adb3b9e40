//! Phase 1 of candidate pruning (§4.F): a cheap simulation-based pre-filter that discards
//! candidates which wander out of the node's terminal restriction space (meaning they actually
//! belong to a child's attractor) and collapses candidates whose walks converge to the same
//! state, before the expensive exact reachability pass in Phase 2.

use crate::sim;
use biodivine_lib_param_bn::VariableId;
use biodivine_lib_param_bn::biodivine_std::traits::Set;
use biodivine_lib_param_bn::symbolic_async_graph::{GraphColoredVertices, SymbolicAsyncGraph};
use rand::rngs::StdRng;
use std::collections::HashMap;

/// Runs up to `steps` cooperative steps from `candidate`; returns `true` if some step leaves
/// `terminal` (the node's space minus the union of its children's spaces — see
/// [`super::pruner::prune`]), meaning this candidate is not a seed of an attractor rooted at
/// this node.
pub fn escapes_terminal(
    graph: &SymbolicAsyncGraph,
    terminal: &GraphColoredVertices,
    scope: &[VariableId],
    candidate: &GraphColoredVertices,
    steps: usize,
    rng: &mut StdRng,
) -> bool {
    let mut current = candidate.clone();
    for _ in 0..steps {
        let stepped = sim::random_step(graph, scope, &current, rng);
        if stepped.intersect(terminal).is_empty() {
            return true;
        }
        current = stepped;
    }
    false
}

/// Groups `candidates` by the state their random walk converges to within `terminal`, keeping
/// one representative (the original, pre-walk candidate) per distinct limit state. Candidates
/// whose walk happens to escape `terminal` during this second, longer walk are kept as their own
/// singleton group rather than dropped, since [`escapes_terminal`] already filtered out the
/// clear escapees and a late escape here is more likely noise than signal.
pub fn collapse_by_convergence(
    graph: &SymbolicAsyncGraph,
    terminal: &GraphColoredVertices,
    scope: &[VariableId],
    candidates: Vec<GraphColoredVertices>,
    steps: usize,
    rng: &mut StdRng,
) -> Vec<GraphColoredVertices> {
    let mut by_limit: HashMap<Vec<(usize, bool)>, GraphColoredVertices> = HashMap::new();

    for candidate in candidates {
        let mut current = candidate.clone();
        for _ in 0..steps {
            let stepped = sim::random_step(graph, scope, &current, rng).intersect(terminal);
            if stepped.is_empty() {
                break;
            }
            current = stepped;
        }

        let key: Vec<(usize, bool)> = scope
            .iter()
            .map(|&v| (v.to_index(), sim::value_in(graph, &current, v)))
            .collect();
        by_limit.entry(key).or_insert(candidate);
    }

    by_limit.into_values().collect()
}
