//! Cooperative random-walk stepping shared by retained-set construction (§4.E) and candidate
//! pruning's simulation phase (§4.F). Kept as a single module since both need exactly the same
//! primitive: take one random enabled step from a symbolic singleton, restricted to some
//! universe.

use biodivine_lib_param_bn::VariableId;
use biodivine_lib_param_bn::biodivine_std::traits::Set;
use biodivine_lib_param_bn::symbolic_async_graph::{GraphColoredVertices, SymbolicAsyncGraph};
use rand::Rng;
use rand::rngs::StdRng;

/// Reads the value of `var` in a symbolic singleton (a set known to contain exactly one
/// vertex). Implemented the same way [`crate::space::percolate`] tests constancy: by
/// intersecting with the subspace where `var` is fixed, rather than decoding the BDD directly.
pub fn value_in(graph: &SymbolicAsyncGraph, singleton: &GraphColoredVertices, var: VariableId) -> bool {
    !singleton
        .intersect(&graph.mk_subspace(&[(var, true)]))
        .is_empty()
}

/// Takes one cooperative step: picks an enabled variable among `scope` uniformly at random and
/// fires it. Returns `current` unchanged if no variable in `scope` is enabled (a steady state
/// w.r.t. `scope`).
pub fn random_step(
    graph: &SymbolicAsyncGraph,
    scope: &[VariableId],
    current: &GraphColoredVertices,
    rng: &mut StdRng,
) -> GraphColoredVertices {
    let enabled: Vec<VariableId> = scope
        .iter()
        .copied()
        .filter(|&v| !graph.var_can_post(v, current).is_empty())
        .collect();

    let Some(&var) = enabled.get(rng.gen_range(0..enabled.len().max(1))) else {
        return current.clone();
    };
    if enabled.is_empty() {
        return current.clone();
    }

    graph.var_post(var, current).pick_vertex()
}

/// Runs `steps` cooperative steps from `start`, restricted to `universe`, and returns the final
/// singleton.
pub fn random_walk(
    graph: &SymbolicAsyncGraph,
    universe: &GraphColoredVertices,
    scope: &[VariableId],
    start: GraphColoredVertices,
    steps: usize,
    rng: &mut StdRng,
) -> GraphColoredVertices {
    let mut current = start;
    for _ in 0..steps {
        let next = random_step(graph, scope, &current, rng).intersect(universe);
        if next.is_empty() {
            break;
        }
        current = next;
    }
    current
}
