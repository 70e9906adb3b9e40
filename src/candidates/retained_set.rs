//! Majority-vote retained-set construction (§4.E).
//!
//! Fixing the NFVS to a well-chosen value set (the "retained set") breaks every negative cycle
//! the NFVS hits, leaving a primarily-monotone system in which attractors are far easier to
//! pin down. We choose that value set the same way the rest of this crate resolves anything it
//! can't decide exactly but can estimate cheaply: sample and take a majority vote, the way
//! [`crate::pruning`]'s simulation phase estimates reachability rather than deciding it exactly.

use crate::sim;
use crate::space::Space;
use biodivine_lib_param_bn::VariableId;
use biodivine_lib_param_bn::symbolic_async_graph::SymbolicAsyncGraph;
use rand::rngs::StdRng;
use std::collections::HashSet;

/// Number of independent random walks tallied per retained-set variable. Kept as an internal
/// constant (not user-configurable) since it only affects the quality of a single sample, not
/// the number of samples tried — that knob is [`crate::config::SdConfig::retained_set_samples`].
const WALKS_PER_VARIABLE: usize = 8;

/// Builds one retained-set candidate: for each variable in `nfvs`, runs [`WALKS_PER_VARIABLE`]
/// independent cooperative random walks of `config.simulation_steps` steps starting from the
/// enclosing space `space`, and fixes the variable to whichever value it held more often at the
/// end of a walk.
pub fn build_retained_set(
    graph: &SymbolicAsyncGraph,
    space: &Space,
    nfvs: &HashSet<VariableId>,
    simulation_steps: usize,
    rng: &mut StdRng,
) -> Space {
    let universe = space.to_symbolic(graph);
    let scope: Vec<VariableId> = space.free_variables(graph);

    let mut fixings = Vec::new();
    for &var in nfvs {
        let mut votes_true = 0usize;
        let mut votes_false = 0usize;
        for _ in 0..WALKS_PER_VARIABLE {
            let start = universe.pick_vertex();
            let end = sim::random_walk(graph, &universe, &scope, start, simulation_steps, rng);
            if sim::value_in(graph, &end, var) {
                votes_true += 1;
            } else {
                votes_false += 1;
            }
        }
        fixings.push((var, votes_true >= votes_false));
    }

    Space::from_fixings(fixings)
}
