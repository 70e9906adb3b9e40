//! Negative feedback vertex set (NFVS) computation over the signed influence graph (§4.D).
//!
//! An NFVS is a vertex set whose removal leaves no negative cycle. It need not be minimum —
//! the retained-set construction (§4.E) only needs *a* small one, since a larger NFVS merely
//! means more candidate states to generate, not an incorrect result. We use a greedy
//! hit-a-witness-cycle loop rather than an exact solver (which would need an ILP/SAT backend
//! this crate doesn't otherwise depend on).

use crate::influence_graph::{InfluenceGraph, Sign};
use biodivine_lib_param_bn::VariableId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Computes an approximately-minimum NFVS for the influence graph, restricted to `scope`.
///
/// Variables outside `scope` are treated as already removed (this is how a percolated SD node
/// restricts the computation to its still-free variables).
///
/// Deterministic for a given `seed`: ties between equally-good candidate vertices are broken by
/// a seeded PRNG rather than arbitrarily, so repeated runs against the same network produce the
/// same retained set, which in turn makes candidate generation reproducible (§5).
pub fn negative_feedback_vertex_set(
    graph: &InfluenceGraph,
    scope: &HashSet<VariableId>,
    seed: u64,
) -> HashSet<VariableId> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut removed: HashSet<VariableId> = HashSet::new();

    loop {
        let remaining: HashSet<VariableId> = scope.difference(&removed).copied().collect();
        if remaining.is_empty() {
            return removed;
        }

        let components = graph.strongly_connected_components(&remaining);
        let mut progressed = false;

        for component in &components {
            let component_scope: HashSet<VariableId> = component.iter().copied().collect();
            let pivot = component[0];
            let Some(cycle) = graph.shortest_parity_cycle(&component_scope, pivot, Sign::Negative)
            else {
                continue;
            };

            let best = pick_vertex_to_remove(graph, &remaining, &cycle, &mut rng);
            removed.insert(best);
            progressed = true;
            break;
        }

        if !progressed {
            return removed;
        }
    }
}

/// Picks the cycle vertex with the highest combined in/out degree within `remaining` (breaking
/// it out of the largest number of other potential cycles), breaking ties uniformly at random.
fn pick_vertex_to_remove(
    graph: &InfluenceGraph,
    remaining: &HashSet<VariableId>,
    cycle: &[VariableId],
    rng: &mut StdRng,
) -> VariableId {
    let degree = |v: VariableId| -> usize {
        let out_degree = graph
            .successors(v)
            .iter()
            .filter(|(to, _)| remaining.contains(to))
            .count();
        let in_degree = graph
            .vertices()
            .iter()
            .filter(|&&u| remaining.contains(&u))
            .filter(|&&u| graph.successors(u).iter().any(|(to, _)| *to == v))
            .count();
        out_degree + in_degree
    };

    let max_degree = cycle.iter().copied().map(degree).max().unwrap_or(0);
    let tied: Vec<VariableId> = cycle
        .iter()
        .copied()
        .filter(|&v| degree(v) == max_degree)
        .collect();

    tied[rng.gen_range(0..tied.len())]
}
