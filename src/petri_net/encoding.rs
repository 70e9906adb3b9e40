use super::{Marking, PetriNet, PlaceId, Tokens, Transition, TransitionId};
use biodivine_lib_param_bn::VariableId;
use biodivine_lib_param_bn::biodivine_std::traits::Set;
use biodivine_lib_param_bn::symbolic_async_graph::{GraphColoredVertices, SymbolicAsyncGraph};
use biodivine_lib_param_bn::BooleanNetwork;
use std::collections::HashMap;

/// Builds the Petri-net encoding of `bn` (§4.B): two places per variable, and one transition per
/// DNF clause of each update function, where the clause is a cube over that variable's
/// regulators only.
///
/// We recover a clause cover of `f_i = b` the same way [`crate::space::percolate`] determines
/// constancy over a space: by recursively splitting the regulator set and checking which
/// branches are non-empty, rather than inspecting the BDD's internal variable ordering. This
/// produces a sound (if not always minimal) DNF.
pub fn build_petri_net(graph: &SymbolicAsyncGraph, bn: &BooleanNetwork) -> PetriNet {
    let context = graph.symbolic_context();
    let variables: Vec<VariableId> = graph.variables().collect();

    let mut place_zero = HashMap::new();
    let mut place_one = HashMap::new();
    let mut next_place = 0usize;
    for &var in &variables {
        place_zero.insert(var, PlaceId(next_place));
        next_place += 1;
        place_one.insert(var, PlaceId(next_place));
        next_place += 1;
    }

    let mut transitions = Vec::new();
    let mut next_transition = 0usize;

    for &var in &variables {
        let regulators = bn.regulators(var);
        let f_is_true = match bn.get_update_function(var) {
            Some(fun) => GraphColoredVertices::new(context.mk_fn_update_true(fun), context),
            None => GraphColoredVertices::new(
                context.mk_implicit_function_is_true(var, &regulators),
                context,
            ),
        };
        let f_is_false = graph.mk_unit_colored_vertices().minus(&f_is_true);

        for (target_value, predicate) in [(true, &f_is_true), (false, &f_is_false)] {
            let clauses = cover_clauses(graph, predicate, &regulators, &[]);
            for guard in clauses {
                transitions.push(Transition {
                    id: TransitionId(next_transition),
                    variable: var,
                    target_value,
                    guard,
                });
                next_transition += 1;
            }
        }
    }

    // Arbitrary but deterministic initial marking: every variable starts at 0. Callers that
    // care about a specific initial state build their own marking via `marking_of_state`.
    let initial_marking = {
        let mut marking = Marking::default();
        for &var in &variables {
            marking.set(place_zero[&var], Tokens(1));
        }
        marking
    };

    PetriNet::new(variables, place_zero, place_one, transitions, initial_marking)
}

/// Recursively covers `predicate` (a subset of the unit colored-vertex set) with cubes over
/// `remaining` regulators, fixed so far by `current`.
fn cover_clauses(
    graph: &SymbolicAsyncGraph,
    predicate: &GraphColoredVertices,
    remaining: &[VariableId],
    current: &[(VariableId, bool)],
) -> Vec<Vec<(VariableId, bool)>> {
    if predicate.is_empty() {
        return Vec::new();
    }
    let Some((&var, rest)) = remaining.split_first() else {
        return vec![current.to_vec()];
    };

    let mut fixings_0 = current.to_vec();
    fixings_0.push((var, false));
    let sub0 = predicate.intersect(&graph.mk_subspace(&fixings_0));

    let mut fixings_1 = current.to_vec();
    fixings_1.push((var, true));
    let sub1 = predicate.intersect(&graph.mk_subspace(&fixings_1));

    let mut clauses = Vec::new();
    if !sub0.is_empty() {
        clauses.extend(cover_clauses(graph, &sub0, rest, &fixings_0));
    }
    if !sub1.is_empty() {
        clauses.extend(cover_clauses(graph, &sub1, rest, &fixings_1));
    }
    clauses
}
