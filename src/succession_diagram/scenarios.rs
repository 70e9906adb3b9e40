//! End-to-end scenario tests exercising the whole pipeline (percolation through control),
//! reproducing the worked examples used to validate this crate's design.

use super::SuccessionDiagram;
use crate::config::SdConfig;
use crate::control::{ControlMode, find_driver_sets};
use crate::test_utils::mk_boolean_network;
use crate::trap_space::BacktrackingOracle;
use biodivine_lib_param_bn::symbolic_async_graph::SymbolicAsyncGraph;

fn build(bn: biodivine_lib_param_bn::BooleanNetwork) -> SuccessionDiagram {
    let graph = SymbolicAsyncGraph::new(&bn).unwrap();
    let mut sd = SuccessionDiagram::new(graph, bn, Box::new(BacktrackingOracle), SdConfig::new());
    sd.expand().unwrap();
    sd
}

/// `f_A = A; f_B = B; f_C = A & B; f_D = D | A`. The root percolates to nothing (A, B, D are all
/// free at the unconstrained space). Block decomposition resolves one source variable at a time
/// (A first, by variable index): branching A=1 percolates D=1 immediately (D | 1 is constant), but
/// branching A=0 leaves D genuinely free (D | 0 = D), so D needs its own level only on that side.
/// That asymmetry is why this network has 6 minimal trap spaces, not a clean 2x2x2 = 8, and why
/// the root has 2 children (the A block), not 4.
#[test]
fn scenario_1_source_combinations() {
    let bn = mk_boolean_network(4, &["a", "b", "a & b", "d | a"]);
    let sd = build(bn);

    let root = sd.node(sd.root());
    assert_eq!(root.children().len(), 2);

    let minimal: Vec<_> = sd.nodes().iter().filter(|n| n.is_minimal()).collect();
    assert_eq!(minimal.len(), 6);
    for node in &minimal {
        assert_eq!(node.space.len(), 4);
        assert_eq!(node.attractor_seeds().len(), 1);
    }
}

/// `f_A = !(A xor B); f_B = !(A xor B)`. Two fixed-point attractors plus a motif-avoidant 2-cycle that
/// cannot live inside either minimal trap space and must be reported at the root.
#[test]
fn scenario_2_motif_avoidant_attractor_at_root() {
    let bn = mk_boolean_network(2, &["!(a ^ b)", "!(a ^ b)"]);
    let sd = build(bn);

    let minimal: Vec<_> = sd.nodes().iter().filter(|n| n.is_minimal()).collect();
    assert_eq!(minimal.len(), 2);
    for node in &minimal {
        assert_eq!(node.attractor_seeds().len(), 1);
    }

    let root = sd.node(sd.root());
    assert_eq!(
        root.attractor_seeds().len(),
        1,
        "the oscillating {{01, 10}} attractor belongs to the root, not to either fixed point"
    );
}

/// `f_1 = x2; f_2 = x1; f_3 = !x3`. Two minimal trap spaces (x1 = x2 = 0 and x1 = x2 = 1), each
/// carrying its own 2-cycle attractor on the free third variable.
#[test]
fn scenario_3_two_minimal_trap_spaces_each_with_a_cycle() {
    let bn = mk_boolean_network(3, &["b", "a", "!c"]);
    let sd = build(bn);

    let minimal: Vec<_> = sd.nodes().iter().filter(|n| n.is_minimal()).collect();
    assert_eq!(minimal.len(), 2);

    let total_attractors: usize = sd.nodes().iter().map(|n| n.attractor_seeds().len()).sum();
    assert_eq!(total_attractors, 2);

    for node in &minimal {
        assert_eq!(node.attractor_seeds().len(), 1);
        // a and b agree in every minimal trap space; c is left free for the cycle.
        let vars: Vec<_> = sd.graph().variables().collect();
        assert_eq!(node.space.get(vars[0]), node.space.get(vars[1]));
        assert!(node.space.get(vars[2]).is_none());
    }
}

/// `f_A = (!A & !B) | C; f_B = (!A & !B) | C; f_C = A & B`. One minimal trap space
/// `{A=B=C=1}` plus a motif-avoidant attractor over `{000, 010, 100}` at the root. Also the basis
/// for the scenario 6 control query below.
fn scenario_4_network() -> biodivine_lib_param_bn::BooleanNetwork {
    mk_boolean_network(
        3,
        &["(!a & !b) | c", "(!a & !b) | c", "a & b"],
    )
}

#[test]
fn scenario_4_single_minimal_node_and_root_attractor() {
    let sd = build(scenario_4_network());

    let minimal: Vec<_> = sd.nodes().iter().filter(|n| n.is_minimal()).collect();
    assert_eq!(minimal.len(), 1);
    let vars: Vec<_> = sd.graph().variables().collect();
    let m = &minimal[0];
    assert_eq!(m.space.get(vars[0]), Some(true));
    assert_eq!(m.space.get(vars[1]), Some(true));
    assert_eq!(m.space.get(vars[2]), Some(true));
    assert_eq!(m.attractor_seeds().len(), 1);

    let total_attractors: usize = sd.nodes().iter().map(|n| n.attractor_seeds().len()).sum();
    assert_eq!(total_attractors, 2, "one fixed point plus one motif-avoidant cycle");
}

/// Target control for scenario 4 with `M* = {A=B=C=1}`: the minimum driver set is `{(C,1)}`.
#[test]
fn scenario_6_minimum_driver_set_is_fixing_c() {
    let bn = scenario_4_network();
    let graph = SymbolicAsyncGraph::new(&bn).unwrap();
    let mut sd = SuccessionDiagram::new(graph.clone(), bn, Box::new(BacktrackingOracle), SdConfig::new());
    sd.expand().unwrap();

    let target = sd.nodes().iter().find(|n| n.is_minimal()).unwrap().id;
    let driver_sets = find_driver_sets(&graph, &sd, target, ControlMode::AnyOneMinimum);

    assert_eq!(driver_sets.len(), 1);
    assert_eq!(driver_sets[0].len(), 1);
    let vars: Vec<_> = graph.variables().collect();
    let (var, value) = driver_sets[0].0[0];
    assert_eq!(var, vars[2], "C is the third declared variable");
    assert!(value);
}
