//! A well-documented test network for unit testing reachability and SCC algorithms.
//!
//! A single 3-variable Boolean network used as a canonical fixture across the symbolic-kernel
//! test suites. States are denoted as binary strings `x0x1x2` (`101` means x0=1, x1=0, x2=1).
//!
//! ## Update Functions
//!
//! - `f_x0 = (x0 ∧ x1) ∨ (x1 ∧ x2) ∨ (x0 ∧ x2)` (majority of the three variables)
//! - `f_x1 = x0`
//! - `f_x2 = x0 ∧ (x1 ⊕ x2)`
//!
//! ## Asynchronous transition graph
//!
//! | State | Successors     | Predecessors    | Description                              |
//! |-------|----------------|-----------------|-------------------------------------------|
//! | 000   | (none)         | 001, 010, 100   | Fixed point — Attractor 1                 |
//! | 001   | 000            | 011             | Strong basin of Attractor 1               |
//! | 010   | 000            | 011             | Strong basin of Attractor 1               |
//! | 011   | 001, 010, 111  | (none) — SOURCE | Weak basin (reaches both attractors)      |
//! | 100   | 000, 110       | (none) — SOURCE | Weak basin (reaches both attractors)      |
//! | 101   | 111            | (none) — SOURCE | Strong basin of Attractor 2               |
//! | 110   | 111            | 100, 111        | Attractor 2 (2-cycle)                     |
//! | 111   | 110            | 011, 101, 110   | Attractor 2 (2-cycle)                     |

use super::llm_transition_builder::from_transitions;
use biodivine_lib_param_bn::symbolic_async_graph::SymbolicAsyncGraph;

/// Creates the canonical test network as a `SymbolicAsyncGraph`, generated from the edge list
/// documented above via [`from_transitions`].
pub fn create_test_network() -> SymbolicAsyncGraph {
    let transitions = vec![
        (0b001, 0b000),
        (0b010, 0b000),
        (0b011, 0b001),
        (0b011, 0b010),
        (0b011, 0b111),
        (0b100, 0b000),
        (0b100, 0b110),
        (0b101, 0b111),
        (0b110, 0b111),
        (0b111, 0b110),
    ];

    let bn = from_transitions(3, &transitions).expect("failed to build the test network");
    SymbolicAsyncGraph::new(&bn).expect("failed to create the symbolic graph")
}

/// State constants for readability in tests.
pub mod states {
    pub const S000: u32 = 0b000;
    pub const S001: u32 = 0b001;
    pub const S010: u32 = 0b010;
    pub const S011: u32 = 0b011;
    pub const S100: u32 = 0b100;
    pub const S101: u32 = 0b101;
    pub const S110: u32 = 0b110;
    pub const S111: u32 = 0b111;
}

/// Predefined sets for common test scenarios.
pub mod sets {
    use super::states::*;

    /// Attractor 1: the fixed point `{000}`.
    pub const ATTRACTOR_1: &[u32] = &[S000];
    /// Attractor 2: the cycle `{110, 111}`.
    pub const ATTRACTOR_2: &[u32] = &[S110, S111];
    /// Strong basin of Attractor 1 (excluding the attractor itself): `{001, 010}`.
    pub const STRONG_BASIN_ATTR1: &[u32] = &[S001, S010];
    /// Strong basin of Attractor 2 (excluding the attractor itself): `{101}`.
    pub const STRONG_BASIN_ATTR2: &[u32] = &[S101];
    /// Weak basin (can reach both attractors): `{011, 100}`.
    pub const WEAK_BASIN: &[u32] = &[S011, S100];
    /// Source states (no predecessors): `{011, 100, 101}`.
    pub const SOURCE_STATES: &[u32] = &[S011, S100, S101];
    /// All states that can reach Attractor 1: `{000, 001, 010, 011, 100}`.
    pub const CAN_REACH_ATTR1: &[u32] = &[S000, S001, S010, S011, S100];
    /// All states that can reach Attractor 2: `{011, 100, 101, 110, 111}`.
    pub const CAN_REACH_ATTR2: &[u32] = &[S011, S100, S101, S110, S111];
    /// All 8 states in the network.
    pub const ALL_STATES: &[u32] = &[S000, S001, S010, S011, S100, S101, S110, S111];
}

#[cfg(test)]
mod tests {
    use super::states::*;
    use super::*;
    use crate::test_utils::{mk_state, mk_states};
    use biodivine_lib_param_bn::biodivine_std::traits::Set;

    #[test]
    fn network_has_8_states() {
        let graph = create_test_network();
        assert_eq!(graph.mk_unit_colored_vertices().exact_cardinality(), 8u32.into());
    }

    #[test]
    fn state_000_is_fixed_point() {
        let graph = create_test_network();
        let s000 = mk_state(&graph, S000);
        assert!(graph.post(&s000).is_empty());
    }

    #[test]
    fn attractor_2_is_a_cycle() {
        let graph = create_test_network();
        let s110 = mk_state(&graph, S110);
        let s111 = mk_state(&graph, S111);
        assert_eq!(graph.post(&s110), s111);
        assert_eq!(graph.post(&s111), s110);
    }

    #[test]
    fn source_states_have_no_predecessors() {
        let graph = create_test_network();
        for state in [S011, S100, S101] {
            let s = mk_state(&graph, state);
            assert!(graph.pre(&s).is_empty());
        }
        for state in [S000, S001, S010, S110, S111] {
            let s = mk_state(&graph, state);
            assert!(!graph.pre(&s).is_empty());
        }
    }

    #[test]
    fn weak_basin_states_have_nondeterministic_successors() {
        let graph = create_test_network();
        let s011 = mk_state(&graph, S011);
        assert_eq!(graph.post(&s011).exact_cardinality(), 3u32.into());
        let s100 = mk_state(&graph, S100);
        assert_eq!(graph.post(&s100).exact_cardinality(), 2u32.into());
        let expected_011 = mk_states(&graph, &[S001, S010, S111]);
        assert_eq!(graph.post(&s011), expected_011);
    }
}
