//! Petri-net-unfolding reachability: explicit marking-graph BFS over the §4.B encoding, used as
//! an independent cross-check against [`super::symbolic::SymbolicReachabilityOracle`].

use crate::error::SdError;
use crate::petri_net::build_petri_net;
use crate::pruning::reachability::ReachabilityOracle;
use crate::sim;
use biodivine_lib_param_bn::BooleanNetwork;
use biodivine_lib_param_bn::VariableId;
use biodivine_lib_param_bn::biodivine_std::traits::Set;
use biodivine_lib_param_bn::symbolic_async_graph::{GraphColoredVertices, SymbolicAsyncGraph};
use std::collections::{HashSet, VecDeque};

pub struct UnfoldingReachabilityOracle;

impl ReachabilityOracle for UnfoldingReachabilityOracle {
    fn can_reach(
        &self,
        graph: &SymbolicAsyncGraph,
        bn: &BooleanNetwork,
        from: &GraphColoredVertices,
        to: &GraphColoredVertices,
        within: &GraphColoredVertices,
    ) -> Result<bool, SdError> {
        let net = build_petri_net(graph, bn);
        let vars: Vec<VariableId> = net.variables.clone();

        let from_state: Vec<(VariableId, bool)> = vars
            .iter()
            .map(|&v| (v, sim::value_in(graph, from, v)))
            .collect();
        let start = net.marking_of_state(from_state);

        let mut visited = HashSet::new();
        visited.insert(start.clone());
        let mut queue = VecDeque::new();
        queue.push_back(start);

        while let Some(marking) = queue.pop_front() {
            let state = net.state_of_marking(&marking);
            let singleton = graph.mk_subspace(&state);

            if !singleton.intersect(to).is_empty() {
                return Ok(true);
            }
            if singleton.intersect(within).is_empty() {
                continue; // left the terminal restriction space; don't expand further
            }

            for transition in net.enabled(&marking) {
                let next = net.fire(&marking, transition);
                if visited.insert(next.clone()) {
                    queue.push_back(next);
                }
            }
        }

        Ok(false)
    }
}
