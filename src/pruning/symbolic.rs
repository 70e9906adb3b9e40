//! Exact symbolic (BDD) reachability: forward saturation restricted to a terminal space.

use crate::error::SdError;
use crate::pruning::reachability::ReachabilityOracle;
use biodivine_lib_param_bn::BooleanNetwork;
use biodivine_lib_param_bn::biodivine_std::traits::Set;
use biodivine_lib_param_bn::symbolic_async_graph::{GraphColoredVertices, SymbolicAsyncGraph};

/// Forward-saturation reachability, the same fixed-point shape as the teacher's `fwd_bwd`
/// reachability passes: repeatedly take one asynchronous step from the frontier until nothing
/// new is discovered or the target is hit.
pub struct SymbolicReachabilityOracle;

impl ReachabilityOracle for SymbolicReachabilityOracle {
    fn can_reach(
        &self,
        graph: &SymbolicAsyncGraph,
        _bn: &BooleanNetwork,
        from: &GraphColoredVertices,
        to: &GraphColoredVertices,
        within: &GraphColoredVertices,
    ) -> Result<bool, SdError> {
        let empty = within.minus(within);
        let mut visited = from.clone();
        let mut frontier = from.clone();

        if !frontier.intersect(to).is_empty() {
            return Ok(true);
        }

        loop {
            let mut next = empty.clone();
            for var in graph.variables() {
                let post = graph.var_post(var, &frontier).intersect(within);
                next = next.union(&post);
            }
            next = next.minus(&visited);

            if !next.intersect(to).is_empty() {
                return Ok(true);
            }
            if next.is_empty() {
                return Ok(false);
            }

            visited = visited.union(&next);
            frontier = next;
        }
    }
}
