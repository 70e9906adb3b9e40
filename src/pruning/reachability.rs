//! The reachability-oracle trait consulted by candidate pruning's Phase 2 (§4.F), and the
//! "fixed three-way tagged variant" from §9: symbolic, unfolding, or both (cross-checked,
//! raising [`crate::error::SdError::Inconsistent`] on disagreement).

use crate::error::SdError;
use biodivine_lib_param_bn::BooleanNetwork;
use biodivine_lib_param_bn::symbolic_async_graph::{GraphColoredVertices, SymbolicAsyncGraph};

/// Decides whether a single `from` state can reach a single `to` state without ever leaving
/// `within` (the node's terminal restriction space, see [`super::pruner::prune`]).
pub trait ReachabilityOracle {
    fn can_reach(
        &self,
        graph: &SymbolicAsyncGraph,
        bn: &BooleanNetwork,
        from: &GraphColoredVertices,
        to: &GraphColoredVertices,
        within: &GraphColoredVertices,
    ) -> Result<bool, SdError>;
}
