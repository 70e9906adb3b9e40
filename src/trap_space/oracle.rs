use crate::error::SdError;
use crate::trap_space::config::TrapSpaceQuery;
use biodivine_lib_param_bn::symbolic_async_graph::SymbolicAsyncGraph;

/// A pluggable trap-space solver (§4.C). The crate ships [`super::BacktrackingOracle`], an
/// in-process search; [`super::ExternalAspOracle`] documents the shape a shelled-out answer-set
/// solver backend would take, for deployments that already run one.
pub trait TrapSpaceOracle {
    fn solve(
        &self,
        graph: &SymbolicAsyncGraph,
        query: TrapSpaceQuery,
        max_results: usize,
    ) -> Result<Vec<crate::space::Space>, SdError>;
}
