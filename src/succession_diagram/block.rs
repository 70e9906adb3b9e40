//! Block decomposition (§4.G.5): partitions a node's free variables into SCCs of the signed
//! influence graph (plus singleton blocks for every variable not part of a cycle), so trap-space
//! enumeration can be pointed at resolving one strongly-connected block before the next rather
//! than branching on every free variable in an arbitrary order.

use crate::influence_graph::InfluenceGraph;
use biodivine_lib_param_bn::VariableId;
use std::collections::HashSet;

/// Partitions `scope` into blocks: first the non-trivial SCCs (in the order
/// [`InfluenceGraph::strongly_connected_components`] reports them), then every remaining
/// variable as its own singleton block.
pub fn blocks(influence: &InfluenceGraph, scope: &HashSet<VariableId>) -> Vec<Vec<VariableId>> {
    let mut result = influence.strongly_connected_components(scope);
    let covered: HashSet<VariableId> = result.iter().flatten().copied().collect();
    for &var in scope {
        if !covered.contains(&var) {
            result.push(vec![var]);
        }
    }
    result
}

/// Flattens [`blocks`] into a single branch-order hint for
/// [`crate::trap_space::TrapSpaceQuery::with_preferred_order`].
pub fn preferred_order(influence: &InfluenceGraph, scope: &HashSet<VariableId>) -> Vec<VariableId> {
    blocks(influence, scope).into_iter().flatten().collect()
}
