//! Control: finding driver sets that force convergence from the root of a succession diagram
//! into a chosen target node (§4.H).
//!
//! A driver set is a subset of the literals that distinguish the target node's trap space from
//! the root's, chosen so that permanently fixing just that subset still percolates (§4.A) into a
//! space contained in the target. It does not depend on which root-to-target path the diagram
//! happens to record, only on the two spaces themselves, so it is computed directly from
//! `root.space` and `target.space` rather than by walking [`crate::succession_diagram::SdNode`]
//! parent edges.

use crate::space::{Space, percolate};
use crate::succession_diagram::{NodeId, SuccessionDiagram};
use biodivine_lib_param_bn::VariableId;
use biodivine_lib_param_bn::symbolic_async_graph::SymbolicAsyncGraph;
use log::warn;

/// Above this many candidate literals, exhaustive subset enumeration (`2^n` candidates) is
/// replaced by a single greedy minimization pass (§9 Open Question: "what to do when the exact
/// driver-set search space is too large to enumerate").
const EXHAUSTIVE_SEARCH_LIMIT: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlMode {
    /// Every inclusion-minimal driver set (no proper subset also suffices).
    AllMinimal,
    /// Every driver set of the smallest size found among the minimal ones.
    AllMinimum,
    /// A single smallest driver set (whichever is found first).
    AnyOneMinimum,
}

/// A set of permanent variable fixings sufficient to force convergence into a target node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverSet(pub Vec<(VariableId, bool)>);

impl DriverSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Finds driver sets for `target` relative to `sd`'s root, per `mode`.
pub fn find_driver_sets(
    graph: &SymbolicAsyncGraph,
    sd: &SuccessionDiagram,
    target: NodeId,
    mode: ControlMode,
) -> Vec<DriverSet> {
    let root_space = sd.node(sd.root()).space.clone();
    let target_space = sd.node(target).space.clone();

    let candidate_literals: Vec<(VariableId, bool)> = target_space
        .fixings()
        .filter(|&(var, _)| root_space.get(var).is_none())
        .collect();

    if candidate_literals.is_empty() {
        // The target is already forced by percolation alone; the empty set is the only (and
        // trivially minimal) driver set.
        return vec![DriverSet(Vec::new())];
    }

    if candidate_literals.len() > EXHAUSTIVE_SEARCH_LIMIT {
        warn!(
            "control: {} candidate literals exceeds the exhaustive search limit ({}); \
             falling back to a single greedily minimized driver set",
            candidate_literals.len(),
            EXHAUSTIVE_SEARCH_LIMIT
        );
        return vec![greedy_minimize(graph, &root_space, &target_space, &candidate_literals)];
    }

    let sufficient = |subset: &[(VariableId, bool)]| -> bool {
        is_sufficient(graph, &root_space, &target_space, subset)
    };

    let n = candidate_literals.len();
    let mut masks: Vec<u32> = (0..(1u32 << n)).collect();
    masks.sort_by_key(|m| m.count_ones());

    let mut minimal: Vec<Vec<(VariableId, bool)>> = Vec::new();
    'masks: for mask in masks {
        let subset: Vec<(VariableId, bool)> = (0..n)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| candidate_literals[i])
            .collect();
        if !sufficient(&subset) {
            continue;
        }
        for existing in &minimal {
            if existing.iter().all(|lit| subset.contains(lit)) {
                continue 'masks; // a proper (or equal) subset is already known minimal
            }
        }
        minimal.push(subset);
    }

    match mode {
        ControlMode::AllMinimal => minimal.into_iter().map(DriverSet).collect(),
        ControlMode::AllMinimum => {
            let smallest = minimal.iter().map(Vec::len).min().unwrap_or(0);
            minimal
                .into_iter()
                .filter(|s| s.len() == smallest)
                .map(DriverSet)
                .collect()
        }
        ControlMode::AnyOneMinimum => {
            let smallest = minimal.into_iter().min_by_key(Vec::len).unwrap_or_default();
            vec![DriverSet(smallest)]
        }
    }
}

fn is_sufficient(
    graph: &SymbolicAsyncGraph,
    root_space: &Space,
    target_space: &Space,
    subset: &[(VariableId, bool)],
) -> bool {
    let mut fixings: Vec<(VariableId, bool)> = root_space.fixings().collect();
    fixings.extend_from_slice(subset);
    let forced = percolate(graph, &Space::from_fixings(fixings));
    forced.is_subspace_of(target_space)
}

/// Removes literals one at a time (in the order given) as long as the remaining set is still
/// sufficient, producing one (not necessarily globally smallest) minimal driver set.
fn greedy_minimize(
    graph: &SymbolicAsyncGraph,
    root_space: &Space,
    target_space: &Space,
    candidates: &[(VariableId, bool)],
) -> DriverSet {
    let mut current = candidates.to_vec();
    let mut i = 0;
    while i < current.len() {
        let mut without = current.clone();
        without.remove(i);
        if is_sufficient(graph, root_space, target_space, &without) {
            current = without;
        } else {
            i += 1;
        }
    }
    DriverSet(current)
}
