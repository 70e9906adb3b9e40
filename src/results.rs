//! Result types and reporting queries over a built [`SuccessionDiagram`] (§4.G/§4.H outputs).

use crate::control::{ControlMode, DriverSet, find_driver_sets};
use crate::error::Unknown;
use crate::succession_diagram::{NodeId, SuccessionDiagram};
use biodivine_lib_param_bn::biodivine_std::traits::Set;
use biodivine_lib_param_bn::symbolic_async_graph::{GraphColoredVertices, SymbolicAsyncGraph};
use std::collections::BTreeMap;

/// A high-level report over a diagram, independent of its internal node structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub node_count: usize,
    pub minimal_node_count: usize,
    pub attractor_count: usize,
    /// The length of the longest root-to-leaf path (the root itself is depth 0).
    pub depth: usize,
    /// Every node id in discovery order (the order [`SuccessionDiagram::expand`] visited them).
    pub node_ordering: Vec<NodeId>,
    /// Attractor count summed per depth level, for depths that found at least one attractor.
    pub attractors_by_node: BTreeMap<usize, usize>,
}

pub fn summary(sd: &SuccessionDiagram) -> Summary {
    let minimal_node_count = sd.nodes().iter().filter(|n| n.is_minimal()).count();
    let attractor_count = sd
        .nodes()
        .iter()
        .map(|n| n.attractor_seeds().len())
        .sum();

    let depths = node_depths(sd);
    let depth = depths.iter().copied().max().unwrap_or(0);

    let mut attractors_by_node: BTreeMap<usize, usize> = BTreeMap::new();
    for (node, &d) in sd.nodes().iter().zip(depths.iter()) {
        let count = node.attractor_seeds().len();
        if count > 0 {
            *attractors_by_node.entry(d).or_insert(0) += count;
        }
    }

    let node_ordering = sd.nodes().iter().map(|n| n.id).collect();

    Summary {
        node_count: sd.len(),
        minimal_node_count,
        attractor_count,
        depth,
        node_ordering,
        attractors_by_node,
    }
}

/// Each node's distance from the root, computed in a single forward pass: every parent id is
/// guaranteed smaller than its children's (nodes are only ever appended), so by the time a node
/// is reached every parent's depth is already known.
fn node_depths(sd: &SuccessionDiagram) -> Vec<usize> {
    let mut depths = vec![0usize; sd.len()];
    for (index, node) in sd.nodes().iter().enumerate() {
        if node.parents.is_empty() {
            continue;
        }
        depths[index] = node.parents.iter().map(|p| depths[p.0]).max().unwrap_or(0) + 1;
    }
    depths
}

/// The attractor seeds pruned for a specific node, or [`Unknown`] if that node's expansion was
/// abandoned (§7).
pub fn node_attractor_seeds(
    sd: &SuccessionDiagram,
    id: NodeId,
) -> Result<Vec<GraphColoredVertices>, Unknown> {
    let node = sd.node(id);
    if node.is_unknown() {
        return Err(Unknown::Unknown);
    }
    Ok(node.attractor_seeds().to_vec())
}

/// One representative state per attractor discovered anywhere in the diagram (every expanded
/// node's pruned attractor seeds, not only minimal nodes' — a non-minimal node's terminal
/// restriction space can itself contain a "motif-avoidant" attractor, see §4.F).
pub fn expanded_attractor_seeds(sd: &SuccessionDiagram) -> Vec<GraphColoredVertices> {
    sd.nodes()
        .iter()
        .flat_map(|n| n.attractor_seeds().iter().cloned())
        .collect()
}

/// The full state set of every attractor found, obtained by forward-saturating each seed state.
/// Since every seed lives inside a trap space, this closure can never escape it.
pub fn expanded_attractor_sets(sd: &SuccessionDiagram) -> Vec<GraphColoredVertices> {
    let graph = sd.graph();
    expanded_attractor_seeds(sd)
        .into_iter()
        .map(|seed| attractor_closure(graph, &seed))
        .collect()
}

fn attractor_closure(graph: &SymbolicAsyncGraph, seed: &GraphColoredVertices) -> GraphColoredVertices {
    let mut visited = seed.clone();
    let mut frontier = seed.clone();
    loop {
        let mut next = visited.minus(&visited); // empty, same type
        for var in graph.variables() {
            next = next.union(&graph.var_post(var, &frontier));
        }
        next = next.minus(&visited);
        if next.is_empty() {
            return visited;
        }
        visited = visited.union(&next);
        frontier = next;
    }
}

/// The outcome of a control query (§4.H): every driver set found for `target` under `mode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlResult {
    pub target: NodeId,
    pub mode: ControlMode,
    pub driver_sets: Vec<DriverSet>,
}

pub fn control(
    graph: &SymbolicAsyncGraph,
    sd: &SuccessionDiagram,
    target: NodeId,
    mode: ControlMode,
) -> ControlResult {
    ControlResult {
        target,
        mode,
        driver_sets: find_driver_sets(graph, sd, target, mode),
    }
}
