//! A single succession-diagram node and its expansion state machine (§4.G).
//!
//! Expansion of a node proceeds through a fixed sequence of phases, the same explicit-`enum`
//! idiom the teacher uses for its forward-backward SCC step (one phase fully computed before the
//! next is attempted, so a node can be resumed or inspected mid-expansion instead of only ever
//! seeing start/end).

use crate::space::Space;
use biodivine_lib_param_bn::symbolic_async_graph::GraphColoredVertices;

/// A node's id within its owning [`super::SuccessionDiagram`]: its index into `nodes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// How far a node's expansion has progressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionPhase {
    /// Just created; `space` has not been percolated yet.
    Fresh,
    /// `space` is percolated (a genuine trap space). Next: split into blocks / decide children.
    Percolated,
    /// Minimal trap spaces strictly below this node's space have been computed as candidate
    /// child spaces (not yet materialized as [`NodeId`]s).
    ChildSpacesComputed { child_spaces: Vec<Space> },
    /// Children exist as nodes in the diagram; this node's own attractor seeds have been pruned
    /// against them.
    Expanded {
        children: Vec<NodeId>,
        attractor_seeds: Vec<GraphColoredVertices>,
    },
    /// Expansion hit a recoverable error (budget, timeout, oracle failure) and was abandoned for
    /// this node specifically (§7): its children and attractor seeds could not be determined, but
    /// sibling branches elsewhere in the diagram are unaffected.
    Unknown,
}

/// One node of the succession diagram: a trap space plus its expansion state.
#[derive(Debug, Clone)]
pub struct SdNode {
    pub id: NodeId,
    pub space: Space,
    /// Every node that expanded into this one. A node can be reached from more than one parent
    /// (the diagram is a DAG, not a tree) once duplicate spaces are canonicalized — see
    /// [`super::diagram::SuccessionDiagram`]'s `by_space` index.
    pub parents: Vec<NodeId>,
    pub phase: ExpansionPhase,
}

impl SdNode {
    pub fn root(id: NodeId, space: Space) -> SdNode {
        SdNode {
            id,
            space,
            parents: Vec::new(),
            phase: ExpansionPhase::Fresh,
        }
    }

    pub fn child(id: NodeId, space: Space, parent: NodeId) -> SdNode {
        SdNode {
            id,
            space,
            parents: vec![parent],
            phase: ExpansionPhase::Fresh,
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self.phase, ExpansionPhase::Expanded { .. })
    }

    /// Whether this node's expansion was abandoned after a recoverable oracle/budget error (§7).
    pub fn is_unknown(&self) -> bool {
        matches!(self.phase, ExpansionPhase::Unknown)
    }

    /// A node is a stub (no trap space strictly below it, i.e. a minimal trap space) once it's
    /// expanded and has no children.
    pub fn is_minimal(&self) -> bool {
        matches!(&self.phase, ExpansionPhase::Expanded { children, .. } if children.is_empty())
    }

    pub fn children(&self) -> &[NodeId] {
        match &self.phase {
            ExpansionPhase::Expanded { children, .. } => children,
            _ => &[],
        }
    }

    pub fn attractor_seeds(&self) -> &[GraphColoredVertices] {
        match &self.phase {
            ExpansionPhase::Expanded { attractor_seeds, .. } => attractor_seeds,
            _ => &[],
        }
    }
}
