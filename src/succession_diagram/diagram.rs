//! The succession diagram itself (§4.G): a DAG of percolated trap spaces, built lazily and
//! expanded according to a configured [`ExpansionStrategy`].

use crate::config::{ExpansionStrategy, SdConfig};
use crate::error::SdError;
use crate::influence_graph::InfluenceGraph;
use crate::space::{Space, percolate};
use crate::succession_diagram::expand::expand_node;
use crate::succession_diagram::node::{ExpansionPhase, NodeId, SdNode};
use crate::trap_space::TrapSpaceOracle;
use biodivine_lib_param_bn::BooleanNetwork;
use biodivine_lib_param_bn::VariableId;
use biodivine_lib_param_bn::symbolic_async_graph::SymbolicAsyncGraph;
use log::debug;
use std::collections::{HashMap, VecDeque};

/// A succession diagram over a single Boolean network, built against one [`TrapSpaceOracle`]
/// backend and one [`SdConfig`].
pub struct SuccessionDiagram {
    graph: SymbolicAsyncGraph,
    bn: BooleanNetwork,
    influence: InfluenceGraph,
    oracle: Box<dyn TrapSpaceOracle>,
    config: SdConfig,
    nodes: Vec<SdNode>,
    by_space: HashMap<Vec<(VariableId, bool)>, NodeId>,
}

impl SuccessionDiagram {
    /// Builds a diagram with just its root node (the percolation of the unconstrained space).
    /// Call [`SuccessionDiagram::expand`] to materialize the rest.
    pub fn new(
        graph: SymbolicAsyncGraph,
        bn: BooleanNetwork,
        oracle: Box<dyn TrapSpaceOracle>,
        config: SdConfig,
    ) -> SuccessionDiagram {
        let influence = InfluenceGraph::from_network(&bn);
        let root_space = percolate(&graph, &Space::unconstrained());

        let mut diagram = SuccessionDiagram {
            graph,
            bn,
            influence,
            oracle,
            config,
            nodes: Vec::new(),
            by_space: HashMap::new(),
        };
        diagram.insert_node(root_space, None);
        diagram
    }

    pub fn graph(&self) -> &SymbolicAsyncGraph {
        &self.graph
    }

    pub fn network(&self) -> &BooleanNetwork {
        &self.bn
    }

    pub fn config(&self) -> &SdConfig {
        &self.config
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &SdNode {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> &[SdNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn insert_node(&mut self, space: Space, parent: Option<NodeId>) -> NodeId {
        let key = space.canonical_key();
        if let Some(&existing) = self.by_space.get(&key) {
            if let Some(p) = parent {
                if !self.nodes[existing.0].parents.contains(&p) {
                    self.nodes[existing.0].parents.push(p);
                }
            }
            return existing;
        }
        let id = NodeId(self.nodes.len());
        let node = match parent {
            None => SdNode::root(id, space),
            Some(p) => SdNode::child(id, space, p),
        };
        self.by_space.insert(key, id);
        self.nodes.push(node);
        id
    }

    /// Expands the diagram per `config.expansion` (§4.G): materializes children, pruned
    /// attractor seeds, and updates every visited node's [`ExpansionPhase`].
    pub fn expand(&mut self) -> Result<(), SdError> {
        // Under `MinimalOnly`, every minimal trap space of the root is also a minimal trap space
        // anywhere below it (trap-space nesting is transitive), so we can learn the total count
        // up front with a single query and stop the expansion loop as soon as we've found that
        // many minimal (childless) nodes, rather than expanding every internal node.
        let minimal_target = if self.config.expansion == ExpansionStrategy::MinimalOnly {
            let root_space = self.node(self.root()).space.clone();
            let query = crate::trap_space::TrapSpaceQuery::minimal_within(root_space);
            Some(self.oracle.solve(&self.graph, query, self.config.max_sd_nodes)?.len())
        } else {
            None
        };
        let mut minimal_found = 0usize;

        let mut worklist: VecDeque<NodeId> = VecDeque::new();
        worklist.push_back(self.root());

        while let Some(id) = self.next_to_visit(&mut worklist) {
            if self.node(id).is_expanded() {
                continue;
            }
            if let Some(target) = minimal_target {
                if minimal_found >= target {
                    break;
                }
            }
            if self.nodes.len() > self.config.max_sd_nodes {
                // Recoverable (§7): this node alone is abandoned, not the whole diagram.
                debug!("node {} abandoned: max_sd_nodes exceeded", id.0);
                self.nodes[id.0].phase = ExpansionPhase::Unknown;
                continue;
            }

            debug!("expanding node {} (space len={})", id.0, self.node(id).space.len());
            match self.expand_one(id, &mut worklist) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => {
                    debug!("node {} marked unknown: {e}", id.0);
                    self.nodes[id.0].phase = ExpansionPhase::Unknown;
                }
                Err(e) => return Err(e),
            }
            if self.node(id).is_minimal() {
                minimal_found += 1;
            }
        }

        Ok(())
    }

    fn next_to_visit(&self, worklist: &mut VecDeque<NodeId>) -> Option<NodeId> {
        match self.config.expansion {
            ExpansionStrategy::Dfs => worklist.pop_back(),
            _ => worklist.pop_front(),
        }
    }

    fn expand_one(&mut self, id: NodeId, worklist: &mut VecDeque<NodeId>) -> Result<(), SdError> {
        let space = self.node(id).space.clone();
        let result = expand_node(
            &self.graph,
            &self.bn,
            &self.influence,
            self.oracle.as_ref(),
            &self.config,
            &space,
        )?;

        let mut child_ids = Vec::with_capacity(result.child_spaces.len());
        for child_space in result.child_spaces {
            child_ids.push(self.insert_node(child_space, Some(id)));
        }

        for &to_enqueue in &self.children_to_enqueue(&child_ids) {
            worklist.push_back(to_enqueue);
        }

        self.nodes[id.0].phase = ExpansionPhase::Expanded {
            children: child_ids,
            attractor_seeds: result.attractor_seeds,
        };
        Ok(())
    }

    /// Under [`ExpansionStrategy::Target`], only children whose space is an ancestor of the
    /// target (i.e. the target space is nested inside them) are worth expanding further, plus one
    /// sibling so the control planner can still compare driver sets against an alternative
    /// branch. Every other strategy expands every child.
    fn children_to_enqueue(&self, child_ids: &[NodeId]) -> Vec<NodeId> {
        let ExpansionStrategy::Target(target) = &self.config.expansion else {
            return child_ids.to_vec();
        };

        let mut matching = Vec::new();
        let mut sibling = None;
        for &id in child_ids {
            let space = &self.node(id).space;
            if target.is_subspace_of(space) {
                matching.push(id);
            } else if sibling.is_none() {
                sibling = Some(id);
            }
        }
        if let Some(sibling) = sibling {
            matching.push(sibling);
        }
        matching
    }
}
