//! Succession diagrams and attractor detection for asynchronous Boolean networks.
//!
//! A succession diagram (Trneny et al.) is a DAG of trap spaces: the root is the percolation
//! (§4.A) of the whole state space, and every node's children are the maximal trap sub-spaces
//! (§4.C) obtained by resolving one block of its free variables at a time (§4.G), so a node may
//! need several levels of children before reaching a minimal trap space. Leaves of the diagram are
//! minimal trap spaces, and every node additionally
//! carries zero or more "motif-avoidant" attractor seeds of its own, found by generating
//! candidate states from the network's negative feedback vertex set (§4.D/§4.E) and pruning them
//! against the node's children (§4.F). The diagram as a whole enumerates every attractor of the
//! network without ever exploring the full, exponentially large state space directly.
//!
//! # Main Modules
//!
//! - [`space`]: partial assignments ("spaces") and percolation
//! - [`influence_graph`] / [`nfvs`]: the signed influence graph and negative feedback vertex sets
//! - [`petri_net`]: a Petri-net encoding of the network, used by the unfolding reachability oracle
//! - [`trap_space`]: pluggable minimal/maximal trap-space enumeration
//! - [`candidates`]: retained-set-based candidate attractor-seed generation
//! - [`pruning`]: simulation pre-filtering and exact reachability cross-checking of candidates
//! - [`succession_diagram`]: the diagram itself and its expansion loop
//! - [`control`]: driver-set search for forcing convergence to a chosen node
//! - [`results`]: reporting queries over a built diagram
//!
//! The symbolic kernel this all sits on ([`reachability`], [`scc`], [`trimming`]) is the same
//! BDD-based forward/backward reachability and SCC toolkit used for the rest of the crate.
//!
//! # Quick Start
//!
//! ```no_run
//! use biodivine_succession_diagram::config::SdConfig;
//! use biodivine_succession_diagram::succession_diagram::SuccessionDiagram;
//! use biodivine_succession_diagram::trap_space::BacktrackingOracle;
//! use biodivine_succession_diagram::results;
//! use biodivine_lib_param_bn::BooleanNetwork;
//! use biodivine_lib_param_bn::symbolic_async_graph::SymbolicAsyncGraph;
//!
//! let bn = BooleanNetwork::try_from_file("model.aeon").unwrap();
//! let graph = SymbolicAsyncGraph::new(&bn).unwrap();
//!
//! let mut sd = SuccessionDiagram::new(graph, bn, Box::new(BacktrackingOracle), SdConfig::new());
//! sd.expand().unwrap();
//!
//! let summary = results::summary(&sd);
//! println!("{} nodes, {} attractors", summary.node_count, summary.attractor_count);
//! ```

use biodivine_lib_param_bn::symbolic_async_graph::GraphColoredVertices;

#[cfg(test)]
mod test_utils;

pub mod candidates;
pub mod config;
pub mod control;
pub mod error;
pub mod influence_graph;
pub mod nfvs;
pub mod petri_net;
pub mod pruning;
pub mod reachability;
pub mod results;
pub mod scc;
mod sim;
pub mod space;
pub mod succession_diagram;
pub mod trap_space;
pub mod trimming;

pub use config::SdConfig;
pub use error::SdError;
pub use succession_diagram::SuccessionDiagram;

/// A utility method for printing useful metadata of symbolic sets.
fn log_set(set: &GraphColoredVertices) -> String {
    format!(
        "elements={}; BDD nodes={}",
        set.exact_cardinality(),
        set.symbolic_size()
    )
}

/// Extract the "simple name" of a type argument at compile time.
///
/// In the future, this should be a `const fn`, but `type_name` and `unwrap_or` are not
/// yet stabilized as `const` functions (even thought they probably are).
fn simple_type_name<T>() -> &'static str {
    std::any::type_name::<T>().split("::").last().unwrap_or("?")
}
