//! The succession diagram (§4.G): a DAG of trap spaces built by repeated percolation and
//! minimal-trap-space enumeration, each node carrying its own pruned attractor seeds.

pub mod block;
pub mod diagram;
pub mod expand;
pub mod node;

pub use diagram::SuccessionDiagram;
pub use node::{ExpansionPhase, NodeId, SdNode};

#[cfg(test)]
mod scenarios;
