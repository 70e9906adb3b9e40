//! Candidate pruning (§4.F): reduces the candidate attractor-seed states produced by
//! [`crate::candidates`] down to one representative per actual attractor, via a cheap
//! simulation pre-filter followed by exact reachability cross-checking.

pub mod pruner;
pub mod reachability;
pub mod simulation;
pub mod symbolic;
pub mod unfolding;

pub use pruner::prune;
pub use reachability::ReachabilityOracle;
pub use symbolic::SymbolicReachabilityOracle;
pub use unfolding::UnfoldingReachabilityOracle;
