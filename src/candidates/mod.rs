//! Candidate attractor-seed generation (§4.E).

pub mod generator;
pub mod retained_set;

pub use generator::generate_candidates;
