//! Error taxonomy for succession-diagram construction and attractor detection.
//!
//! Following the convention used throughout this crate's dependencies (`cancel-this`,
//! `computation-process`), errors are small hand-rolled enums with manual `Display`/`Error`
//! implementations rather than derived via `thiserror`.

use std::fmt::{Display, Formatter};

/// A resource, as named by [`SdError::BudgetExceeded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Budget {
    SdNodes,
    BddSize,
    Candidates,
}

impl Display for Budget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Budget::SdNodes => write!(f, "max_sd_nodes"),
            Budget::BddSize => write!(f, "max_bdd_size"),
            Budget::Candidates => write!(f, "max_candidates"),
        }
    }
}

/// A single long-running operation, as named by [`SdError::Timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Percolation,
    TrapSpaceEnumeration,
    CandidateGeneration,
    CooperativeSimulation,
    SymbolicReachability,
    UnfoldingReachability,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Percolation => "percolation",
            Operation::TrapSpaceEnumeration => "trap-space enumeration",
            Operation::CandidateGeneration => "candidate generation",
            Operation::CooperativeSimulation => "cooperative simulation",
            Operation::SymbolicReachability => "symbolic reachability",
            Operation::UnfoldingReachability => "unfolding reachability",
        };
        write!(f, "{name}")
    }
}

/// The external tool involved in an [`SdError::OracleFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Oracle {
    TrapSpaceSolver,
    PetriNetUnfolding,
}

impl Display for Oracle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Oracle::TrapSpaceSolver => write!(f, "trap-space solver"),
            Oracle::PetriNetUnfolding => write!(f, "Petri-net unfolding tool"),
        }
    }
}

/// Errors that can occur while building a succession diagram or running an attractor/control
/// query against one.
///
/// Per the error handling policy: [`SdError::BudgetExceeded`], [`SdError::Timeout`] and
/// [`SdError::OracleFailure`] are *recoverable* and never escape node expansion or candidate
/// pruning — they instead mark the affected node as over-budget or `Unknown` and the caller
/// continues. Only [`SdError::Inconsistent`] and [`SdError::MalformedInput`] are ever returned
/// from a top-level call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdError {
    /// A resource cap configured via [`crate::config::SdConfig`] was hit.
    BudgetExceeded { what: Budget, limit: usize },
    /// An external oracle (trap-space solver, unfolding tool) returned unparseable output or
    /// a non-zero status.
    OracleFailure { tool: Oracle, detail: String },
    /// A per-call wall-clock budget was exceeded.
    Timeout { op: Operation },
    /// The symbolic and unfolding reachability oracles disagreed on the same query. This is
    /// always a bug (in this crate or in one of the oracle backends), never a recoverable
    /// outcome, and is surfaced with as much diagnostic context as is available.
    Inconsistent { detail: String },
    /// The network input itself was malformed. In practice this is raised by the (external)
    /// parser before a [`crate::SuccessionDiagram`] is ever constructed, but the variant is
    /// kept here so callers have a single error type to match on.
    MalformedInput { detail: String },
}

impl Display for SdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SdError::BudgetExceeded { what, limit } => {
                write!(f, "budget exceeded: {what} (limit={limit})")
            }
            SdError::OracleFailure { tool, detail } => {
                write!(f, "{tool} failed: {detail}")
            }
            SdError::Timeout { op } => write!(f, "timeout during {op}"),
            SdError::Inconsistent { detail } => {
                write!(f, "symbolic and unfolding oracles disagree: {detail}")
            }
            SdError::MalformedInput { detail } => write!(f, "malformed input: {detail}"),
        }
    }
}

impl std::error::Error for SdError {}

impl SdError {
    /// Whether this error should be absorbed at the node level (marking that node `Unknown`)
    /// rather than propagated out of diagram expansion.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SdError::BudgetExceeded { .. } | SdError::Timeout { .. } | SdError::OracleFailure { .. }
        )
    }
}

impl From<cancel_this::Cancelled> for SdError {
    /// A cooperative cancellation is folded into a [`SdError::Timeout`] at the boundary where
    /// a `Cancellable<T>` is unwrapped into node state, mirroring how the teacher's
    /// `Computation::compute` unwraps `Incomplete::Cancelled`.
    fn from(_value: cancel_this::Cancelled) -> Self {
        SdError::Timeout {
            op: Operation::Percolation,
        }
    }
}

/// The outcome of an operation that may legitimately not know the answer (a node marked
/// over-budget, or an oracle that returned `unknown`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unknown {
    /// The result could not be determined within the configured resource limits.
    Unknown,
}

/// A result that is either a definite value or [`Unknown`].
pub type MaybeKnown<T> = Result<T, Unknown>;
