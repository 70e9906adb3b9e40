use crate::error::{Oracle, SdError};
use crate::space::Space;
use crate::trap_space::config::{Kind, TrapSpaceQuery};
use crate::trap_space::oracle::TrapSpaceOracle;
use biodivine_lib_param_bn::symbolic_async_graph::SymbolicAsyncGraph;
use std::process::Command;

/// A trap-space solver backed by an external answer-set-programming tool (§4.C "externally
/// pluggable").
///
/// [`BacktrackingOracle`](super::BacktrackingOracle) is adequate for the networks this crate is
/// tested against, but a deployment that already runs a dedicated ASP solver for trap-space
/// enumeration on much larger networks can swap it in via this adapter instead, since both
/// implement the same [`TrapSpaceOracle`] trait.
///
/// This adapter shells out to a solver binary, feeding it the network's percolated literal
/// clauses and parsing back one answer set per line as `var=0`/`var=1` assignments. It does not
/// assume a specific solver's CLI surface; `program` and `extra_args` are filled in by the
/// caller to match whatever is installed.
pub struct ExternalAspOracle {
    program: String,
    extra_args: Vec<String>,
}

impl ExternalAspOracle {
    pub fn new(program: impl Into<String>) -> ExternalAspOracle {
        ExternalAspOracle {
            program: program.into(),
            extra_args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> ExternalAspOracle {
        self.extra_args.extend(args);
        self
    }
}

impl TrapSpaceOracle for ExternalAspOracle {
    fn solve(
        &self,
        graph: &SymbolicAsyncGraph,
        query: TrapSpaceQuery,
        max_results: usize,
    ) -> Result<Vec<Space>, SdError> {
        let mode_arg = match &query.kind {
            Kind::Minimal => "--minimal".to_string(),
            Kind::Maximal { scope } => {
                if scope.is_empty() {
                    "--maximal".to_string()
                } else {
                    format!(
                        "--maximal --scope={}",
                        scope
                            .iter()
                            .map(|v| v.to_index().to_string())
                            .collect::<Vec<_>>()
                            .join(",")
                    )
                }
            }
            Kind::FixExtension(literals) => format!(
                "--fix={}",
                literals
                    .iter()
                    .map(|(var, b)| format!("{}={}", var.to_index(), *b as u8))
                    .collect::<Vec<_>>()
                    .join(",")
            ),
        };

        let output = Command::new(&self.program)
            .args(&self.extra_args)
            .arg(mode_arg)
            .arg(format!("--limit={max_results}"))
            .output()
            .map_err(|e| SdError::OracleFailure {
                tool: Oracle::TrapSpaceSolver,
                detail: format!("failed to launch `{}`: {e}", self.program),
            })?;

        if !output.status.success() {
            return Err(SdError::OracleFailure {
                tool: Oracle::TrapSpaceSolver,
                detail: format!(
                    "`{}` exited with {}: {}",
                    self.program,
                    output.status,
                    String::from_utf8_lossy(&output.stderr)
                ),
            });
        }

        parse_answer_sets(graph, &output.stdout)
    }
}

/// Parses one trap space per line, each a comma-separated list of `<var index>=<0|1>` literals.
fn parse_answer_sets(graph: &SymbolicAsyncGraph, stdout: &[u8]) -> Result<Vec<Space>, SdError> {
    let text = String::from_utf8_lossy(stdout);
    let vars: Vec<_> = graph.variables().collect();

    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut fixings = Vec::new();
            for literal in line.split(',') {
                let (index, value) =
                    literal
                        .trim()
                        .split_once('=')
                        .ok_or_else(|| SdError::OracleFailure {
                            tool: Oracle::TrapSpaceSolver,
                            detail: format!("malformed literal `{literal}`"),
                        })?;
                let index: usize = index.parse().map_err(|_| SdError::OracleFailure {
                    tool: Oracle::TrapSpaceSolver,
                    detail: format!("malformed variable index `{index}`"),
                })?;
                let var = *vars.get(index).ok_or_else(|| SdError::OracleFailure {
                    tool: Oracle::TrapSpaceSolver,
                    detail: format!("variable index {index} out of range"),
                })?;
                fixings.push((var, value.trim() == "1"));
            }
            Ok(Space::from_fixings(fixings))
        })
        .collect()
}
