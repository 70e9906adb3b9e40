use crate::error::SdError;
use crate::space::{Space, percolate};
use crate::trap_space::config::{Kind, TrapSpaceQuery};
use crate::trap_space::oracle::TrapSpaceOracle;
use biodivine_lib_param_bn::VariableId;
use biodivine_lib_param_bn::symbolic_async_graph::SymbolicAsyncGraph;
use cancel_this::is_cancelled;
use computation_process::Incomplete::Suspended;
use computation_process::{Generator, GeneratorStep};

/// An in-process trap-space solver: explicit-stack backtracking search, percolating at every
/// node the way [`crate::space::percolate`] does for a single space, branching on a free
/// variable only when percolation alone doesn't resolve it.
///
/// Driven as a [`computation_process::Generator`] rather than plain recursion so that the
/// cooperative-cancellation check in [`BacktrackingStep::step`] actually gets a chance to run
/// between branches, the same way the teacher's SCC/reachability algorithms stay responsive to
/// `is_cancelled!()` during a long symbolic fixed-point loop.
pub struct BacktrackingOracle;

impl TrapSpaceOracle for BacktrackingOracle {
    fn solve(
        &self,
        graph: &SymbolicAsyncGraph,
        query: TrapSpaceQuery,
        max_results: usize,
    ) -> Result<Vec<Space>, SdError> {
        let context = BacktrackingContext {
            graph: graph.clone(),
            kind: query.kind,
            preferred_order: query.preferred_order,
        };
        let generator =
            BacktrackingGenerator::configure(context, BacktrackingState::from(query.enclosing));

        let mut results = Vec::new();
        for item in generator {
            let space = item?;
            results.push(space);
            if results.len() >= max_results {
                break;
            }
        }
        Ok(results)
    }
}

pub(crate) struct BacktrackingContext {
    graph: SymbolicAsyncGraph,
    kind: Kind,
    preferred_order: Vec<VariableId>,
}

/// Picks the next variable to branch on: the first entry of `preferred_order` that is still
/// free, or else the first free variable in the oracle's natural order.
fn pick_branch_variable(preferred_order: &[VariableId], free: &[VariableId]) -> Option<VariableId> {
    preferred_order
        .iter()
        .copied()
        .find(|v| free.contains(v))
        .or_else(|| free.first().copied())
}

pub(crate) struct BacktrackingState {
    stack: Vec<Space>,
}

impl From<Space> for BacktrackingState {
    fn from(enclosing: Space) -> BacktrackingState {
        BacktrackingState {
            stack: vec![enclosing],
        }
    }
}

pub(crate) struct BacktrackingStep;

type BacktrackingGenerator =
    Generator<BacktrackingContext, BacktrackingState, Space, BacktrackingStep>;

impl GeneratorStep<BacktrackingContext, BacktrackingState, Space> for BacktrackingStep {
    fn step(
        context: &BacktrackingContext,
        state: &mut BacktrackingState,
    ) -> computation_process::Completable<Option<Space>> {
        is_cancelled!()?;

        let Some(current) = state.stack.pop() else {
            return Ok(None);
        };

        let perc = percolate(&context.graph, &current);
        if perc.to_symbolic(&context.graph).is_empty() {
            // Over-constrained: this branch of the search tree is dead.
            return Err(Suspended);
        }

        match &context.kind {
            Kind::Maximal { scope } => {
                let free = perc.free_variables(&context.graph);
                let scoped_free: Vec<VariableId> = if scope.is_empty() {
                    Vec::new()
                } else {
                    free.iter().copied().filter(|v| scope.contains(v)).collect()
                };
                match pick_branch_variable(&context.preferred_order, &scoped_free) {
                    None => Ok(Some(perc)),
                    Some(var) => {
                        push_branch(&mut state.stack, &perc, var, false);
                        push_branch(&mut state.stack, &perc, var, true);
                        Err(Suspended)
                    }
                }
            }
            Kind::Minimal => {
                let free = perc.free_variables(&context.graph);
                match pick_branch_variable(&context.preferred_order, &free) {
                    None => Ok(Some(perc)),
                    Some(var) => {
                        push_branch(&mut state.stack, &perc, var, false);
                        push_branch(&mut state.stack, &perc, var, true);
                        Err(Suspended)
                    }
                }
            }
            Kind::FixExtension(literals) => {
                let conflict = literals.iter().any(|&(var, b)| perc.get(var) == Some(!b));
                if conflict {
                    return Err(Suspended);
                }
                let next_target = literals.iter().find(|&&(var, _)| perc.get(var).is_none());
                match next_target {
                    Some(&(var, forced)) => {
                        push_branch(&mut state.stack, &perc, var, forced);
                        Err(Suspended)
                    }
                    None => {
                        // Every requested literal is satisfied; keep branching over whatever is
                        // still free so each result is a genuine minimal trap space (§4.E).
                        let free = perc.free_variables(&context.graph);
                        match pick_branch_variable(&context.preferred_order, &free) {
                            None => Ok(Some(perc)),
                            Some(var) => {
                                push_branch(&mut state.stack, &perc, var, false);
                                push_branch(&mut state.stack, &perc, var, true);
                                Err(Suspended)
                            }
                        }
                    }
                }
            }
        }
    }
}

fn push_branch(stack: &mut Vec<Space>, base: &Space, var: VariableId, value: bool) {
    let mut fixings: Vec<(VariableId, bool)> = base.fixings().collect();
    fixings.push((var, value));
    stack.push(Space::from_fixings(fixings));
}
