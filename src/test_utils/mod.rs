pub mod llm_example_network;
pub mod llm_transition_builder;

use biodivine_lib_param_bn::BooleanNetwork;
use biodivine_lib_param_bn::biodivine_std::traits::Set;
use biodivine_lib_param_bn::symbolic_async_graph::{GraphColoredVertices, SymbolicAsyncGraph};

/// Names variables `a, b, c, ...` (up to 26), matching the single-letter names used throughout
/// this crate's unit tests.
fn var_name(i: usize) -> String {
    assert!(i < 26, "mk_boolean_network supports at most 26 variables");
    ((b'a' + i as u8) as char).to_string()
}

/// Whether `expr` references `name` as a whole token (not as part of a longer identifier).
fn references(expr: &str, name: &str) -> bool {
    expr.split(|c: char| !c.is_alphanumeric() && c != '_')
        .any(|token| token == name)
}

/// Builds a [`BooleanNetwork`] from update-function expressions, one per variable, named
/// `a, b, c, ...` in declaration order.
///
/// Mirrors the teacher's `llm_transition_builder::reconstruct_network` approach: declare an
/// "observable" (`-?`) edge for every variable referenced in another's update function, then
/// attach the update functions themselves, and let `infer_valid_graph` resolve the actual
/// monotonicity/essentiality of each edge from the function. We don't know monotonicity up
/// front since callers hand us a bare boolean expression, not a signed regulation.
///
/// # Panics
///
/// Panics if `exprs.len() != n`, if `n > 26`, or if the resulting AEON text fails to parse
/// (a malformed test fixture, not a runtime error condition this crate needs to handle).
pub fn mk_boolean_network(n: usize, exprs: &[&str]) -> BooleanNetwork {
    assert_eq!(exprs.len(), n, "need exactly one update expression per variable");
    let names: Vec<String> = (0..n).map(var_name).collect();

    let mut lines = Vec::new();
    for (i, expr) in exprs.iter().enumerate() {
        let mut referenced: Vec<&str> = names
            .iter()
            .filter(|name| references(expr, name))
            .map(|s| s.as_str())
            .collect();
        if referenced.is_empty() {
            // Constant or self-referencing-only function: AEON still requires at least one
            // declared edge, so fall back to a self-loop.
            referenced.push(names[i].as_str());
        }
        for regulator in referenced {
            lines.push(format!("{regulator} -? {}", names[i]));
        }
    }
    for (i, expr) in exprs.iter().enumerate() {
        lines.push(format!("${}: {expr}", names[i]));
    }

    let aeon_model = lines.join("\n");
    BooleanNetwork::try_from(aeon_model.as_str())
        .and_then(|it| it.infer_valid_graph())
        .unwrap_or_else(|e| panic!("mk_boolean_network: invalid AEON fixture: {e:?}"))
}

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Creates a singleton state from a state number.
///
/// The state number is interpreted as binary encoding (the most significant bit = variable 0).
/// The number of variables is inferred from the graph.
///
/// # Arguments
///
/// * `graph` - The symbolic async graph
/// * `state` - The state number (binary encoding: x0*2^(n-1) + x1*2^(n-2) + ... + x(n-1)*2^0)
///
/// # Example
///
/// For a 3-variable graph:
/// - `mk_state(graph, 0)` creates state `000`
/// - `mk_state(graph, 5)` creates state `101`
/// - `mk_state(graph, 7)` creates state `111`
pub fn mk_state(graph: &SymbolicAsyncGraph, state: u32) -> GraphColoredVertices {
    let vars: Vec<_> = graph.variables().collect();
    let num_vars = vars.len();

    assert!(
        state < (1u32 << num_vars),
        "State {} out of range for {} variables (max: {})",
        state,
        num_vars,
        (1u32 << num_vars) - 1
    );

    let mut assignments = Vec::new();
    for i in 0..num_vars {
        let shift = num_vars - 1 - i;
        let value = (state >> shift) & 1 == 1;
        assignments.push((vars[i], value));
    }

    graph.mk_subspace(&assignments)
}

/// Creates a set of states from a list of state numbers.
///
/// # Example
///
/// `mk_states(graph, &[0, 5, 7])` creates the set `{000, 101, 111}`.
pub fn mk_states(graph: &SymbolicAsyncGraph, states: &[u32]) -> GraphColoredVertices {
    let mut result = graph.mk_empty_colored_vertices();
    for &s in states {
        result = result.union(&mk_state(graph, s));
    }
    result
}

/// Collect all state numbers from a GraphColoredVertices set.
/// Returns a sorted vector of state numbers for comparison.
///
/// At the moment, this only supports up to 20 variables.
///
/// # Arguments
///
/// * `graph` - The symbolic async graph
/// * `set` - The set of colored vertices to extract state numbers from
/// * `num_vars` - The number of variables in the graph
///
/// # Example
///
/// For a 3-variable graph, if `set` contains states `{000, 101, 111}`, this returns `[0, 5, 7]`.
pub fn collect_state_numbers(
    graph: &SymbolicAsyncGraph,
    set: &GraphColoredVertices,
    num_vars: usize,
) -> Vec<u32> {
    assert!(num_vars <= 20);
    let mut states = Vec::new();
    let max_state = (1u32 << num_vars) - 1;
    for state in 0..=max_state {
        let state_set = mk_state(graph, state);
        if !state_set.intersect(set).is_empty() {
            states.push(state);
        }
    }
    states
}

/// Convert a slice of GraphColoredVertices sets to sorted sets of state numbers.
/// This is useful for comparing sets from different algorithms, as it normalizes
/// the representation and sorts them consistently.
///
/// # Arguments
///
/// * `graph` - The symbolic async graph
/// * `sets` - A slice of sets represented as GraphColoredVertices
/// * `num_vars` - The number of variables in the graph
///
/// # Returns
///
/// A vector of HashSets containing state numbers, sorted by size and then by sorted state numbers.
pub fn symbolic_sets_to_sorted_sets(
    graph: &SymbolicAsyncGraph,
    sets: &[GraphColoredVertices],
    num_vars: usize,
) -> Vec<std::collections::HashSet<u32>> {
    use std::collections::HashSet;

    let mut result: Vec<HashSet<u32>> = sets
        .iter()
        .map(|set| {
            collect_state_numbers(graph, set, num_vars)
                .into_iter()
                .collect()
        })
        .collect();

    // Sort by size, then by sorted state numbers for consistent ordering
    result.sort_by_cached_key(|s| {
        let mut v: Vec<u32> = s.iter().copied().collect();
        v.sort();
        (v.len(), v)
    });

    result
}
