//! Partial assignments ("spaces") over the variables of a Boolean network, and percolation.
//!
//! A [`Space`] is the crate's Rust binding for a sub-hypercube of `{0,1}^n`: a finite partial
//! map from [`VariableId`] to `bool`. Trap spaces (§3) are spaces that are closed under
//! [`percolate`].

use biodivine_lib_param_bn::VariableId;
use biodivine_lib_param_bn::biodivine_std::traits::Set;
use biodivine_lib_param_bn::symbolic_async_graph::{GraphColoredVertices, SymbolicAsyncGraph};
use std::collections::BTreeMap;

/// A partial assignment `S : Variable ⇀ {0,1}`.
///
/// Ordering is by *inclusion of fixings*: `a ⊑ b` (`a` is "more fixed" / smaller, i.e. `a` is
/// a sub-space of `b`) iff `dom(b) ⊆ dom(a)` and `a` agrees with `b` on `dom(b)`. We expose this
/// as [`Space::is_subspace_of`] rather than implementing `PartialOrd`, since the natural partial
/// order on spaces is inverted with respect to `⊑` as defined in the spec (smaller space =
/// more fixings = a *subset* of the larger space's states).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Space {
    fixed: BTreeMap<VariableId, bool>,
}

impl Space {
    /// The unconstrained space `⋆^n` (no variable fixed).
    pub fn unconstrained() -> Space {
        Space {
            fixed: BTreeMap::new(),
        }
    }

    pub fn from_fixings<I: IntoIterator<Item = (VariableId, bool)>>(fixings: I) -> Space {
        Space {
            fixed: fixings.into_iter().collect(),
        }
    }

    /// The dimension `n - |dom S|`, i.e. the number of free variables, given the total
    /// variable count `n`.
    pub fn dimension(&self, n: usize) -> usize {
        n - self.fixed.len()
    }

    pub fn is_fixed(&self, var: VariableId) -> bool {
        self.fixed.contains_key(&var)
    }

    pub fn get(&self, var: VariableId) -> Option<bool> {
        self.fixed.get(&var).copied()
    }

    pub fn fixings(&self) -> impl Iterator<Item = (VariableId, bool)> + '_ {
        self.fixed.iter().map(|(v, b)| (*v, *b))
    }

    pub fn len(&self) -> usize {
        self.fixed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty()
    }

    /// Free variables of this space, given the full variable set of the network.
    pub fn free_variables(&self, graph: &SymbolicAsyncGraph) -> Vec<VariableId> {
        graph
            .variables()
            .filter(|v| !self.fixed.contains_key(v))
            .collect()
    }

    /// `self ⊑ other`: `self` is at least as fixed as `other` and agrees with it everywhere
    /// `other` is fixed (i.e. `self`'s states are a subset of `other`'s states).
    pub fn is_subspace_of(&self, other: &Space) -> bool {
        other
            .fixed
            .iter()
            .all(|(var, b)| self.fixed.get(var) == Some(b))
    }

    /// Two spaces are *compatible* if they do not fix any shared variable to different values.
    pub fn is_compatible_with(&self, other: &Space) -> bool {
        for (var, b) in &self.fixed {
            if let Some(other_b) = other.fixed.get(var) {
                if other_b != b {
                    return false;
                }
            }
        }
        true
    }

    /// The intersection of two compatible spaces (union of fixings). Returns `None` if the
    /// spaces are incompatible.
    pub fn intersect(&self, other: &Space) -> Option<Space> {
        if !self.is_compatible_with(other) {
            return None;
        }
        let mut fixed = self.fixed.clone();
        fixed.extend(other.fixed.iter().map(|(v, b)| (*v, *b)));
        Some(Space { fixed })
    }

    /// Whether a fully-assigned state (given as fixings for every variable) is contained in
    /// this space.
    pub fn contains_state<I: IntoIterator<Item = (VariableId, bool)>>(&self, state: I) -> bool {
        let state: BTreeMap<VariableId, bool> = state.into_iter().collect();
        self.fixed.iter().all(|(var, b)| state.get(var) == Some(b))
    }

    /// The symbolic (BDD-backed) vertex set corresponding to this space's completions.
    pub fn to_symbolic(&self, graph: &SymbolicAsyncGraph) -> GraphColoredVertices {
        let assignments: Vec<(VariableId, bool)> = self.fixings().collect();
        graph.mk_subspace(&assignments)
    }

    /// A canonical key suitable for deduplicating SD nodes by space content (§9: "duplicate
    /// nodes do arise and must be canonicalized by space content").
    pub fn canonical_key(&self) -> Vec<(VariableId, bool)> {
        self.fixings().collect()
    }
}

/// Returns `Some(b)` if `f_var` is constant `b` over every completion of `universe`
/// (the symbolic set corresponding to a [`Space`]), `None` if it is not constant.
///
/// This is the core primitive behind [`percolate`] (§4.A): we split `universe` into the
/// sub-sets where `var` is currently `0` and where it is `1`, and check whether firing `var`
/// is enabled exactly on the states where the *other* value is needed — i.e. whether every
/// completion agrees on `f_var`.
fn constant_value(
    graph: &SymbolicAsyncGraph,
    universe: &GraphColoredVertices,
    current_fixings: &[(VariableId, bool)],
    var: VariableId,
) -> Option<bool> {
    let mut fixings_0 = current_fixings.to_vec();
    fixings_0.push((var, false));
    let u0 = graph.mk_subspace(&fixings_0).intersect(universe);

    let mut fixings_1 = current_fixings.to_vec();
    fixings_1.push((var, true));
    let u1 = graph.mk_subspace(&fixings_1).intersect(universe);

    // States where `var` is enabled to fire (f_var(x) != x_var).
    let enabled = graph.var_can_post(var, universe);

    let enabled_from_0 = enabled.intersect(&u0); // f_var = 1 here
    let enabled_from_1 = enabled.intersect(&u1); // f_var = 0 here
    let stable_in_1 = u1.minus(&enabled_from_1); // f_var = 1 here (no change needed)
    let stable_in_0 = u0.minus(&enabled_from_0); // f_var = 0 here (no change needed)

    let f_var_is_0 = enabled_from_1.union(&stable_in_0);
    let f_var_is_1 = enabled_from_0.union(&stable_in_1);

    if f_var_is_0.is_empty() && !f_var_is_1.is_empty() {
        Some(true)
    } else if f_var_is_1.is_empty() && !f_var_is_0.is_empty() {
        Some(false)
    } else {
        None
    }
}

/// Percolation `perc_F(S)`: the iterated fixed point of extending `S` with any free variable
/// whose update function is constant over all of `S`'s completions.
///
/// Terminates because each iteration either fixes at least one more variable or stops; there
/// are at most `n` variables to fix. If the input was a trap space, the result is a trap space
/// (P1: idempotent — calling this again on the result is a no-op).
pub fn percolate(graph: &SymbolicAsyncGraph, space: &Space) -> Space {
    let mut current = space.clone();
    loop {
        let universe = current.to_symbolic(graph);
        if universe.is_empty() {
            // The space is vacuous (over-constrained); nothing more to do.
            return current;
        }

        let mut progressed = false;
        let current_fixings: Vec<(VariableId, bool)> = current.fixings().collect();
        for var in graph.variables() {
            if current.is_fixed(var) {
                continue;
            }
            if let Some(b) = constant_value(graph, &universe, &current_fixings, var) {
                current.fixed.insert(var, b);
                progressed = true;
            }
        }

        if !progressed {
            return current;
        }
    }
}
