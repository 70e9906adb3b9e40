//! Petri-net encoding of a Boolean network (§4.B): two places per variable, one transition per
//! DNF clause of each update function. Used by the unfolding reachability oracle (§4.F) as an
//! independent cross-check against the symbolic (BDD) oracle.
//!
//! Grounded in the same vocabulary as a general-purpose Petri net crate (`PlaceId`,
//! `TransitionId`, a `Marking`/`MarkingFn` pair), but scoped down to what a 1-safe,
//! two-places-per-variable net needs: there is no boundedness/liveness analysis here, since
//! every place in this encoding is 1-safe by construction.

pub mod encoding;
pub mod restriction;

use biodivine_lib_param_bn::VariableId;
use std::collections::{BTreeMap, HashMap};

pub use encoding::build_petri_net;
pub use restriction::restrict_to_space;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlaceId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionId(pub usize);

/// Either 0 or 1 token. Every place in this encoding is 1-safe: `v_i^0` and `v_i^1` never both
/// hold a token, since that would mean variable `i` is simultaneously 0 and 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tokens(pub u8);

pub trait MarkingFn: Clone + Eq + std::hash::Hash {
    fn get(&self, id: &PlaceId) -> Tokens;
    fn set(&mut self, id: PlaceId, tokens: Tokens);
}

/// A marking as the (small) set of places currently holding a token.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Marking(BTreeMap<PlaceId, Tokens>);

impl MarkingFn for Marking {
    fn get(&self, id: &PlaceId) -> Tokens {
        self.0.get(id).copied().unwrap_or_default()
    }

    fn set(&mut self, id: PlaceId, tokens: Tokens) {
        if tokens.0 == 0 {
            self.0.remove(&id);
        } else {
            self.0.insert(id, tokens);
        }
    }
}

/// One DNF-clause transition for `f_i = target_value`: consumes `v_i^{!target_value}` and the
/// places asserted by `guard`, produces `v_i^{target_value}`.
#[derive(Debug, Clone)]
pub struct Transition {
    pub id: TransitionId,
    pub variable: VariableId,
    pub target_value: bool,
    /// The DNF clause's literals over the *other* variables (this transition's own variable is
    /// handled via the fixed `v_i^0 -> v_i^1` / `v_i^1 -> v_i^0` input/output pair, not a guard
    /// literal, since firing is exactly what changes it).
    pub guard: Vec<(VariableId, bool)>,
}

/// A Petri-net encoding of a network, restricted to `variables` (initially, the whole network;
/// see [`restrict_to_space`] for how an enclosing trap space narrows this down).
#[derive(Debug, Clone)]
pub struct PetriNet {
    pub variables: Vec<VariableId>,
    place_zero: HashMap<VariableId, PlaceId>,
    place_one: HashMap<VariableId, PlaceId>,
    pub transitions: Vec<Transition>,
    pub initial_marking: Marking,
}

impl PetriNet {
    pub(crate) fn new(
        variables: Vec<VariableId>,
        place_zero: HashMap<VariableId, PlaceId>,
        place_one: HashMap<VariableId, PlaceId>,
        transitions: Vec<Transition>,
        initial_marking: Marking,
    ) -> PetriNet {
        PetriNet {
            variables,
            place_zero,
            place_one,
            transitions,
            initial_marking,
        }
    }

    pub fn place_for(&self, var: VariableId, value: bool) -> PlaceId {
        let table = if value { &self.place_one } else { &self.place_zero };
        table[&var]
    }

    /// Builds the marking corresponding to a fully-assigned state.
    pub fn marking_of_state<I: IntoIterator<Item = (VariableId, bool)>>(&self, state: I) -> Marking {
        let mut marking = Marking::default();
        for (var, value) in state {
            marking.set(self.place_for(var, value), Tokens(1));
        }
        marking
    }

    /// Recovers the full state assignment from a marking (assumes exactly one of each
    /// variable's two places holds a token, i.e. the marking is well-formed).
    pub fn state_of_marking(&self, marking: &Marking) -> Vec<(VariableId, bool)> {
        self.variables
            .iter()
            .map(|&var| {
                let value = marking.get(&self.place_one[&var]).0 == 1;
                (var, value)
            })
            .collect()
    }

    fn is_enabled(&self, marking: &Marking, transition: &Transition) -> bool {
        let source = self.place_for(transition.variable, !transition.target_value);
        if marking.get(&source).0 != 1 {
            return false;
        }
        transition
            .guard
            .iter()
            .all(|&(var, value)| marking.get(&self.place_for(var, value)).0 == 1)
    }

    /// Transitions enabled in `marking`, in declaration order.
    pub fn enabled(&self, marking: &Marking) -> Vec<TransitionId> {
        self.transitions
            .iter()
            .filter(|t| self.is_enabled(marking, t))
            .map(|t| t.id)
            .collect()
    }

    /// Fires `transition`, returning the resulting marking. Panics if not enabled (callers are
    /// expected to check [`PetriNet::enabled`] first, mirroring how the symbolic kernel assumes
    /// a pre-filtered `var_can_post` set).
    pub fn fire(&self, marking: &Marking, transition_id: TransitionId) -> Marking {
        let transition = &self.transitions[transition_id.0];
        debug_assert!(self.is_enabled(marking, transition));
        let mut next = marking.clone();
        next.set(self.place_for(transition.variable, !transition.target_value), Tokens(0));
        next.set(self.place_for(transition.variable, transition.target_value), Tokens(1));
        next
    }
}
