use crate::space::Space;
use biodivine_lib_param_bn::VariableId;

/// What a [`super::TrapSpaceOracle`] is asked to compute (§4.C).
#[derive(Clone, Debug)]
pub enum Kind {
    /// Every trap space below `enclosing` that has no proper trap space below it in turn (i.e.
    /// every free variable is a "real" choice — fixing it either way still percolates to a
    /// non-vacuous space).
    Minimal,
    /// Every maximal trap sub-space of `enclosing` reachable by branching only over `scope`'s
    /// variables, leaving every other free variable exactly as percolation left it (§4.G steps
    /// 2-4: `scope` is one block of the node's free-variable partition). An empty `scope` makes
    /// this degenerate to a single result: the percolation of `enclosing` itself.
    Maximal { scope: Vec<VariableId> },
    /// Does a trap space below `enclosing` exist that additionally fixes every variable in
    /// `literals` to the given value? Once every listed literal is satisfied, enumeration
    /// continues branching over any remaining free variables exactly as [`Kind::Minimal`] does,
    /// so each result is a genuine minimal trap space (a full state), not just a feasibility
    /// witness. Used by candidate generation (§4.E) to enumerate fixed points of the
    /// negative-relaxed network consistent with a retained set.
    FixExtension(Vec<(VariableId, bool)>),
}

#[derive(Clone, Debug)]
pub struct TrapSpaceQuery {
    pub enclosing: Space,
    pub kind: Kind,
    /// A hint for which free variable to branch on first (and so on), used by
    /// [`super::BacktrackingOracle`] under [`Kind::Minimal`] to resolve one block (§4.G.5) of the
    /// influence graph before moving to the next. Variables not listed here, or when this is
    /// empty, fall back to the oracle's natural order. Purely a performance hint: it can never
    /// change which trap spaces are found, only the order candidate branches are explored in.
    pub preferred_order: Vec<VariableId>,
}

impl TrapSpaceQuery {
    pub fn minimal_within(enclosing: Space) -> TrapSpaceQuery {
        TrapSpaceQuery {
            enclosing,
            kind: Kind::Minimal,
            preferred_order: Vec::new(),
        }
    }

    pub fn maximal_within(enclosing: Space) -> TrapSpaceQuery {
        TrapSpaceQuery {
            enclosing,
            kind: Kind::Maximal { scope: Vec::new() },
            preferred_order: Vec::new(),
        }
    }

    /// A `kind = max` query restricted to a single block's variables (§4.G step 3): every other
    /// free variable is left exactly as percolation found it.
    pub fn maximal_within_block(enclosing: Space, scope: Vec<VariableId>) -> TrapSpaceQuery {
        let order = scope.clone();
        TrapSpaceQuery {
            enclosing,
            kind: Kind::Maximal { scope },
            preferred_order: order,
        }
    }

    pub fn fix_extension(enclosing: Space, literals: Vec<(VariableId, bool)>) -> TrapSpaceQuery {
        TrapSpaceQuery {
            enclosing,
            kind: Kind::FixExtension(literals),
            preferred_order: Vec::new(),
        }
    }

    pub fn with_preferred_order(mut self, order: Vec<VariableId>) -> TrapSpaceQuery {
        self.preferred_order = order;
        self
    }
}
