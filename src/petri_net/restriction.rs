use super::{Marking, PetriNet, Tokens, Transition, TransitionId};
use crate::space::Space;

/// Restricts a Petri net to an enclosing trap space (§4.B "restriction to an enclosing space"):
/// drops transitions on already-fixed variables (they can never fire again once the space has
/// percolated), drops transitions whose guard contradicts the space, and trims guard literals
/// that the space already guarantees.
pub fn restrict_to_space(net: &PetriNet, space: &Space) -> PetriNet {
    let mut transitions = Vec::new();
    let mut next_id = 0usize;

    for transition in &net.transitions {
        if space.is_fixed(transition.variable) {
            continue;
        }
        let mut conflicts = false;
        let mut guard = Vec::new();
        for &(var, value) in &transition.guard {
            match space.get(var) {
                Some(fixed) if fixed != value => {
                    conflicts = true;
                    break;
                }
                Some(_) => {} // already guaranteed by the space, drop the redundant literal
                None => guard.push((var, value)),
            }
        }
        if conflicts {
            continue;
        }
        transitions.push(Transition {
            id: TransitionId(next_id),
            variable: transition.variable,
            target_value: transition.target_value,
            guard,
        });
        next_id += 1;
    }

    let mut initial_marking = Marking::default();
    for &var in &net.variables {
        let value = space.get(var).unwrap_or(false);
        initial_marking.set(net.place_for(var, value), Tokens(1));
    }

    PetriNet::new(
        net.variables.clone(),
        places_zero(net),
        places_one(net),
        transitions,
        initial_marking,
    )
}

// `PetriNet`'s place tables are private to its module; these re-derive them from the public
// `place_for` accessor rather than exposing the internal `HashMap`s outside `petri_net`.
fn places_zero(net: &PetriNet) -> std::collections::HashMap<biodivine_lib_param_bn::VariableId, super::PlaceId> {
    net.variables.iter().map(|&v| (v, net.place_for(v, false))).collect()
}

fn places_one(net: &PetriNet) -> std::collections::HashMap<biodivine_lib_param_bn::VariableId, super::PlaceId> {
    net.variables.iter().map(|&v| (v, net.place_for(v, true))).collect()
}
