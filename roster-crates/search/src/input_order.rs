use log::warn;

use crate::constraint_store::ConstraintStore;

/// Selects the first unassigned variable in a fixed order.
///
/// The terms of equality constraints come first, in the order in which those constraints were
/// added, followed by the remaining variables by index. Deciding the terms of one equality after
/// another lets the propagation settle each constraint before the next one is opened.
#[derive(Debug, Clone)]
pub(crate) struct InputOrder {
    variables: Box<[usize]>,
}

impl InputOrder {
    pub(crate) fn equalities_first(store: &ConstraintStore) -> InputOrder {
        let num_variables = store.num_variables();
        if num_variables == 0 {
            warn!("The search was not provided with any variables");
        }

        let mut is_ordered = vec![false; num_variables];
        let mut variables = Vec::with_capacity(num_variables);
        let equality_terms = store
            .constraints()
            .iter()
            .filter(|constraint| constraint.is_equality())
            .flat_map(|constraint| constraint.terms.iter().copied());
        for variable in equality_terms.chain(0..num_variables) {
            if !is_ordered[variable] {
                is_ordered[variable] = true;
                variables.push(variable);
            }
        }

        InputOrder {
            variables: variables.into_boxed_slice(),
        }
    }

    /// The first unassigned variable at or after `start`, with its position in the order.
    pub(crate) fn select(
        &self,
        start: usize,
        values: &[Option<bool>],
    ) -> Option<(usize, usize)> {
        self.variables
            .iter()
            .enumerate()
            .skip(start)
            .find(|&(_, &variable)| values[variable].is_none())
            .map(|(position, &variable)| (position, variable))
    }
}
