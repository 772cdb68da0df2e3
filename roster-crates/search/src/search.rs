use std::ops::ControlFlow;

use log::trace;
use roster_core::termination::TerminationCondition;

use crate::constraint_store::ConstraintStore;
use crate::constraint_store::SumCount;
use crate::input_order::InputOrder;
use crate::objective_bound::ObjectiveBound;
use crate::trail::Trail;

/// How a call to [`Search::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchEnd {
    /// The whole search space has been explored.
    Exhausted,
    /// The solution callback asked to stop.
    Stopped,
    /// The termination condition triggered.
    Interrupted,
}

/// The constraint which could not be satisfied.
#[derive(Debug, Clone, Copy)]
struct Conflict {
    constraint: usize,
}

#[derive(Debug, Clone, Copy)]
struct Decision {
    variable: usize,
    /// The position of the variable in the [`InputOrder`].
    position: usize,
}

/// A depth-first search over the 0-1 variables of a [`ConstraintStore`].
///
/// Every decision sets a variable to 1; once everything below it has been explored, the decision
/// is undone and the variable is set to 0 at the level of the previous decision. Only the current
/// branch is stored, so the memory use does not depend on the number of solutions.
///
/// After every assignment the constraints of the assigned variable are propagated: a constraint
/// which reached its upper bound sets its remaining terms to 0, one which can only reach its lower
/// bound by setting all remaining terms sets them to 1.
#[derive(Debug)]
pub(crate) struct Search<'store> {
    store: &'store ConstraintStore,
    brancher: InputOrder,
    objective: Option<ObjectiveBound>,

    values: Vec<Option<bool>>,
    trail: Trail<usize>,
    counts: Vec<SumCount>,
    next_to_propagate: usize,
    decisions: Vec<Decision>,

    pub(crate) num_decisions: u64,
    pub(crate) num_conflicts: u64,
}

impl<'store> Search<'store> {
    pub(crate) fn new(store: &'store ConstraintStore, objective: Option<ObjectiveBound>) -> Self {
        Search {
            store,
            brancher: InputOrder::equalities_first(store),
            objective,
            values: vec![None; store.num_variables()],
            trail: Trail::with_capacity(store.num_variables()),
            counts: store.initial_counts(),
            next_to_propagate: 0,
            decisions: Vec::new(),
            num_decisions: 0,
            num_conflicts: 0,
        }
    }

    /// Whether `variable` is set to 1; only meaningful while a solution is being reported.
    pub(crate) fn is_set(&self, variable: usize) -> bool {
        self.values[variable] == Some(true)
    }

    pub(crate) fn assignment(&self) -> Vec<bool> {
        (0..self.values.len()).map(|variable| self.is_set(variable)).collect()
    }

    /// Explores the search space, handing every solution to `on_solution`.
    ///
    /// The termination condition is polled before every step, so the call returns as soon as it
    /// triggers. With an objective only solutions which improve on the previous one are reported.
    pub(crate) fn run<T: TerminationCondition>(
        &mut self,
        termination: &mut T,
        mut on_solution: impl FnMut(&Search<'store>) -> ControlFlow<()>,
    ) -> SearchEnd {
        if let Err(conflict) = self.initialise() {
            trace!("Constraint {} is violated at the root", conflict.constraint);
            return SearchEnd::Exhausted;
        }

        loop {
            if termination.should_stop() {
                return SearchEnd::Interrupted;
            }

            if !self.propagate_and_bound() {
                self.num_conflicts += 1;
                if !self.backtrack() {
                    return SearchEnd::Exhausted;
                }
                continue;
            }

            if self.decide() {
                continue;
            }

            if let Some(objective) = self.objective.as_mut() {
                objective.record(&self.values);
            }
            let flow = on_solution(self);
            termination.solution_has_been_found();
            if flow.is_break() {
                return SearchEnd::Stopped;
            }
            if !self.backtrack() {
                return SearchEnd::Exhausted;
            }
        }
    }

    /// Checks every constraint once before the first decision.
    fn initialise(&mut self) -> Result<(), Conflict> {
        for constraint in 0..self.store.constraints().len() {
            self.propagate_constraint(constraint)?;
        }
        Ok(())
    }

    fn propagate_and_bound(&mut self) -> bool {
        if let Err(conflict) = self.propagate() {
            trace!(
                "Constraint {} is violated at depth {}",
                conflict.constraint,
                self.decisions.len()
            );
            return false;
        }

        self.objective.as_ref().map_or(true, |objective| {
            objective.can_improve(self.store, &self.values, &self.counts)
        })
    }

    fn propagate(&mut self) -> Result<(), Conflict> {
        let store = self.store;
        while self.next_to_propagate < self.trail.len() {
            let variable = self.trail[self.next_to_propagate];
            self.next_to_propagate += 1;

            for &constraint in store.occurrences(variable) {
                self.propagate_constraint(constraint)?;
            }
        }
        Ok(())
    }

    fn propagate_constraint(&mut self, id: usize) -> Result<(), Conflict> {
        let store = self.store;
        let constraint = store.constraint(id);
        let count = self.counts[id];

        if count.ones > constraint.upper || count.ones + count.unassigned < constraint.lower {
            return Err(Conflict { constraint: id });
        }
        if count.unassigned == 0 {
            return Ok(());
        }

        let forced = if count.ones == constraint.upper {
            false
        } else if count.ones + count.unassigned == constraint.lower {
            true
        } else {
            return Ok(());
        };
        for &term in constraint.terms.iter() {
            if self.values[term].is_none() {
                self.assign(term, forced);
            }
        }

        Ok(())
    }

    /// Sets the next variable of the brancher to 1. Returns false if every variable is assigned.
    fn decide(&mut self) -> bool {
        let start = self
            .decisions
            .last()
            .map_or(0, |decision| decision.position);
        let Some((position, variable)) = self.brancher.select(start, &self.values) else {
            return false;
        };

        self.num_decisions += 1;
        self.decisions.push(Decision { variable, position });
        self.trail.new_checkpoint();
        self.assign(variable, true);
        true
    }

    /// Undoes the last decision and sets its variable to 0 instead. Returns false if there is no
    /// decision left.
    fn backtrack(&mut self) -> bool {
        let Some(decision) = self.decisions.pop() else {
            return false;
        };

        let store = self.store;
        for variable in self.trail.synchronise(self.decisions.len()) {
            let was_one = self.values[variable].take() == Some(true);
            for &constraint in store.occurrences(variable) {
                let count = &mut self.counts[constraint];
                count.unassigned += 1;
                if was_one {
                    count.ones -= 1;
                }
            }
        }
        self.next_to_propagate = self.next_to_propagate.min(self.trail.len());

        self.assign(decision.variable, false);
        true
    }

    fn assign(&mut self, variable: usize, value: bool) {
        self.values[variable] = Some(value);
        self.trail.push(variable);

        let store = self.store;
        for &constraint in store.occurrences(variable) {
            let count = &mut self.counts[constraint];
            count.unassigned -= 1;
            if value {
                count.ones += 1;
            }
        }
    }
}
