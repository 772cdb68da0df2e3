use std::ops::ControlFlow;
use std::time::Instant;

use log::debug;
use roster_core::constraints::Relation;
use roster_core::engine::EngineStatistics;
use roster_core::engine::EnumerationStatus;
use roster_core::engine::ObjectiveDirection;
use roster_core::engine::SolvingEngine;
use roster_core::engine::VariableValues;
use roster_core::engine::Verdict;
use roster_core::termination::TerminationCondition;

use crate::constraint_store::ConstraintStore;
use crate::constraint_store::SumConstraint;
use crate::objective_bound::ObjectiveBound;
use crate::search::Search;
use crate::search::SearchEnd;

/// A variable of a [`SearchEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchVariable(usize);

/// A [`SolvingEngine`] which explores the model with a depth-first search on the calling thread.
///
/// The termination condition is polled at every node of the search, so a call returns as soon as
/// it triggers and nothing keeps running afterwards. Enumeration walks the search tree once; the
/// memory it needs does not grow with the number of solutions reported.
///
/// With an objective, [`SolvingEngine::solve`] keeps searching for strictly better solutions until
/// the search space is exhausted, which proves the last one optimal.
#[derive(Debug, Default)]
pub struct SearchEngine {
    store: ConstraintStore,
    names: Vec<String>,
    objective: Option<(Box<[usize]>, ObjectiveDirection)>,
    values: Option<Vec<bool>>,
    statistics: EngineStatistics,
}

impl SearchEngine {
    pub fn new() -> SearchEngine {
        SearchEngine::default()
    }

    pub fn num_variables(&self) -> usize {
        self.store.num_variables()
    }

    pub fn num_constraints(&self) -> usize {
        self.store.constraints().len()
    }

    /// The name given to `variable` when it was created.
    pub fn name(&self, variable: SearchVariable) -> &str {
        &self.names[variable.0]
    }
}

fn record_search(statistics: &mut EngineStatistics, search: &Search<'_>, started_at: Instant) {
    statistics.num_branches += search.num_decisions;
    statistics.num_conflicts += search.num_conflicts;
    statistics.wall_time += started_at.elapsed().as_secs_f64();
}

impl VariableValues<SearchVariable> for Search<'_> {
    fn value(&self, variable: SearchVariable) -> bool {
        self.is_set(variable.0)
    }
}

impl SolvingEngine for SearchEngine {
    type Variable = SearchVariable;

    fn new_boolean(&mut self, name: String) -> SearchVariable {
        self.names.push(name);
        SearchVariable(self.store.grow())
    }

    fn add_constraint(&mut self, terms: &[SearchVariable], relation: Relation, bound: i64) {
        let terms = terms.iter().map(|variable| variable.0).collect();
        self.store.add(SumConstraint::new(terms, relation, bound));
    }

    fn set_objective(&mut self, terms: &[SearchVariable], direction: ObjectiveDirection) {
        let terms = terms.iter().map(|variable| variable.0).collect();
        self.objective = Some((terms, direction));
    }

    fn solve<T: TerminationCondition>(&mut self, termination: &mut T) -> Verdict {
        let started_at = Instant::now();
        self.values = None;

        let objective = self
            .objective
            .as_ref()
            .map(|(terms, direction)| ObjectiveBound::new(terms, *direction, &self.store));
        let has_objective = objective.is_some();

        let mut search = Search::new(&self.store, objective);
        let mut best = None;
        let end = search.run(termination, |search| {
            best = Some(search.assignment());
            if has_objective {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        });

        let verdict = match (end, &best) {
            (SearchEnd::Exhausted, Some(_)) if has_objective => Verdict::Optimal,
            (_, Some(_)) => Verdict::Feasible,
            (SearchEnd::Exhausted, None) => Verdict::Infeasible,
            (_, None) => Verdict::Unknown,
        };
        debug!("Search ended ({end:?}) with verdict {verdict:?}");

        record_search(&mut self.statistics, &search, started_at);
        self.values = best;
        verdict
    }

    fn value(&self, variable: SearchVariable) -> Option<bool> {
        self.values
            .as_ref()
            .and_then(|values| values.get(variable.0).copied())
    }

    fn enumerate_all<T: TerminationCondition>(
        &mut self,
        termination: &mut T,
        on_solution: &mut dyn FnMut(&dyn VariableValues<SearchVariable>),
    ) -> EnumerationStatus {
        let started_at = Instant::now();
        self.values = None;

        let mut search = Search::new(&self.store, None);
        let mut num_solutions = 0_u64;
        let end = search.run(termination, |search| {
            num_solutions += 1;
            on_solution(search);
            ControlFlow::Continue(())
        });

        let status = match end {
            SearchEnd::Exhausted if num_solutions == 0 => EnumerationStatus::Unsatisfiable,
            SearchEnd::Exhausted => EnumerationStatus::Finished,
            SearchEnd::Stopped | SearchEnd::Interrupted => EnumerationStatus::Unknown,
        };
        debug!("Enumeration ended ({status:?}) after {num_solutions} solutions");

        record_search(&mut self.statistics, &search, started_at);
        status
    }

    fn statistics(&self) -> EngineStatistics {
        self.statistics
    }
}
