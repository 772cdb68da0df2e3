use std::fmt::Debug;

use super::termination::TerminationCondition;
use super::EngineStatistics;
use crate::constraints::Relation;

/// The answer of [`SolvingEngine::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// A solution was found and proven to be optimal with respect to the objective.
    Optimal,
    /// A solution was found, but it is not (known to be) optimal.
    Feasible,
    /// The model has no solution.
    Infeasible,
    /// The engine stopped before it could reach a conclusion.
    Unknown,
}

impl Verdict {
    /// Whether variable values can be read after this verdict.
    pub fn has_solution(self) -> bool {
        matches!(self, Verdict::Optimal | Verdict::Feasible)
    }
}

/// The way in which [`SolvingEngine::enumerate_all`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumerationStatus {
    /// Every solution has been reported.
    Finished,
    /// The model has no solution; the callback was never invoked.
    Unsatisfiable,
    /// The search was stopped by its termination condition; more solutions may exist.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObjectiveDirection {
    #[default]
    Maximise,
    Minimise,
}

/// Read access to the values of a solution while the engine is reporting it.
pub trait VariableValues<Variable> {
    fn value(&self, variable: Variable) -> bool;
}

/// A solver for models over boolean variables and unit-coefficient linear constraints.
///
/// A model is submitted by creating its variables, adding its constraints and optionally setting
/// an objective. Afterwards the model is either solved once with [`SolvingEngine::solve`], or all
/// of its solutions are reported through [`SolvingEngine::enumerate_all`].
pub trait SolvingEngine {
    /// A handle to a variable of this engine.
    type Variable: Copy + Debug;

    /// Creates a variable with domain `{0, 1}`.
    fn new_boolean(&mut self, name: String) -> Self::Variable;

    /// Adds `sum(terms) <relation> bound`.
    fn add_constraint(&mut self, terms: &[Self::Variable], relation: Relation, bound: i64);

    /// Sets the objective to optimise `sum(terms)` in the given direction.
    fn set_objective(&mut self, terms: &[Self::Variable], direction: ObjectiveDirection);

    /// Searches for a single (best) solution until it is found or `termination` triggers.
    fn solve<T: TerminationCondition>(&mut self, termination: &mut T) -> Verdict;

    /// The value of `variable` in the solution of the last call to [`SolvingEngine::solve`].
    ///
    /// Returns `None` if that call did not produce a solution.
    fn value(&self, variable: Self::Variable) -> Option<bool>;

    /// Reports every solution to `on_solution`, one at a time, in an engine-defined order.
    ///
    /// The callback runs to completion before the engine continues its search. The call returns
    /// once the search space is exhausted or `termination` triggers.
    fn enumerate_all<T: TerminationCondition>(
        &mut self,
        termination: &mut T,
        on_solution: &mut dyn FnMut(&dyn VariableValues<Self::Variable>),
    ) -> EnumerationStatus;

    /// The statistics accumulated over all searches of this engine.
    fn statistics(&self) -> EngineStatistics;
}
