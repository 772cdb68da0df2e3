//! A roster model and the two ways of handing it to a [`SolvingEngine`].
mod assembler;
mod checker;
mod outcome;

use log::warn;

pub use assembler::ModelAssembler;
pub use checker::Violation;
pub use outcome::EnumerationSummary;
pub use outcome::SolveOutcome;

use crate::collector::SolutionCollector;
use crate::collector::SolutionReporter;
use crate::constraints::ConstraintSet;
use crate::engine::ObjectiveDirection;
use crate::engine::SolvingEngine;
use crate::engine::VariableValues;
use crate::index::VariableIndex;
use crate::termination::TerminationCondition;
use crate::Solution;

/// The objective of the optimum mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Objective {
    /// Maximise the number of variables which are set to 1.
    MaximiseAssignments,
}

/// The variables, constraints and objective of one roster.
///
/// A model is immutable once assembled. Every solve submits it to a fresh engine, which is
/// consumed by the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    index: VariableIndex,
    constraints: ConstraintSet,
    objective: Option<Objective>,
}

impl Model {
    pub fn index(&self) -> &VariableIndex {
        &self.index
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn objective(&self) -> Option<Objective> {
        self.objective
    }

    /// Asks `engine` for a single best solution.
    ///
    /// The solution is only present if the verdict allows reading variable values.
    pub fn solve<E: SolvingEngine, T: TerminationCondition>(
        &self,
        mut engine: E,
        termination: &mut T,
    ) -> SolveOutcome {
        let variables = self.submit(&mut engine, true);

        let verdict = engine.solve(termination);
        let solution = if verdict.has_solution() {
            self.read_solution(&engine, &variables)
        } else {
            None
        };

        SolveOutcome {
            verdict,
            solution,
            statistics: engine.statistics(),
        }
    }

    /// Lets `engine` report every solution of the model to `collector`.
    ///
    /// The objective (if any) is not submitted. The collector is started before the search and
    /// finished once the engine returns.
    pub fn enumerate_all<E, T, R>(
        &self,
        mut engine: E,
        termination: &mut T,
        collector: &mut SolutionCollector<R>,
    ) -> EnumerationSummary
    where
        E: SolvingEngine,
        T: TerminationCondition,
        R: SolutionReporter,
    {
        let variables = self.submit(&mut engine, false);
        let index = self.index;

        collector.start();
        let status = engine.enumerate_all(
            termination,
            &mut |values: &dyn VariableValues<E::Variable>| {
                collector.on_solution(|| {
                    Solution::from_fn(index, |variable| {
                        values.value(variables[variable.index()])
                    })
                });
            },
        );
        let solutions_found = collector.finish();

        EnumerationSummary {
            status,
            solutions_found,
            statistics: engine.statistics(),
        }
    }

    /// Creates the variables, constraints and (optionally) the objective in `engine`. The returned
    /// handles are indexed by [`crate::index::VariableId::index`].
    fn submit<E: SolvingEngine>(&self, engine: &mut E, with_objective: bool) -> Vec<E::Variable> {
        let variables = self
            .index
            .iter()
            .map(|variable| engine.new_boolean(self.index.name(variable)))
            .collect::<Vec<_>>();

        let mut terms = Vec::new();
        for constraint in &self.constraints {
            terms.clear();
            terms.extend(constraint.terms.iter().map(|term| variables[term.index()]));
            engine.add_constraint(&terms, constraint.relation, constraint.bound);
        }

        if with_objective && self.objective == Some(Objective::MaximiseAssignments) {
            engine.set_objective(&variables, ObjectiveDirection::Maximise);
        }

        variables
    }

    fn read_solution<E: SolvingEngine>(
        &self,
        engine: &E,
        variables: &[E::Variable],
    ) -> Option<Solution> {
        if variables.iter().any(|&variable| engine.value(variable).is_none()) {
            warn!("The engine reported a solution but did not assign every variable");
            return None;
        }

        Some(Solution::from_fn(self.index, |variable| {
            engine.value(variables[variable.index()]) == Some(true)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::ScheduleRules;
    use crate::engine::brute_force::BruteForceEngine;
    use crate::engine::EnumerationStatus;
    use crate::engine::Verdict;
    use crate::index::SlotKind;
    use crate::termination::Indefinite;
    use crate::termination::SolutionBudget;
    use crate::Dimensions;

    fn assembler(workers: i64, days: i64, slots: i64, rules: ScheduleRules) -> ModelAssembler {
        let dimensions = Dimensions::new(workers, days, slots).expect("valid dimensions");
        ModelAssembler::new(dimensions, SlotKind::Line, rules)
    }

    #[test]
    fn submitted_variables_carry_their_names() {
        let model = assembler(2, 1, 2, ScheduleRules::unconstrained()).enumeration_model();
        let mut engine = BruteForceEngine::default();

        let variables = model.submit(&mut engine, false);

        assert_eq!(4, variables.len());
        assert_eq!(
            vec!["work_0d0l0", "work_0d0l1", "work_1d0l0", "work_1d0l1"],
            engine.names()
        );
    }

    #[test]
    fn optimum_covers_every_slot() {
        let model = assembler(2, 3, 1, ScheduleRules::unconstrained()).optimum_model();

        let outcome = model.solve(BruteForceEngine::default(), &mut Indefinite);

        assert_eq!(Verdict::Optimal, outcome.verdict);
        let solution = outcome.solution.expect("optimal solution");
        assert_eq!(3, solution.num_assigned());
        assert_eq!(Ok(()), model.check(&solution));
    }

    #[test]
    fn single_worker_for_a_week_is_infeasible() {
        // At most 4 working days in any 5-day window, but 7 days to cover alone.
        let dimensions = Dimensions::with_weeks(1, 1, 1).expect("valid dimensions");
        let model =
            ModelAssembler::new(dimensions, SlotKind::Line, ScheduleRules::lines()).optimum_model();

        let outcome = model.solve(BruteForceEngine::default(), &mut Indefinite);

        assert_eq!(Verdict::Infeasible, outcome.verdict);
        assert!(outcome.solution.is_none());
    }

    #[test]
    fn enumeration_counts_every_solution() {
        // Two workers, one day, one slot: either worker covers it.
        let model = assembler(2, 1, 1, ScheduleRules::lines()).enumeration_model();
        let mut reported = Vec::new();
        let mut collector = SolutionCollector::new(0..5, |ordinal: u64, solution: &Solution| {
            reported.push((ordinal, solution.clone()))
        });

        let summary = model.enumerate_all(BruteForceEngine::default(), &mut Indefinite, &mut collector);

        assert_eq!(EnumerationStatus::Finished, summary.status);
        assert_eq!(2, summary.solutions_found);
        drop(collector);
        assert_eq!(2, reported.len());
        assert_eq!(vec![0, 1], reported.iter().map(|(k, _)| *k).collect::<Vec<_>>());
        for (_, solution) in &reported {
            assert_eq!(Ok(()), model.check(solution));
        }
    }

    #[test]
    fn empty_selection_still_counts() {
        let model = assembler(2, 1, 1, ScheduleRules::lines()).enumeration_model();
        let mut collector =
            SolutionCollector::new(std::iter::empty(), |_: u64, _: &Solution| {
                panic!("nothing is selected")
            });

        let summary = model.enumerate_all(BruteForceEngine::default(), &mut Indefinite, &mut collector);

        assert_eq!(2, summary.solutions_found);
        assert_eq!(2, collector.solution_count());
    }

    #[test]
    fn solution_budget_interrupts_enumeration() {
        let model = assembler(3, 1, 1, ScheduleRules::unconstrained()).enumeration_model();
        let mut collector = SolutionCollector::new(0..5, |_: u64, _: &Solution| {});

        let summary = model.enumerate_all(
            BruteForceEngine::default(),
            &mut SolutionBudget::new(2),
            &mut collector,
        );

        assert_eq!(EnumerationStatus::Unknown, summary.status);
        assert_eq!(2, summary.solutions_found);
    }

    #[test]
    fn infeasible_enumeration_is_unsatisfiable() {
        let dimensions = Dimensions::with_weeks(1, 1, 1).expect("valid dimensions");
        let model =
            ModelAssembler::new(dimensions, SlotKind::Line, ScheduleRules::lines()).enumeration_model();
        let mut collector = SolutionCollector::new(0..5, |_: u64, _: &Solution| {});

        let summary = model.enumerate_all(BruteForceEngine::default(), &mut Indefinite, &mut collector);

        assert_eq!(EnumerationStatus::Unsatisfiable, summary.status);
        assert_eq!(0, summary.solutions_found);
    }
}
