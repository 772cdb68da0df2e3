//! An engine for tests which tries every assignment; only usable for a handful of variables.

use std::time::Instant;

use super::EngineStatistics;
use super::EnumerationStatus;
use super::ObjectiveDirection;
use super::SolvingEngine;
use super::VariableValues;
use super::Verdict;
use crate::constraints::Relation;
use crate::termination::TerminationCondition;

const MAX_VARIABLES: usize = 20;

#[derive(Debug, Default)]
pub(crate) struct BruteForceEngine {
    names: Vec<String>,
    constraints: Vec<(Vec<usize>, Relation, i64)>,
    objective: Option<(Vec<usize>, ObjectiveDirection)>,
    best: Option<u32>,
    statistics: EngineStatistics,
}

struct Assignment(u32);

impl VariableValues<usize> for Assignment {
    fn value(&self, variable: usize) -> bool {
        self.0 & (1 << variable) != 0
    }
}

impl BruteForceEngine {
    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }

    fn assignments(&self) -> impl Iterator<Item = u32> {
        assert!(self.names.len() <= MAX_VARIABLES);
        0..(1_u32 << self.names.len())
    }

    fn is_feasible(&self, assignment: u32) -> bool {
        let values = Assignment(assignment);
        self.constraints.iter().all(|(terms, relation, bound)| {
            let lhs = terms.iter().filter(|&&term| values.value(term)).count() as i64;
            relation.holds(lhs, *bound)
        })
    }

    fn score(&self, assignment: u32) -> i64 {
        let values = Assignment(assignment);
        match &self.objective {
            Some((terms, direction)) => {
                let sum = terms.iter().filter(|&&term| values.value(term)).count() as i64;
                match direction {
                    ObjectiveDirection::Maximise => sum,
                    ObjectiveDirection::Minimise => -sum,
                }
            }
            None => 0,
        }
    }
}

impl SolvingEngine for BruteForceEngine {
    type Variable = usize;

    fn new_boolean(&mut self, name: String) -> usize {
        self.names.push(name);
        self.names.len() - 1
    }

    fn add_constraint(&mut self, terms: &[usize], relation: Relation, bound: i64) {
        self.constraints.push((terms.to_vec(), relation, bound));
    }

    fn set_objective(&mut self, terms: &[usize], direction: ObjectiveDirection) {
        self.objective = Some((terms.to_vec(), direction));
    }

    fn solve<T: TerminationCondition>(&mut self, termination: &mut T) -> Verdict {
        let start = Instant::now();
        self.best = None;

        let mut verdict = Verdict::Infeasible;
        for assignment in self.assignments() {
            if termination.should_stop() {
                verdict = Verdict::Unknown;
                break;
            }
            self.statistics.num_branches += 1;

            if self.is_feasible(assignment)
                && self
                    .best
                    .map_or(true, |best| self.score(assignment) > self.score(best))
            {
                self.best = Some(assignment);
            }
        }

        self.statistics.wall_time += start.elapsed().as_secs_f64();
        match (verdict, self.best) {
            (Verdict::Unknown, Some(_)) => Verdict::Feasible,
            (Verdict::Unknown, None) => Verdict::Unknown,
            (_, Some(_)) if self.objective.is_some() => Verdict::Optimal,
            (_, Some(_)) => Verdict::Feasible,
            (_, None) => Verdict::Infeasible,
        }
    }

    fn value(&self, variable: usize) -> Option<bool> {
        self.best.map(|best| Assignment(best).value(variable))
    }

    fn enumerate_all<T: TerminationCondition>(
        &mut self,
        termination: &mut T,
        on_solution: &mut dyn FnMut(&dyn VariableValues<usize>),
    ) -> EnumerationStatus {
        let start = Instant::now();
        let mut found_any = false;
        let mut status = EnumerationStatus::Finished;

        for assignment in self.assignments() {
            if termination.should_stop() {
                status = EnumerationStatus::Unknown;
                break;
            }
            self.statistics.num_branches += 1;

            if self.is_feasible(assignment) {
                found_any = true;
                on_solution(&Assignment(assignment));
                termination.solution_has_been_found();
            } else {
                self.statistics.num_conflicts += 1;
            }
        }

        self.statistics.wall_time += start.elapsed().as_secs_f64();
        match status {
            EnumerationStatus::Finished if !found_any => EnumerationStatus::Unsatisfiable,
            status => status,
        }
    }

    fn statistics(&self) -> EngineStatistics {
        self.statistics
    }
}
