use thiserror::Error;

use super::Model;
use crate::constraints::ConstraintFamily;
use crate::constraints::Relation;
use crate::index::VariableIndex;
use crate::Solution;

/// The reason why a [`Solution`] is rejected by [`Model::check`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("the solution assigns the variables of {found:?}, the model has {expected:?}")]
    ForeignSolution {
        expected: VariableIndex,
        found: VariableIndex,
    },
    #[error("{family} constraint #{position} is violated: {lhs} {relation} {bound} does not hold")]
    Constraint {
        family: ConstraintFamily,
        /// The position of the constraint in the constraint list of the model.
        position: usize,
        lhs: i64,
        relation: Relation,
        bound: i64,
    },
}

impl Model {
    /// Evaluates every constraint of the model against `solution` and reports the first one
    /// which does not hold.
    pub fn check(&self, solution: &Solution) -> Result<(), Violation> {
        if solution.index() != self.index() {
            return Err(Violation::ForeignSolution {
                expected: *self.index(),
                found: *solution.index(),
            });
        }

        for (position, constraint) in self.constraints().iter().enumerate() {
            let lhs = constraint.evaluate(|variable| solution.value(variable));
            if !constraint.relation.holds(lhs, constraint.bound) {
                return Err(Violation::Constraint {
                    family: constraint.family,
                    position,
                    lhs,
                    relation: constraint.relation,
                    bound: constraint.bound,
                });
            }
        }

        Ok(())
    }
}
