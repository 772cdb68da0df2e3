use std::fmt::Display;

use crate::index::VariableId;

/// The comparison between the sum of a constraint and its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    LessOrEqual,
    Equal,
    GreaterOrEqual,
}

impl Relation {
    /// Whether `lhs <relation> rhs` holds.
    pub fn holds(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Relation::LessOrEqual => lhs <= rhs,
            Relation::Equal => lhs == rhs,
            Relation::GreaterOrEqual => lhs >= rhs,
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::LessOrEqual => write!(f, "<="),
            Relation::Equal => write!(f, "=="),
            Relation::GreaterOrEqual => write!(f, ">="),
        }
    }
}

/// The scheduling rule a constraint was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintFamily {
    /// Exactly one worker per `(day, slot)`.
    Coverage,
    /// At most one slot per `(worker, day)`.
    Exclusivity,
    /// At most `W` working days in every window of `W + 1` days.
    Fatigue,
    /// At least one working day in every window of `R + 1` days.
    Rest,
    /// A minimum number of slots per worker over the horizon.
    Fairness,
}

impl ConstraintFamily {
    pub const ALL: [ConstraintFamily; 5] = [
        ConstraintFamily::Coverage,
        ConstraintFamily::Exclusivity,
        ConstraintFamily::Fatigue,
        ConstraintFamily::Rest,
        ConstraintFamily::Fairness,
    ];
}

impl Display for ConstraintFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConstraintFamily::Coverage => "coverage",
            ConstraintFamily::Exclusivity => "exclusivity",
            ConstraintFamily::Fatigue => "fatigue",
            ConstraintFamily::Rest => "rest",
            ConstraintFamily::Fairness => "fairness",
        };
        write!(f, "{name}")
    }
}

/// `sum(terms) <relation> bound`, where every term has coefficient 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearConstraint {
    pub family: ConstraintFamily,
    pub terms: Vec<VariableId>,
    pub relation: Relation,
    pub bound: i64,
}

impl LinearConstraint {
    /// The left-hand side of the constraint under the given assignment.
    pub fn evaluate(&self, mut value: impl FnMut(VariableId) -> bool) -> i64 {
        self.terms.iter().filter(|&&term| value(term)).count() as i64
    }

    pub fn is_satisfied_by(&self, value: impl FnMut(VariableId) -> bool) -> bool {
        self.relation.holds(self.evaluate(value), self.bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::SlotKind;
    use crate::index::VariableIndex;
    use crate::Dimensions;

    #[test]
    fn relations_compare_as_expected() {
        assert!(Relation::LessOrEqual.holds(1, 1));
        assert!(!Relation::LessOrEqual.holds(2, 1));
        assert!(Relation::Equal.holds(3, 3));
        assert!(!Relation::Equal.holds(2, 3));
        assert!(Relation::GreaterOrEqual.holds(4, 1));
        assert!(!Relation::GreaterOrEqual.holds(0, 1));
    }

    #[test]
    fn constraint_counts_the_true_terms() {
        let index = VariableIndex::new(
            Dimensions::new(3, 1, 1).expect("valid dimensions"),
            SlotKind::Line,
        );
        let constraint = LinearConstraint {
            family: ConstraintFamily::Coverage,
            terms: index.for_day_slot(0, 0).collect(),
            relation: Relation::Equal,
            bound: 1,
        };

        let only_first = |variable: VariableId| index.key(variable).worker == 0;
        let nobody = |_: VariableId| false;

        assert_eq!(1, constraint.evaluate(only_first));
        assert!(constraint.is_satisfied_by(only_first));
        assert!(!constraint.is_satisfied_by(nobody));
    }
}
