use log::debug;

use super::ConstraintFamily;
use super::LinearConstraint;
use super::Relation;
use super::ScheduleRules;
use crate::index::VariableIndex;
use crate::Dimensions;

/// The flattened list of constraints of a roster. Constraints are never merged or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    constraints: Vec<LinearConstraint>,
}

impl ConstraintSet {
    pub fn iter(&self) -> impl Iterator<Item = &LinearConstraint> + '_ {
        self.constraints.iter()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// The number of constraints generated for `family`.
    pub fn count(&self, family: ConstraintFamily) -> usize {
        self.constraints
            .iter()
            .filter(|constraint| constraint.family == family)
            .count()
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a LinearConstraint;
    type IntoIter = std::slice::Iter<'a, LinearConstraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

/// The minimum number of slots each worker covers when the fairness rule is enabled.
pub fn fairness_floor(dimensions: Dimensions) -> usize {
    dimensions.total_slots() / dimensions.workers()
}

/// Turns [`ScheduleRules`] into linear constraints over the variables of a [`VariableIndex`].
///
/// The families are emitted in a fixed order (coverage, exclusivity, fatigue, rest, fairness), so
/// building twice from the same input yields the same list.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintBuilder<'index> {
    index: &'index VariableIndex,
    rules: ScheduleRules,
}

impl<'index> ConstraintBuilder<'index> {
    pub fn new(index: &'index VariableIndex, rules: ScheduleRules) -> ConstraintBuilder<'index> {
        ConstraintBuilder { index, rules }
    }

    pub fn build(&self) -> ConstraintSet {
        let mut constraints = Vec::new();

        self.add_coverage(&mut constraints);
        self.add_exclusivity(&mut constraints);
        if let Some(max_work) = self.rules.max_consecutive_work {
            self.add_windows(
                &mut constraints,
                ConstraintFamily::Fatigue,
                max_work,
                Relation::LessOrEqual,
                max_work as i64,
            );
        }
        if let Some(max_rest) = self.rules.max_consecutive_rest {
            self.add_windows(
                &mut constraints,
                ConstraintFamily::Rest,
                max_rest,
                Relation::GreaterOrEqual,
                1,
            );
        }
        if self.rules.fairness {
            self.add_fairness(&mut constraints);
        }

        let set = ConstraintSet { constraints };
        for family in ConstraintFamily::ALL {
            debug!("Generated {} {family} constraints", set.count(family));
        }

        set
    }

    fn add_coverage(&self, constraints: &mut Vec<LinearConstraint>) {
        let dimensions = self.index.dimensions();
        for day in 0..dimensions.days() {
            for slot in 0..dimensions.slots() {
                constraints.push(LinearConstraint {
                    family: ConstraintFamily::Coverage,
                    terms: self.index.for_day_slot(day, slot).collect(),
                    relation: Relation::Equal,
                    bound: 1,
                });
            }
        }
    }

    fn add_exclusivity(&self, constraints: &mut Vec<LinearConstraint>) {
        let dimensions = self.index.dimensions();
        for worker in 0..dimensions.workers() {
            for day in 0..dimensions.days() {
                constraints.push(LinearConstraint {
                    family: ConstraintFamily::Exclusivity,
                    terms: self.index.for_worker_day(worker, day).collect(),
                    relation: Relation::LessOrEqual,
                    bound: 1,
                });
            }
        }
    }

    /// One constraint per worker and per window `[start, start + span]` lying fully inside the
    /// horizon. Horizons of at most `span` days have no such window.
    fn add_windows(
        &self,
        constraints: &mut Vec<LinearConstraint>,
        family: ConstraintFamily,
        span: usize,
        relation: Relation,
        bound: i64,
    ) {
        let dimensions = self.index.dimensions();
        let num_windows = dimensions.days().saturating_sub(span);

        for worker in 0..dimensions.workers() {
            for start in 0..num_windows {
                constraints.push(LinearConstraint {
                    family,
                    terms: self
                        .index
                        .for_worker_days(worker, start..start + span + 1)
                        .collect(),
                    relation,
                    bound,
                });
            }
        }
    }

    fn add_fairness(&self, constraints: &mut Vec<LinearConstraint>) {
        let dimensions = self.index.dimensions();
        let floor = fairness_floor(dimensions) as i64;

        for worker in 0..dimensions.workers() {
            constraints.push(LinearConstraint {
                family: ConstraintFamily::Fairness,
                terms: self.index.for_worker(worker).collect(),
                relation: Relation::GreaterOrEqual,
                bound: floor,
            });
        }
    }
}
