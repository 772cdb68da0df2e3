use roster_core::engine::ObjectiveDirection;

use crate::constraint_store::ConstraintStore;
use crate::constraint_store::SumCount;

/// Keeps the value of the best solution found so far, and tells whether the current node of the
/// search can still lead to a strictly better one.
///
/// When maximising, the bound uses constraints which cap their terms from above. Those whose
/// terms all lie in the objective and are pairwise disjoint are selected once; each of them can
/// add at most `upper - ones` to the objective. Every other objective term counts as one while it
/// is unassigned.
#[derive(Debug, Clone)]
pub(crate) struct ObjectiveBound {
    direction: ObjectiveDirection,
    terms: Box<[usize]>,
    caps: Box<[usize]>,
    uncapped: Box<[usize]>,
    best: Option<i64>,
}

impl ObjectiveBound {
    pub(crate) fn new(
        terms: &[usize],
        direction: ObjectiveDirection,
        store: &ConstraintStore,
    ) -> ObjectiveBound {
        let mut multiplicity = vec![0_u32; store.num_variables()];
        for &term in terms {
            multiplicity[term] += 1;
        }

        let mut is_capped = vec![false; store.num_variables()];
        let mut caps = Vec::new();
        if direction == ObjectiveDirection::Maximise {
            for (id, constraint) in store.constraints().iter().enumerate() {
                let limits = constraint.upper < constraint.terms.len() as i64;
                let fits = constraint
                    .terms
                    .iter()
                    .all(|&term| multiplicity[term] == 1 && !is_capped[term]);
                if limits && fits {
                    constraint
                        .terms
                        .iter()
                        .for_each(|&term| is_capped[term] = true);
                    caps.push(id);
                }
            }
        }

        let uncapped = terms
            .iter()
            .copied()
            .filter(|&term| !is_capped[term])
            .collect();

        ObjectiveBound {
            direction,
            terms: terms.into(),
            caps: caps.into_boxed_slice(),
            uncapped,
            best: None,
        }
    }

    /// The objective value of a complete assignment.
    pub(crate) fn value(&self, values: &[Option<bool>]) -> i64 {
        self.terms
            .iter()
            .filter(|&&term| values[term] == Some(true))
            .count() as i64
    }

    pub(crate) fn record(&mut self, values: &[Option<bool>]) {
        self.best = Some(self.value(values));
    }

    pub(crate) fn can_improve(
        &self,
        store: &ConstraintStore,
        values: &[Option<bool>],
        counts: &[SumCount],
    ) -> bool {
        let Some(best) = self.best else {
            return true;
        };

        match self.direction {
            ObjectiveDirection::Maximise => self.optimistic_maximum(store, values, counts) > best,
            ObjectiveDirection::Minimise => self.value(values) < best,
        }
    }

    fn optimistic_maximum(
        &self,
        store: &ConstraintStore,
        values: &[Option<bool>],
        counts: &[SumCount],
    ) -> i64 {
        let capped = self
            .caps
            .iter()
            .map(|&id| {
                let count = counts[id];
                let room = store.constraint(id).upper - count.ones;
                count.ones + room.clamp(0, count.unassigned)
            })
            .sum::<i64>();
        let uncapped = self
            .uncapped
            .iter()
            .filter(|&&term| values[term] != Some(false))
            .count() as i64;

        capped + uncapped
    }
}

#[cfg(test)]
mod tests {
    use roster_core::constraints::Relation;

    use super::*;
    use crate::constraint_store::SumConstraint;

    /// Two groups of which at most one term can be set, and a free variable.
    fn store() -> ConstraintStore {
        let mut store = ConstraintStore::default();
        for _ in 0..5 {
            let _ = store.grow();
        }
        store.add(SumConstraint::new(Box::new([0, 1]), Relation::Equal, 1));
        store.add(SumConstraint::new(Box::new([2, 3]), Relation::LessOrEqual, 1));
        store.add(SumConstraint::new(Box::new([1, 2]), Relation::LessOrEqual, 1));
        store
    }

    #[test]
    fn disjoint_caps_bound_the_maximum() {
        let store = store();
        let bound = ObjectiveBound::new(&[0, 1, 2, 3, 4], ObjectiveDirection::Maximise, &store);
        let values = [None; 5];

        assert_eq!(&[0, 1], &*bound.caps);
        assert_eq!(&[4], &*bound.uncapped);
        assert_eq!(3, bound.optimistic_maximum(&store, &values, &store.initial_counts()));
    }

    #[test]
    fn only_strict_improvements_are_searched() {
        let store = store();
        let mut bound =
            ObjectiveBound::new(&[0, 1, 2, 3, 4], ObjectiveDirection::Maximise, &store);
        let counts = store.initial_counts();
        let values = [None; 5];
        assert!(bound.can_improve(&store, &values, &counts));

        bound.record(&[Some(true), Some(false), Some(true), Some(false), Some(true)]);

        assert_eq!(Some(3), bound.best);
        assert!(!bound.can_improve(&store, &values, &counts));
    }

    #[test]
    fn minimising_compares_the_assigned_ones() {
        let store = store();
        let mut bound = ObjectiveBound::new(&[0, 4], ObjectiveDirection::Minimise, &store);
        bound.record(&[Some(true), None, None, None, Some(true)]);
        assert_eq!(Some(2), bound.best);

        let counts = store.initial_counts();
        assert!(bound.can_improve(&store, &[Some(true), None, None, None, None], &counts));
        assert!(!bound.can_improve(&store, &[Some(true), None, None, None, Some(true)], &counts));
    }
}
