use crate::index::VariableId;
use crate::index::VariableIndex;

/// A materialised 0/1 assignment of every variable of a [`VariableIndex`].
///
/// A solution is only created for the solutions which are reported (the optimum, or the selected
/// ordinals during enumeration); all other solutions are inspected through the engine without
/// being copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    index: VariableIndex,
    values: Vec<bool>,
}

impl Solution {
    /// Reads the value of every variable in `index` from `value_of`, in identifier order.
    pub fn from_fn(index: VariableIndex, value_of: impl FnMut(VariableId) -> bool) -> Solution {
        Solution {
            index,
            values: index.iter().map(value_of).collect(),
        }
    }

    pub fn index(&self) -> &VariableIndex {
        &self.index
    }

    pub fn value(&self, variable: VariableId) -> bool {
        self.values[variable.index()]
    }

    pub fn is_assigned(&self, worker: usize, day: usize, slot: usize) -> bool {
        self.value(self.index.variable(worker, day, slot))
    }

    /// The first slot `worker` covers on `day`, if any.
    pub fn slot_of(&self, worker: usize, day: usize) -> Option<usize> {
        (0..self.index.dimensions().slots()).find(|&slot| self.is_assigned(worker, day, slot))
    }

    /// The first worker covering `slot` on `day`, if any.
    pub fn worker_of(&self, day: usize, slot: usize) -> Option<usize> {
        (0..self.index.dimensions().workers()).find(|&worker| self.is_assigned(worker, day, slot))
    }

    /// The number of slots `worker` covers over the whole horizon.
    pub fn workload(&self, worker: usize) -> usize {
        self.index
            .for_worker(worker)
            .filter(|&variable| self.value(variable))
            .count()
    }

    /// The number of variables which are set to 1.
    pub fn num_assigned(&self) -> usize {
        self.values.iter().filter(|&&value| value).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::SlotKind;
    use crate::Dimensions;

    fn diagonal() -> Solution {
        // Worker `d % 2` covers slot `d % 2` on day `d`.
        let index = VariableIndex::new(
            Dimensions::new(2, 3, 2).expect("valid dimensions"),
            SlotKind::Line,
        );
        Solution::from_fn(index, |variable| {
            let key = index.key(variable);
            key.worker == key.day % 2 && key.slot == key.day % 2
        })
    }

    #[test]
    fn lookups_follow_the_assignment() {
        let solution = diagonal();

        assert_eq!(Some(1), solution.slot_of(1, 1));
        assert_eq!(None, solution.slot_of(0, 1));
        assert_eq!(Some(0), solution.worker_of(2, 0));
        assert_eq!(None, solution.worker_of(2, 1));
    }

    #[test]
    fn workload_counts_every_day() {
        let solution = diagonal();

        assert_eq!(2, solution.workload(0));
        assert_eq!(1, solution.workload(1));
        assert_eq!(3, solution.num_assigned());
    }
}
