use std::fmt::Display;
use std::ops::Range;

use super::SlotKind;
use crate::basic_types::Dimensions;

/// Identifies one assignment variable of a [`VariableIndex`].
///
/// Identifiers are dense: an index over `n` triples uses exactly the identifiers `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId(u32);

impl VariableId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// The `(worker, day, slot)` triple behind a [`VariableId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssignmentKey {
    pub worker: usize,
    pub day: usize,
    pub slot: usize,
}

/// Assigns every `(worker, day, slot)` triple of the cartesian product `Worker x Day x Slot` a
/// unique [`VariableId`].
///
/// The mapping is a pure function of the [`Dimensions`]: identifiers are laid out worker-major,
/// then by day, then by slot. As a consequence the variables of one worker on consecutive days
/// form a contiguous range, which is what the sliding-window constraints iterate over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableIndex {
    dimensions: Dimensions,
    kind: SlotKind,
}

impl VariableIndex {
    pub fn new(dimensions: Dimensions, kind: SlotKind) -> VariableIndex {
        VariableIndex { dimensions, kind }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    /// The number of variables in the index.
    pub fn len(&self) -> usize {
        self.dimensions.num_variables()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The variable for `worker` covering `slot` on `day`.
    ///
    /// # Panics
    /// If any of the three coordinates lies outside the dimensions of the index.
    pub fn variable(&self, worker: usize, day: usize, slot: usize) -> VariableId {
        assert!(
            worker < self.dimensions.workers()
                && day < self.dimensions.days()
                && slot < self.dimensions.slots(),
            "({worker}, {day}, {slot}) is outside of {:?}",
            self.dimensions
        );

        let position = (worker * self.dimensions.days() + day) * self.dimensions.slots() + slot;
        // `Dimensions` guarantees that every position fits in a u32.
        VariableId(position as u32)
    }

    /// The reverse lookup of [`VariableIndex::variable`].
    pub fn key(&self, variable: VariableId) -> AssignmentKey {
        let position = variable.index();
        debug_assert!(position < self.len());

        let slot = position % self.dimensions.slots();
        let worker_day = position / self.dimensions.slots();

        AssignmentKey {
            worker: worker_day / self.dimensions.days(),
            day: worker_day % self.dimensions.days(),
            slot,
        }
    }

    /// Every variable of the index, in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = VariableId> {
        (0..self.len() as u32).map(VariableId)
    }

    /// The variables of all workers for a fixed `(day, slot)` pair.
    pub fn for_day_slot(&self, day: usize, slot: usize) -> impl Iterator<Item = VariableId> + '_ {
        (0..self.dimensions.workers()).map(move |worker| self.variable(worker, day, slot))
    }

    /// The variables of all slots for a fixed `(worker, day)` pair.
    pub fn for_worker_day(&self, worker: usize, day: usize) -> impl Iterator<Item = VariableId> + '_ {
        (0..self.dimensions.slots()).map(move |slot| self.variable(worker, day, slot))
    }

    /// The variables of `worker` over all slots of the given range of days.
    pub fn for_worker_days(
        &self,
        worker: usize,
        days: Range<usize>,
    ) -> impl Iterator<Item = VariableId> + '_ {
        days.flat_map(move |day| self.for_worker_day(worker, day))
    }

    /// All variables of `worker` over the whole horizon.
    pub fn for_worker(&self, worker: usize) -> impl Iterator<Item = VariableId> + '_ {
        self.for_worker_days(worker, 0..self.dimensions.days())
    }

    /// The engine-facing name of a variable, e.g. `work_0d3l1`.
    pub fn name(&self, variable: VariableId) -> String {
        let key = self.key(variable);
        self.kind.variable_name(key.worker, key.day, key.slot)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn index(workers: i64, days: i64, slots: i64) -> VariableIndex {
        let dimensions = Dimensions::new(workers, days, slots).expect("valid dimensions");
        VariableIndex::new(dimensions, SlotKind::Line)
    }

    #[test]
    fn every_triple_gets_a_distinct_variable() {
        let index = index(3, 4, 2);

        let mut seen = HashSet::new();
        for worker in 0..3 {
            for day in 0..4 {
                for slot in 0..2 {
                    assert!(seen.insert(index.variable(worker, day, slot)));
                }
            }
        }

        assert_eq!(3 * 4 * 2, seen.len());
        assert_eq!(seen.len(), index.len());
    }

    #[test]
    fn reverse_lookup_is_the_inverse() {
        let index = index(4, 5, 3);

        for variable in index.iter() {
            let key = index.key(variable);
            assert_eq!(variable, index.variable(key.worker, key.day, key.slot));
        }
    }

    #[test]
    fn identifiers_are_dense() {
        let index = index(2, 3, 2);

        let identifiers = index.iter().map(VariableId::index).collect::<Vec<_>>();

        assert_eq!((0..12).collect::<Vec<_>>(), identifiers);
    }

    #[test]
    fn day_slot_lookup_lists_every_worker() {
        let index = index(3, 2, 2);

        let keys = index
            .for_day_slot(1, 0)
            .map(|variable| index.key(variable))
            .collect::<Vec<_>>();

        assert_eq!(
            vec![
                AssignmentKey { worker: 0, day: 1, slot: 0 },
                AssignmentKey { worker: 1, day: 1, slot: 0 },
                AssignmentKey { worker: 2, day: 1, slot: 0 },
            ],
            keys
        );
    }

    #[test]
    fn worker_day_lookup_lists_every_slot() {
        let index = index(2, 2, 3);

        let slots = index
            .for_worker_day(1, 0)
            .map(|variable| index.key(variable).slot)
            .collect::<Vec<_>>();

        assert_eq!(vec![0, 1, 2], slots);
    }

    #[test]
    fn worker_window_covers_days_and_slots() {
        let index = index(2, 7, 2);

        let variables = index.for_worker_days(1, 2..5).collect::<Vec<_>>();

        assert_eq!(6, variables.len());
        assert!(variables.iter().all(|&variable| {
            let key = index.key(variable);
            key.worker == 1 && (2..5).contains(&key.day)
        }));
    }

    #[test]
    fn names_follow_the_slot_kind() {
        let dimensions = Dimensions::new(2, 2, 2).expect("valid dimensions");
        let lines = VariableIndex::new(dimensions, SlotKind::Line);
        let shifts = VariableIndex::new(dimensions, SlotKind::Shift);

        assert_eq!("work_1d0l1", lines.name(lines.variable(1, 0, 1)));
        assert_eq!("shift_n1d0s1", shifts.name(shifts.variable(1, 0, 1)));
    }

    #[test]
    #[should_panic]
    fn out_of_range_lookup_panics() {
        let index = index(2, 2, 2);

        let _ = index.variable(2, 0, 0);
    }
}
