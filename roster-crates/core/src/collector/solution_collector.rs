use fnv::FnvHashSet;
use log::trace;
use log::warn;

use crate::Solution;

/// Receives the selected solutions of an enumeration, in the order in which they are found.
pub trait SolutionReporter {
    /// Called with the ordinal of the solution (its position in discovery order, starting at 0).
    fn report(&mut self, ordinal: u64, solution: &Solution);
}

impl<F: FnMut(u64, &Solution)> SolutionReporter for F {
    fn report(&mut self, ordinal: u64, solution: &Solution) {
        self(ordinal, solution)
    }
}

/// The lifecycle of a [`SolutionCollector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollectorState {
    #[default]
    Idle,
    Collecting,
    Done,
}

/// Counts the solutions of an enumeration and reports the selected ones.
///
/// The collector moves from [`CollectorState::Idle`] to [`CollectorState::Collecting`] when the
/// enumeration starts, and to [`CollectorState::Done`] once the engine returns. The counter is
/// incremented for every solution, whether it is selected or not, and is never reset. Solutions
/// are only materialised when selected, so the memory use does not grow with the number of
/// solutions.
#[derive(Debug)]
pub struct SolutionCollector<R> {
    selection: FnvHashSet<u64>,
    solution_count: u64,
    state: CollectorState,
    reporter: R,
}

impl<R: SolutionReporter> SolutionCollector<R> {
    /// A collector which reports the solutions with the given ordinals to `reporter`.
    pub fn new(selection: impl IntoIterator<Item = u64>, reporter: R) -> SolutionCollector<R> {
        SolutionCollector {
            selection: selection.into_iter().collect(),
            solution_count: 0,
            state: CollectorState::Idle,
            reporter,
        }
    }

    /// Marks the start of the enumeration.
    ///
    /// # Panics
    /// If the collector has already been started.
    pub fn start(&mut self) {
        assert_eq!(
            CollectorState::Idle,
            self.state,
            "a solution collector can only be used for one enumeration"
        );
        self.state = CollectorState::Collecting;
    }

    /// Handles one solution reported by the engine.
    ///
    /// `materialize` is only called if the current ordinal is selected; the reporter has handled
    /// the solution by the time this returns.
    pub fn on_solution(&mut self, materialize: impl FnOnce() -> Solution) {
        if self.state != CollectorState::Collecting {
            warn!(
                "Ignoring a solution delivered while the collector is {:?}",
                self.state
            );
            return;
        }

        let ordinal = self.solution_count;
        if self.selection.contains(&ordinal) {
            trace!("Reporting solution {ordinal}");
            let solution = materialize();
            self.reporter.report(ordinal, &solution);
        }

        self.solution_count += 1;
    }

    /// Marks the end of the enumeration and returns the number of solutions seen.
    pub fn finish(&mut self) -> u64 {
        self.state = CollectorState::Done;
        self.solution_count
    }

    pub fn solution_count(&self) -> u64 {
        self.solution_count
    }

    pub fn state(&self) -> CollectorState {
        self.state
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::SlotKind;
    use crate::index::VariableIndex;
    use crate::Dimensions;

    fn solution() -> Solution {
        let index = VariableIndex::new(
            Dimensions::new(1, 1, 1).expect("valid dimensions"),
            SlotKind::Shift,
        );
        Solution::from_fn(index, |_| true)
    }

    #[derive(Default)]
    struct Ordinals(Vec<u64>);

    impl SolutionReporter for Ordinals {
        fn report(&mut self, ordinal: u64, _: &Solution) {
            self.0.push(ordinal);
        }
    }

    #[test]
    fn goes_through_its_states() {
        let mut collector = SolutionCollector::new([0], Ordinals::default());
        assert_eq!(CollectorState::Idle, collector.state());

        collector.start();
        assert_eq!(CollectorState::Collecting, collector.state());

        let _ = collector.finish();
        assert_eq!(CollectorState::Done, collector.state());
    }

    #[test]
    fn only_selected_ordinals_are_reported() {
        let mut collector = SolutionCollector::new([1, 3, 8], Ordinals::default());
        collector.start();

        for _ in 0..5 {
            collector.on_solution(solution);
        }

        assert_eq!(5, collector.finish());
        assert_eq!(vec![1, 3], collector.into_reporter().0);
    }

    #[test]
    fn unselected_solutions_are_not_materialised() {
        let mut collector = SolutionCollector::new([], Ordinals::default());
        collector.start();

        collector.on_solution(|| panic!("the solution is not selected"));
        collector.on_solution(|| panic!("the solution is not selected"));

        assert_eq!(2, collector.finish());
        assert!(collector.reporter().0.is_empty());
    }

    #[test]
    fn closures_can_report() {
        let mut seen = Vec::new();
        let mut collector = SolutionCollector::new(0..2, |ordinal: u64, solution: &Solution| {
            seen.push((ordinal, solution.num_assigned()))
        });
        collector.start();

        for _ in 0..3 {
            collector.on_solution(solution);
        }
        let _ = collector.finish();

        assert_eq!(vec![(0, 1), (1, 1)], seen);
    }

    #[test]
    fn solutions_outside_collection_are_ignored() {
        let mut collector = SolutionCollector::new([0], Ordinals::default());

        collector.on_solution(solution);
        assert_eq!(0, collector.solution_count());

        collector.start();
        let _ = collector.finish();
        collector.on_solution(solution);

        assert_eq!(0, collector.solution_count());
        assert!(collector.reporter().0.is_empty());
    }

    #[test]
    #[should_panic]
    fn cannot_be_started_twice() {
        let mut collector = SolutionCollector::new([0], Ordinals::default());

        collector.start();
        collector.start();
    }
}
