//! A [`TerminationCondition`] is polled by a [`SolvingEngine`] while it searches. It tells the
//! engine to give up, even if no definitive conclusion has been reached; the engine then reports
//! an unknown verdict. The most common example is [`TimeBudget`], the time limit of a run.
//!
//! [`SolvingEngine`]: crate::engine::SolvingEngine
mod combinator;
mod indefinite;
mod os_signal;
mod solution_budget;
mod time_budget;

pub use combinator::Combinator;
pub use indefinite::Indefinite;
pub use os_signal::OsSignal;
pub use solution_budget::SolutionBudget;
pub use time_budget::TimeBudget;

/// Determines when an engine should stop searching.
pub trait TerminationCondition {
    /// Returns `true` when the engine should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called by the engine every time it reports a solution.
    fn solution_has_been_found(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn solution_has_been_found(&mut self) {
        if let Some(t) = self {
            t.solution_has_been_found()
        }
    }
}

impl<T: TerminationCondition + ?Sized> TerminationCondition for &mut T {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }

    fn solution_has_been_found(&mut self) {
        (**self).solution_has_been_found()
    }
}
