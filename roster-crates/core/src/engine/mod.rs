//! The seam between roster models and the solver which decides them.
//!
//! The core never searches itself. A [`Model`](crate::model::Model) is submitted to a
//! [`SolvingEngine`], which is polled through a [`termination::TerminationCondition`] and reports
//! [`EngineStatistics`] afterwards.
#[cfg(test)]
pub(crate) mod brute_force;
mod solving_engine;
pub mod termination;

pub use solving_engine::EnumerationStatus;
pub use solving_engine::ObjectiveDirection;
pub use solving_engine::SolvingEngine;
pub use solving_engine::VariableValues;
pub use solving_engine::Verdict;

crate::create_statistics_struct!(
    /// Search counters of a [`SolvingEngine`], accumulated over all of its searches.
    pub EngineStatistics {
        /// The number of searches (or search nodes) which ended without a solution.
        num_conflicts: u64,
        /// The number of searches (or branching decisions) performed.
        num_branches: u64,
        /// The time spent searching, in seconds.
        wall_time: f64,
    }
);
