//! Harvesting of solutions during enumeration.
//!
//! The [`SolutionCollector`] is the callback state of an enumeration: it counts every solution
//! the engine reports and materialises only the ones whose ordinal is in the selection set.
mod solution_collector;

pub use solution_collector::CollectorState;
pub use solution_collector::SolutionCollector;
pub use solution_collector::SolutionReporter;
