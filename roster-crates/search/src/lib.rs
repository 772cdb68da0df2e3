//! # Roster Search
//! A [`SolvingEngine`](roster_core::engine::SolvingEngine) for roster models which explores the
//! 0-1 variables with a depth-first search, propagating the sum constraints after every
//! assignment.
//!
//! ```rust
//! # use roster_core::Dimensions;
//! # use roster_core::constraints::ScheduleRules;
//! # use roster_core::engine::Verdict;
//! # use roster_core::index::SlotKind;
//! # use roster_core::model::ModelAssembler;
//! # use roster_core::termination::Indefinite;
//! # use roster_search::SearchEngine;
//! let dimensions = Dimensions::new(2, 3, 1).expect("positive dimensions");
//! let model = ModelAssembler::new(dimensions, SlotKind::Line, ScheduleRules::lines()).optimum_model();
//!
//! let outcome = model.solve(SearchEngine::new(), &mut Indefinite);
//!
//! assert_eq!(outcome.verdict, Verdict::Optimal);
//! assert_eq!(outcome.solution.map(|solution| solution.num_assigned()), Some(3));
//! ```
mod constraint_store;
mod engine;
mod input_order;
mod objective_bound;
mod search;
mod trail;

pub use engine::SearchEngine;
pub use engine::SearchVariable;
