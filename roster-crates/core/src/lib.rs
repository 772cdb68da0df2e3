//! # Roster core
//! Duty rosters (interns over work lines or shifts, across a horizon of days) expressed as
//! binary assignment models.
//!
//! Every `(worker, day, slot)` triple gets one boolean decision variable in the
//! [`index::VariableIndex`]. The [`constraints::ConstraintBuilder`] turns the scheduling rules into
//! unit-coefficient linear constraints (coverage, exclusivity, sliding-window fatigue and rest
//! bounds, a fairness floor), and the [`model::ModelAssembler`] packages them into a
//! [`model::Model`] which can be handed to any [`engine::SolvingEngine`].
//!
//! A model is solved in one of two modes:
//! * [`model::Model::solve`] asks the engine for a single best [`Solution`].
//! * [`model::Model::enumerate_all`] lets the engine report every feasible solution to a
//!   [`collector::SolutionCollector`], which counts all of them and only materialises the ones
//!   selected by the caller.
//!
//! The crate does not contain a solving engine; see the `roster-search` crate for one.
//!
//! ```rust
//! # use roster_core::Dimensions;
//! # use roster_core::constraints::ScheduleRules;
//! # use roster_core::index::SlotKind;
//! # use roster_core::model::ModelAssembler;
//! let dimensions = Dimensions::with_weeks(3, 1, 1).expect("positive dimensions");
//! let model = ModelAssembler::new(dimensions, SlotKind::Line, ScheduleRules::lines()).optimum_model();
//!
//! // One variable per (worker, day, line).
//! assert_eq!(model.index().len(), 3 * 7);
//! assert!(model.objective().is_some());
//! ```
pub(crate) mod basic_types;
pub mod collector;
pub mod constraints;
pub mod engine;
pub mod index;
pub mod model;
pub mod report;
pub mod statistics;

pub use convert_case;

pub use crate::basic_types::Dimensions;
pub use crate::basic_types::RosterError;
pub use crate::basic_types::Solution;
pub use crate::engine::termination;
