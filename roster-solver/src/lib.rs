//! # Roster solver
//! Solves duty rosters: which intern covers which line (or shift) on which day.
//!
//! The models are built by [`core`] and solved by the [`SearchEngine`]. Two binaries are provided:
//! * `line-roster` finds one optimal roster of interns over work lines for a number of weeks,
//!   subject to limits on consecutive working days and consecutive days off.
//! * `shift-roster` enumerates the rosters of a fixed instance of interns over daily shifts, in
//!   which every intern gets a fair share of the shifts, and prints the first few of them.
//!
//! # Solving a line roster
//! ```rust
//! # use roster_solver::core::constraints::ScheduleRules;
//! # use roster_solver::core::engine::Verdict;
//! # use roster_solver::core::index::SlotKind;
//! # use roster_solver::core::model::ModelAssembler;
//! # use roster_solver::core::report::ScheduleReport;
//! # use roster_solver::core::termination::Indefinite;
//! # use roster_solver::Dimensions;
//! # use roster_solver::SearchEngine;
//! // 3 interns over 10 days staffing a single line.
//! let dimensions = Dimensions::new(3, 10, 1).expect("positive dimensions");
//! let model = ModelAssembler::new(dimensions, SlotKind::Line, ScheduleRules::lines()).optimum_model();
//!
//! let outcome = model.solve(SearchEngine::new(), &mut Indefinite);
//! assert_eq!(outcome.verdict, Verdict::Optimal);
//!
//! let solution = outcome.solution.expect("an optimal roster");
//! assert_eq!(model.check(&solution), Ok(()));
//! println!("{}", ScheduleReport::new(&solution));
//! ```
pub mod cli;

pub use roster_core as core;
pub use roster_core::Dimensions;
pub use roster_core::RosterError;
pub use roster_core::Solution;
pub use roster_search::SearchEngine;
