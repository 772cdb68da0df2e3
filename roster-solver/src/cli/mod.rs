//! Plumbing shared by the roster binaries.
mod logging;
mod result;

use std::fmt::Write;
use std::time::Duration;

use log::error;
use roster_core::engine::EngineStatistics;
use roster_core::model::Model;
use roster_core::termination::Combinator;
use roster_core::termination::OsSignal;
use roster_core::termination::TimeBudget;

pub use logging::configure_logging;
pub use logging::STATISTIC_POSTFIX;
pub use logging::STATISTIC_PREFIX;
pub use result::CliError;
pub use result::CliResult;

use crate::Solution;

/// The termination condition of a run: an interrupt by the user, or the time limit (given in
/// milliseconds) if there is one.
pub fn termination(time_limit: Option<u64>) -> CliResult<Combinator<OsSignal, Option<TimeBudget>>> {
    let time_budget = time_limit
        .map(Duration::from_millis)
        .map(TimeBudget::starting_now);

    Ok(Combinator::new(OsSignal::install()?, time_budget))
}

/// Checks a solution returned by the engine against the model, and logs the violated constraint
/// if there is one. Returns whether the solution is valid.
pub fn verify(model: &Model, solution: &Solution) -> bool {
    match model.check(solution) {
        Ok(()) => true,
        Err(violation) => {
            error!("The engine returned an invalid roster: {violation}");
            false
        }
    }
}

/// The human-readable summary of an enumeration.
pub fn statistics_block(statistics: &EngineStatistics, solutions_found: u64) -> String {
    let mut block = String::new();
    let _ = writeln!(block, "Statistics");
    let _ = writeln!(block, "  - conflicts       : {}", statistics.num_conflicts);
    let _ = writeln!(block, "  - branches        : {}", statistics.num_branches);
    let _ = writeln!(block, "  - wall time       : {} s", statistics.wall_time);
    let _ = writeln!(block, "  - solutions found : {solutions_found}");
    block
}
