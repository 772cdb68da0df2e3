use std::ops::Range;

use clap::Parser;
use log::error;
use roster_solver::cli;
use roster_solver::cli::CliResult;
use roster_solver::core::collector::SolutionCollector;
use roster_solver::core::constraints::ScheduleRules;
use roster_solver::core::engine::EnumerationStatus;
use roster_solver::core::index::SlotKind;
use roster_solver::core::model::ModelAssembler;
use roster_solver::core::report::ScheduleReport;
use roster_solver::core::termination::Combinator;
use roster_solver::core::termination::SolutionBudget;
use roster_solver::Dimensions;
use roster_solver::SearchEngine;
use roster_solver::Solution;

const NUM_INTERNS: i64 = 4;
const NUM_SHIFTS_PER_DAY: i64 = 3;
const NUM_DAYS: i64 = 5;
/// The ordinals of the solutions which are printed.
const PRINTED_SOLUTIONS: Range<u64> = 0..5;

/// Enumerates the rosters of 4 interns over 3 daily shifts during 5 days.
///
/// Every shift is covered by exactly one intern, no intern works two shifts on the same day, and
/// every intern works at least 3 shifts. The first solutions are printed, all of them are counted.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Enables log messages on stderr.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,
    /// Enables logging of statistics on stdout.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,
    /// The time budget for the enumeration, given in milliseconds.
    ///
    /// Without a time budget (or solution limit) the enumeration runs until every roster has been
    /// found; it can always be interrupted with Ctrl-C, after which the partial count is printed.
    ///
    /// Possible values: u64 (Optional)
    #[arg(short = 't', long = "time-limit", verbatim_doc_comment)]
    time_limit: Option<u64>,
    /// Stops the enumeration after this many rosters.
    ///
    /// Possible values: u64 (Optional)
    #[arg(long = "solution-limit", verbatim_doc_comment)]
    solution_limit: Option<u64>,
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> CliResult<()> {
    let args = Args::parse();
    cli::configure_logging(args.verbose, args.log_statistics)?;

    let dimensions = Dimensions::new(NUM_INTERNS, NUM_DAYS, NUM_SHIFTS_PER_DAY)?;
    let model =
        ModelAssembler::new(dimensions, SlotKind::Shift, ScheduleRules::shifts()).enumeration_model();

    let mut termination = Combinator::new(
        cli::termination(args.time_limit)?,
        args.solution_limit.map(SolutionBudget::new),
    );
    let mut collector =
        SolutionCollector::new(PRINTED_SOLUTIONS, |ordinal: u64, solution: &Solution| {
            let _ = cli::verify(&model, solution);

            let report = ScheduleReport::new(solution);
            println!("Solution {ordinal}");
            print!("{}", report.day_breakdown());
            println!();
            println!("{report}");
        });

    let summary = model.enumerate_all(SearchEngine::new(), &mut termination, &mut collector);

    match summary.status {
        EnumerationStatus::Finished => {}
        EnumerationStatus::Unsatisfiable => println!("No schedule exists."),
        EnumerationStatus::Unknown => {
            println!("Search stopped before completion; the count below is partial.")
        }
    }

    println!();
    print!(
        "{}",
        cli::statistics_block(&summary.statistics, summary.solutions_found)
    );

    summary.log_statistics();
    Ok(())
}
