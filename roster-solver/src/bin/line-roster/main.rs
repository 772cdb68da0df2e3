use clap::Parser;
use log::error;
use log::warn;
use roster_solver::cli;
use roster_solver::cli::CliResult;
use roster_solver::core::constraints::ScheduleRules;
use roster_solver::core::constraints::DEFAULT_MAX_CONSECUTIVE_REST;
use roster_solver::core::constraints::DEFAULT_MAX_CONSECUTIVE_WORK;
use roster_solver::core::engine::Verdict;
use roster_solver::core::index::SlotKind;
use roster_solver::core::model::ModelAssembler;
use roster_solver::core::report::ScheduleReport;
use roster_solver::Dimensions;
use roster_solver::SearchEngine;

/// Solves a roster of interns over work lines for a number of weeks.
///
/// Every line is staffed by exactly one intern each day, and no intern works two lines on the
/// same day. No intern works too many days in a row, nor stays off too many days in a row.
#[derive(Debug, Parser)]
#[command(author, version, about, allow_negative_numbers = true)]
struct Args {
    /// The number of interns.
    interns: i64,
    /// The number of weeks in the roster; every week has 7 days.
    weeks: i64,
    /// The number of work lines which have to be staffed every day.
    lines: i64,
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
    /// The time budget for the solver, given in milliseconds.
    ///
    /// Possible values: u64 (Optional)
    #[arg(short = 't', long = "time-limit", verbatim_doc_comment)]
    time_limit: Option<u64>,
    /// The maximum number of consecutive working days of an intern.
    ///
    /// Possible values: usize
    #[arg(
        long = "max-consecutive-work",
        default_value_t = DEFAULT_MAX_CONSECUTIVE_WORK,
        verbatim_doc_comment
    )]
    max_consecutive_work: usize,
    /// The maximum number of consecutive days off of an intern.
    ///
    /// Possible values: usize
    #[arg(
        long = "max-consecutive-rest",
        default_value_t = DEFAULT_MAX_CONSECUTIVE_REST,
        verbatim_doc_comment
    )]
    max_consecutive_rest: usize,
    /// Drops the limit on consecutive working days.
    #[arg(long = "no-fatigue")]
    no_fatigue: bool,
    /// Drops the limit on consecutive days off.
    #[arg(long = "no-rest")]
    no_rest: bool,
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

    let dimensions = Dimensions::with_weeks(args.interns, args.weeks, args.lines)?;
    println!(
        "Interns: {} Days: {} Lines: {}",
        dimensions.workers(),
        dimensions.days(),
        dimensions.slots()
    );
    println!();

    let rules = ScheduleRules {
        max_consecutive_work: (!args.no_fatigue).then_some(args.max_consecutive_work),
        max_consecutive_rest: (!args.no_rest).then_some(args.max_consecutive_rest),
        fairness: false,
    };
    let model = ModelAssembler::new(dimensions, SlotKind::Line, rules).optimum_model();

    let mut termination = cli::termination(args.time_limit)?;
    let outcome = model.solve(SearchEngine::new(), &mut termination);

    match (outcome.verdict, &outcome.solution) {
        (Verdict::Optimal | Verdict::Feasible, Some(solution)) => {
            if outcome.verdict == Verdict::Feasible {
                warn!("The roster has not been proven optimal");
            }
            let _ = cli::verify(&model, solution);
            print!("{}", ScheduleReport::new(solution));
        }
        (Verdict::Infeasible, _) => println!("No schedule exists for these parameters."),
        _ => println!("No schedule found within the time limit."),
    }

    outcome.log_statistics();
    Ok(())
}
