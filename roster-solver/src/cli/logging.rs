use std::io::Write;

use log::info;
use log::LevelFilter;
use roster_core::convert_case::Case;
use roster_core::statistics::configure_statistic_logging;

use super::CliResult;

/// The prefix of every statistic line written with `--log-statistics`.
pub const STATISTIC_PREFIX: &str = "%%%roster-stat:";
/// The line closing a block of statistics.
pub const STATISTIC_POSTFIX: &str = "%%%roster-stat-end";

/// Sets up the log output on stderr, and the statistic output on stdout if requested.
///
/// Log messages are prefixed with `% ` so they can be told apart from the roster.
pub fn configure_logging(verbose: bool, log_statistics: bool) -> CliResult<()> {
    if log_statistics {
        configure_statistic_logging(
            STATISTIC_PREFIX,
            Some(STATISTIC_POSTFIX),
            Some(Case::Snake),
            None,
        );
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .try_init()?;
    info!("Logging successfully configured");
    Ok(())
}
