use crate::engine::EngineStatistics;
use crate::engine::EnumerationStatus;
use crate::engine::Verdict;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::Solution;

/// The result of [`Model::solve`](super::Model::solve).
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub verdict: Verdict,
    /// Present only if the verdict is [`Verdict::Optimal`] or [`Verdict::Feasible`].
    pub solution: Option<Solution>,
    pub statistics: EngineStatistics,
}

impl SolveOutcome {
    /// Writes the engine statistics and the verdict, if statistic logging is enabled.
    pub fn log_statistics(&self) {
        if !should_log_statistics() {
            return;
        }

        self.statistics.log(StatisticLogger::new(["engine"]));
        log_statistic("verdict", format!("{:?}", self.verdict));
        log_statistic_postfix();
    }
}

/// The result of [`Model::enumerate_all`](super::Model::enumerate_all).
#[derive(Debug, Clone, Copy)]
pub struct EnumerationSummary {
    pub status: EnumerationStatus,
    /// The final value of the solution counter: every solution the engine reported.
    pub solutions_found: u64,
    pub statistics: EngineStatistics,
}

impl EnumerationSummary {
    /// Writes the engine statistics and the solution count, if statistic logging is enabled.
    pub fn log_statistics(&self) {
        if !should_log_statistics() {
            return;
        }

        self.statistics.log(StatisticLogger::new(["engine"]));
        log_statistic("solutions_found", self.solutions_found);
        log_statistic("status", format!("{:?}", self.status));
        log_statistic_postfix();
    }
}
