use std::fmt::Display;

use itertools::Itertools;

use super::statistic_logging::log_statistic;

/// Logs statistics under a name prefix, e.g. `engine_num_conflicts`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatisticLogger {
    name_prefix: String,
}

impl StatisticLogger {
    /// A logger whose prefix is the given parts joined by `_`.
    pub fn new<Parts: IntoIterator<Item = impl Display>>(parts: Parts) -> Self {
        Self {
            name_prefix: parts.into_iter().join("_"),
        }
    }

    /// A new logger whose prefix extends this one with `addition`.
    pub fn attach_to_prefix(&self, addition: impl Display) -> Self {
        let name_prefix = if self.name_prefix.is_empty() {
            addition.to_string()
        } else {
            format!("{}_{addition}", self.name_prefix)
        };

        Self { name_prefix }
    }

    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }

    pub fn log_statistic(&self, value: impl Display) {
        log_statistic(&self.name_prefix, value);
    }
}
