/// The default maximum number of consecutive working days.
pub const DEFAULT_MAX_CONSECUTIVE_WORK: usize = 4;
/// The default maximum number of consecutive days off.
pub const DEFAULT_MAX_CONSECUTIVE_REST: usize = 3;

/// The optional scheduling rules on top of coverage and exclusivity, which are always enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleRules {
    /// `W`: no worker works more than `W` days in any window of `W + 1` consecutive days.
    pub max_consecutive_work: Option<usize>,
    /// `R`: every worker works at least once in any window of `R + 1` consecutive days.
    pub max_consecutive_rest: Option<usize>,
    /// Every worker covers at least `floor(total_slots / workers)` slots over the horizon.
    pub fairness: bool,
}

impl ScheduleRules {
    /// The rules of the line roster: fatigue and rest bounds at their defaults, no fairness floor.
    pub fn lines() -> ScheduleRules {
        ScheduleRules {
            max_consecutive_work: Some(DEFAULT_MAX_CONSECUTIVE_WORK),
            max_consecutive_rest: Some(DEFAULT_MAX_CONSECUTIVE_REST),
            fairness: false,
        }
    }

    /// The rules of the shift roster: only the fairness floor.
    pub fn shifts() -> ScheduleRules {
        ScheduleRules {
            max_consecutive_work: None,
            max_consecutive_rest: None,
            fairness: true,
        }
    }

    /// Only coverage and exclusivity.
    pub fn unconstrained() -> ScheduleRules {
        ScheduleRules {
            max_consecutive_work: None,
            max_consecutive_rest: None,
            fairness: false,
        }
    }
}

impl Default for ScheduleRules {
    fn default() -> Self {
        ScheduleRules::lines()
    }
}
