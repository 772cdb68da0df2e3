use super::TerminationCondition;

/// Triggers once the engine has reported the given number of solutions.
#[derive(Clone, Copy, Debug)]
pub struct SolutionBudget {
    remaining: u64,
}

impl SolutionBudget {
    pub fn new(budget: u64) -> SolutionBudget {
        SolutionBudget { remaining: budget }
    }
}

impl TerminationCondition for SolutionBudget {
    fn should_stop(&mut self) -> bool {
        self.remaining == 0
    }

    fn solution_has_been_found(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}
