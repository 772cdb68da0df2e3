use super::TerminationCondition;

/// Triggers as soon as either of two [`TerminationCondition`]s triggers.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> bool {
        // Both are polled so that stateful conditions observe every poll.
        let first = self.t1.should_stop();
        let second = self.t2.should_stop();
        first || second
    }

    fn solution_has_been_found(&mut self) {
        self.t1.solution_has_been_found();
        self.t2.solution_has_been_found();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::termination::Indefinite;
    use crate::termination::SolutionBudget;

    #[test]
    fn stops_when_one_side_stops() {
        let mut condition = Combinator::new(Indefinite, SolutionBudget::new(2));

        condition.solution_has_been_found();
        assert!(!condition.should_stop());

        condition.solution_has_been_found();
        assert!(condition.should_stop());
    }
}
