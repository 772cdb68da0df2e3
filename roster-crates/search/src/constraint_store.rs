use roster_core::constraints::Relation;

/// `lower <= sum(terms) <= upper` over 0-1 variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SumConstraint {
    pub(crate) terms: Box<[usize]>,
    pub(crate) lower: i64,
    pub(crate) upper: i64,
}

impl SumConstraint {
    pub(crate) fn new(terms: Box<[usize]>, relation: Relation, bound: i64) -> SumConstraint {
        let num_terms = terms.len() as i64;
        let (lower, upper) = match relation {
            Relation::LessOrEqual => (0, bound),
            Relation::Equal => (bound, bound),
            Relation::GreaterOrEqual => (bound, num_terms),
        };

        SumConstraint {
            terms,
            lower,
            upper,
        }
    }

    pub(crate) fn is_equality(&self) -> bool {
        self.lower == self.upper
    }
}

/// The number of terms of a [`SumConstraint`] which are set to 1 and which are still unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SumCount {
    pub(crate) ones: i64,
    pub(crate) unassigned: i64,
}

/// The constraints of a model, and for every variable the constraints it occurs in.
#[derive(Debug, Clone, Default)]
pub(crate) struct ConstraintStore {
    constraints: Vec<SumConstraint>,
    occurrences: Vec<Vec<usize>>,
}

impl ConstraintStore {
    /// Adds a variable and returns its index.
    pub(crate) fn grow(&mut self) -> usize {
        self.occurrences.push(Vec::new());
        self.occurrences.len() - 1
    }

    pub(crate) fn add(&mut self, constraint: SumConstraint) {
        let id = self.constraints.len();
        for &term in constraint.terms.iter() {
            self.occurrences[term].push(id);
        }
        self.constraints.push(constraint);
    }

    pub(crate) fn num_variables(&self) -> usize {
        self.occurrences.len()
    }

    pub(crate) fn constraints(&self) -> &[SumConstraint] {
        &self.constraints
    }

    pub(crate) fn constraint(&self, id: usize) -> &SumConstraint {
        &self.constraints[id]
    }

    /// The constraints in which `variable` occurs.
    pub(crate) fn occurrences(&self, variable: usize) -> &[usize] {
        &self.occurrences[variable]
    }

    /// The counts of every constraint before any variable is assigned.
    pub(crate) fn initial_counts(&self) -> Vec<SumCount> {
        self.constraints
            .iter()
            .map(|constraint| SumCount {
                ones: 0,
                unassigned: constraint.terms.len() as i64,
            })
            .collect()
    }
}
