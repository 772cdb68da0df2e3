use super::RosterError;

/// The number of days in a week of the roster horizon.
pub const DAYS_PER_WEEK: usize = 7;

/// The three cardinalities of a roster: workers, days in the horizon and slots per day.
///
/// All of them are strictly positive; [`Dimensions::new`] is the only way to obtain an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    workers: usize,
    days: usize,
    slots: usize,
}

impl Dimensions {
    /// Validates the three cardinalities.
    ///
    /// Returns [`RosterError::InvalidDimension`] for the first one which is not positive.
    pub fn new(workers: i64, days: i64, slots: i64) -> Result<Dimensions, RosterError> {
        let dimensions = Dimensions {
            workers: positive("workers", workers)?,
            days: positive("days", days)?,
            slots: positive("slots", slots)?,
        };

        let fits = dimensions
            .workers
            .checked_mul(dimensions.days)
            .and_then(|product| product.checked_mul(dimensions.slots))
            .is_some_and(|num_variables| u32::try_from(num_variables).is_ok());
        if !fits {
            return Err(RosterError::TooManyVariables {
                workers: dimensions.workers,
                days: dimensions.days,
                slots: dimensions.slots,
            });
        }

        Ok(dimensions)
    }

    /// A horizon made of `weeks` whole weeks.
    pub fn with_weeks(workers: i64, weeks: i64, slots: i64) -> Result<Dimensions, RosterError> {
        let _ = positive("weeks", weeks)?;
        Dimensions::new(workers, weeks.saturating_mul(DAYS_PER_WEEK as i64), slots)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    /// The number of slots which have to be staffed over the whole horizon.
    pub fn total_slots(&self) -> usize {
        self.days * self.slots
    }

    /// The number of assignment variables, one per `(worker, day, slot)` triple.
    pub fn num_variables(&self) -> usize {
        self.workers * self.days * self.slots
    }
}

fn positive(name: &'static str, value: i64) -> Result<usize, RosterError> {
    match usize::try_from(value) {
        Ok(cardinality) if cardinality > 0 => Ok(cardinality),
        _ => Err(RosterError::InvalidDimension { name, value }),
    }
}
