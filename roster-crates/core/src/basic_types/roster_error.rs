use thiserror::Error;

#[cfg(doc)]
use crate::Dimensions;

/// Errors raised while constructing a roster model.
///
/// These are configuration errors: they are reported before any variable is created. Verdicts of
/// a solving engine (e.g. infeasibility) are never reported through this type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    /// One of the cardinalities passed to [`Dimensions`] was zero or negative.
    #[error("the number of {name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: i64 },
    /// The cartesian product of workers, days and slots does not fit the variable identifiers.
    #[error("{workers} workers over {days} days with {slots} slots per day need too many variables")]
    TooManyVariables {
        workers: usize,
        days: usize,
        slots: usize,
    },
}
