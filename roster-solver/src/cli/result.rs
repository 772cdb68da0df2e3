use thiserror::Error;

use crate::RosterError;

pub type CliResult<T> = Result<T, CliError>;

/// Failures of a roster binary. A verdict of the engine, such as infeasibility, is not a failure.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error, more details: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid roster, more details: {0}")]
    InvalidRoster(#[from] RosterError),
    #[error("Could not configure logging, more details: {0}")]
    Logging(#[from] log::SetLoggerError),
}
