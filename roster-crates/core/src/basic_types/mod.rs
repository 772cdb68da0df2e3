mod dimensions;
mod roster_error;
mod solution;

pub use dimensions::Dimensions;
pub use dimensions::DAYS_PER_WEEK;
pub use roster_error::RosterError;
pub use solution::Solution;
