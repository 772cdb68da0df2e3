//! Generation of the linear constraints of a roster from its [`ScheduleRules`].
mod builder;
mod linear;
mod rules;

pub use builder::fairness_floor;
pub use builder::ConstraintBuilder;
pub use builder::ConstraintSet;
pub use linear::ConstraintFamily;
pub use linear::LinearConstraint;
pub use linear::Relation;
pub use rules::ScheduleRules;
pub use rules::DEFAULT_MAX_CONSECUTIVE_REST;
pub use rules::DEFAULT_MAX_CONSECUTIVE_WORK;
