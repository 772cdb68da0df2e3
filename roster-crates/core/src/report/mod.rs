//! Text renderings of a [`Solution`](crate::Solution).
mod schedule_report;

pub use schedule_report::ScheduleReport;
pub use schedule_report::WEEKDAY_LETTERS;
