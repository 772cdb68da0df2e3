use std::fmt::Display;
use std::fmt::Write;

use itertools::Itertools;

use crate::Solution;

/// The letters of the header, one per day of the week starting on Monday.
pub const WEEKDAY_LETTERS: [char; 7] = ['M', 'T', 'W', 'T', 'F', 'S', 'S'];

/// The width of the column holding the row labels.
const LABEL_WIDTH: usize = 12;

/// The marker of a day without assignment.
const OFF: &str = "_";

/// Renders a [`Solution`] as text. Labels follow the slot kind of the solution: `Worker`/`Line`
/// for line rosters and `Intern`/`Shift` for shift rosters.
///
/// The [`Display`] implementation writes the worker timeline and the slot timeline separated by a
/// blank line.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleReport<'a> {
    solution: &'a Solution,
}

impl<'a> ScheduleReport<'a> {
    pub fn new(solution: &'a Solution) -> ScheduleReport<'a> {
        ScheduleReport { solution }
    }

    /// One weekday letter per day of the horizon, after an empty label column.
    pub fn header(&self) -> String {
        let days = self.solution.index().dimensions().days();
        let letters = WEEKDAY_LETTERS.iter().cycle().take(days).join(" ");
        format!("{:width$}{letters} ", "", width = LABEL_WIDTH)
    }

    /// Per worker, the slot covered on each day or `_` when the worker is off.
    pub fn worker_timeline(&self) -> String {
        let dimensions = self.solution.index().dimensions();
        let label = self.solution.index().kind().worker_label();

        let mut timeline = self.header();
        timeline.push('\n');
        for worker in 0..dimensions.workers() {
            let cells = (0..dimensions.days()).map(|day| {
                self.solution
                    .slot_of(worker, day)
                    .map_or_else(|| OFF.to_owned(), |slot| slot.to_string())
            });
            push_row(&mut timeline, label, worker, cells);
        }

        timeline
    }

    /// Per slot, the worker covering it on each day.
    pub fn slot_timeline(&self) -> String {
        let dimensions = self.solution.index().dimensions();
        let label = self.solution.index().kind().slot_label();

        let mut timeline = self.header();
        timeline.push('\n');
        for slot in 0..dimensions.slots() {
            let cells = (0..dimensions.days()).map(|day| {
                self.solution
                    .worker_of(day, slot)
                    .map_or_else(|| OFF.to_owned(), |worker| worker.to_string())
            });
            push_row(&mut timeline, label, slot, cells);
        }

        timeline
    }

    /// Per day, one line per worker telling which slot they cover, if any.
    pub fn day_breakdown(&self) -> String {
        let dimensions = self.solution.index().dimensions();
        let kind = self.solution.index().kind();
        let worker_label = kind.worker_label();
        let slot_label = kind.slot_label().to_lowercase();

        let mut breakdown = String::new();
        for day in 0..dimensions.days() {
            let _ = writeln!(breakdown, "Day {day}");
            for worker in 0..dimensions.workers() {
                let slots = (0..dimensions.slots())
                    .filter(|&slot| self.solution.is_assigned(worker, day, slot))
                    .collect::<Vec<_>>();

                if slots.is_empty() {
                    let _ = writeln!(breakdown, "\t{worker_label} {worker} does not work");
                }
                for slot in slots {
                    let _ = writeln!(
                        breakdown,
                        "\t{worker_label} {worker} works on {slot_label} {slot}"
                    );
                }
            }
        }

        breakdown
    }
}

impl Display for ScheduleReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.worker_timeline(), self.slot_timeline())
    }
}

/// Writes `{label} {id}:` and the cells. The gap after the label is the one which puts the cells
/// of single-digit ids in the first column after [`LABEL_WIDTH`]; longer ids push their row to the
/// right instead of shrinking the gap.
fn push_row(output: &mut String, label: &str, id: usize, cells: impl Iterator<Item = String>) {
    let gap = LABEL_WIDTH.saturating_sub(label.len() + 3).max(1);
    let _ = writeln!(
        output,
        "{label} {id}:{:gap$}{} ",
        "",
        cells.format(" ")
    );
}
