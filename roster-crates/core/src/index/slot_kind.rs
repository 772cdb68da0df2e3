use std::fmt::Display;

/// What a slot stands for in a roster. Only affects naming and report labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlotKind {
    /// A duty post which must be staffed exactly once per day.
    #[default]
    Line,
    /// One of several daily time windows.
    Shift,
}

impl SlotKind {
    /// The name of the variable for `worker` covering `slot` on `day`.
    pub fn variable_name(self, worker: usize, day: usize, slot: usize) -> String {
        match self {
            SlotKind::Line => format!("work_{worker}d{day}l{slot}"),
            SlotKind::Shift => format!("shift_n{worker}d{day}s{slot}"),
        }
    }

    /// How workers are called in reports of this kind of roster.
    pub fn worker_label(self) -> &'static str {
        match self {
            SlotKind::Line => "Worker",
            SlotKind::Shift => "Intern",
        }
    }

    pub fn slot_label(self) -> &'static str {
        match self {
            SlotKind::Line => "Line",
            SlotKind::Shift => "Shift",
        }
    }
}

impl Display for SlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slot_label().to_lowercase())
    }
}
