//! Bookkeeping between `(worker, day, slot)` triples and assignment variables.
mod slot_kind;
mod variable_index;

pub use slot_kind::SlotKind;
pub use variable_index::AssignmentKey;
pub use variable_index::VariableId;
pub use variable_index::VariableIndex;
