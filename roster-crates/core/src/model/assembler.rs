use log::debug;

use super::Model;
use super::Objective;
use crate::constraints::ConstraintBuilder;
use crate::constraints::ScheduleRules;
use crate::index::SlotKind;
use crate::index::VariableIndex;
use crate::Dimensions;

/// Composes the [`VariableIndex`], the constraints generated from the [`ScheduleRules`] and an
/// optional objective into a [`Model`].
#[derive(Debug, Clone, Copy)]
pub struct ModelAssembler {
    index: VariableIndex,
    rules: ScheduleRules,
}

impl ModelAssembler {
    pub fn new(dimensions: Dimensions, kind: SlotKind, rules: ScheduleRules) -> ModelAssembler {
        ModelAssembler {
            index: VariableIndex::new(dimensions, kind),
            rules,
        }
    }

    pub fn rules(&self) -> ScheduleRules {
        self.rules
    }

    /// The model of the optimum mode: maximise the number of assignments.
    pub fn optimum_model(&self) -> Model {
        self.assemble(Some(Objective::MaximiseAssignments))
    }

    /// The model of the enumeration mode: a pure feasibility problem.
    pub fn enumeration_model(&self) -> Model {
        self.assemble(None)
    }

    fn assemble(&self, objective: Option<Objective>) -> Model {
        let constraints = ConstraintBuilder::new(&self.index, self.rules).build();

        debug!(
            "Assembled {} roster with {} variables and {} constraints",
            self.index.kind(),
            self.index.len(),
            constraints.len()
        );

        Model {
            index: self.index,
            constraints,
            objective,
        }
    }
}
