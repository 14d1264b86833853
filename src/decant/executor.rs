use tracing::debug;

use crate::decant::plan::Plan;
use crate::inventory::{InventoryError, InventorySnapshot};
use crate::potions::Classifier;
use crate::types::PlanOutcome;

/// Validates a plan against a private copy of an inventory snapshot
#[derive(Clone)]
pub struct PlanExecutor {
    classifier: Classifier,
}

impl PlanExecutor {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Apply every take, then every give, to a copy of `snapshot`.
    ///
    /// Returns the updated copy on success. `snapshot` itself is never modified.
    pub fn execute(
        &self,
        plan: &Plan,
        snapshot: &InventorySnapshot,
    ) -> Result<InventorySnapshot, InventoryError> {
        let mut working = snapshot.clone();

        for (item, quantity) in plan.take() {
            let forms = self.classifier.forms_of(*item);
            working.take(forms, *quantity)?;
        }

        // Gives only deal with noted items, which always stack
        for (item, quantity) in plan.give() {
            working.give(*item, *quantity)?;
        }

        debug!("Plan fits: {} free slots left", working.free_slots());
        Ok(working)
    }

    pub fn evaluate(&self, plan: &Plan, snapshot: &InventorySnapshot) -> PlanOutcome {
        match self.execute(plan, snapshot) {
            Ok(_) => PlanOutcome::Success,
            Err(e) => {
                debug!("Plan rejected: {}", e);
                e.outcome()
            }
        }
    }
}
