use anyhow::{bail, Result};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

use crate::config::types::StartingSlot;
use crate::decant::{Plan, PlanExecutor};
use crate::inventory::snapshot::{InventoryError, InventorySnapshot};
use crate::types::{InventorySlot, ItemStack};

/// Read access to the player's real inventory
pub trait InventorySource {
    /// Fixed-length slot array, one entry per inventory position
    fn inventory_slots(&self) -> Vec<InventorySlot>;

    fn max_stack(&self) -> u32;

    fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot::new(self.inventory_slots(), self.max_stack())
    }
}

/// In-memory inventory shared between the console host and the decanter
#[derive(Clone)]
pub struct SharedInventory {
    slots: Arc<RwLock<Vec<InventorySlot>>>,
    max_stack: u32,
}

impl SharedInventory {
    pub fn new(capacity: usize, max_stack: u32) -> Self {
        Self {
            slots: Arc::new(RwLock::new(vec![None; capacity])),
            max_stack,
        }
    }

    /// Build an inventory pre-filled with the configured stacks
    pub fn seeded(capacity: usize, max_stack: u32, seed: &[StartingSlot]) -> Result<Self> {
        let inventory = Self::new(capacity, max_stack);
        {
            let mut slots = inventory.slots.write();
            for entry in seed {
                if entry.slot >= capacity {
                    bail!(
                        "Starting inventory slot {} is outside the {}-slot inventory",
                        entry.slot,
                        capacity
                    );
                }
                if entry.quantity > max_stack {
                    bail!(
                        "Starting inventory slot {} holds {} items, more than the maximum stack of {}",
                        entry.slot,
                        entry.quantity,
                        max_stack
                    );
                }
                slots[entry.slot] = Some(ItemStack::new(entry.item_id, entry.quantity))
                    .filter(|stack| stack.quantity > 0);
            }
        }
        Ok(inventory)
    }

    /// Overwrite the whole inventory with the contents of `snapshot`
    pub fn replace(&self, snapshot: InventorySnapshot) {
        *self.slots.write() = snapshot.into_slots();
    }

    /// Validate `plan` against the current contents and, if it succeeds, store the result
    pub fn apply(&self, plan: &Plan, executor: &PlanExecutor) -> Result<(), InventoryError> {
        let mut slots = self.slots.write();
        let current = InventorySnapshot::new(slots.clone(), self.max_stack);
        let updated = executor.execute(plan, &current)?;
        *slots = updated.into_slots();
        info!(
            "Inventory updated: {} take and {} give entries applied",
            plan.take().len(),
            plan.give().len()
        );
        Ok(())
    }
}

impl InventorySource for SharedInventory {
    fn inventory_slots(&self) -> Vec<InventorySlot> {
        self.slots.read().clone()
    }

    fn max_stack(&self) -> u32 {
        self.max_stack
    }
}
