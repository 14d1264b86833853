//! Inventory snapshot simulator
//!
//! A detached, mutable copy of the inventory slots. Take and give follow the
//! same stacking and capacity rules as the live inventory so a plan can be
//! validated here before anything real is touched.

use thiserror::Error;
use tracing::trace;

use crate::potions::ItemForms;
use crate::types::{InventorySlot, ItemId, ItemStack, PlanOutcome};

/// Largest quantity a single slot can hold in game
pub const DEFAULT_MAX_STACK: u32 = i32::MAX as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("Inventory is missing {missing} x item {item}")]
    MissingItems { item: ItemId, missing: u64 },
    #[error("No free inventory slot for item {0}")]
    InventoryFull(ItemId),
    #[error("Stack of item {item} would exceed the maximum of {max}")]
    QuantityOverflow { item: ItemId, max: u32 },
}

impl InventoryError {
    pub fn outcome(&self) -> PlanOutcome {
        match self {
            InventoryError::MissingItems { .. } => PlanOutcome::MissingItems,
            InventoryError::InventoryFull(_) => PlanOutcome::InventoryFull,
            InventoryError::QuantityOverflow { .. } => PlanOutcome::QuantityOverflow,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySnapshot {
    slots: Vec<InventorySlot>,
    max_stack: u32,
}

impl InventorySnapshot {
    /// Create a snapshot from slot contents; zero-quantity stacks become empty slots
    pub fn new(slots: Vec<InventorySlot>, max_stack: u32) -> Self {
        let slots = slots
            .into_iter()
            .map(|slot| slot.filter(|stack| stack.quantity > 0))
            .collect();
        Self { slots, max_stack }
    }

    pub fn empty(capacity: usize, max_stack: u32) -> Self {
        Self {
            slots: vec![None; capacity],
            max_stack,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn max_stack(&self) -> u32 {
        self.max_stack
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    pub fn into_slots(self) -> Vec<InventorySlot> {
        self.slots
    }

    /// Get item at slot
    pub fn get_slot(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot)?.as_ref()
    }

    /// Occupied stacks in slot order
    pub fn stacks(&self) -> impl Iterator<Item = &ItemStack> {
        self.slots.iter().flatten()
    }

    /// Total quantity of exactly `item` across all slots
    pub fn quantity_of(&self, item: ItemId) -> u64 {
        self.stacks()
            .filter(|stack| stack.item_id == item)
            .map(|stack| stack.quantity as u64)
            .sum()
    }

    pub fn free_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Remove `quantity` units, draining unnoted stacks before noted ones.
    ///
    /// On failure the snapshot may be partially drained; callers work on a
    /// private copy and discard it.
    pub fn take(&mut self, forms: ItemForms, quantity: u64) -> Result<(), InventoryError> {
        let mut remaining = self.drain(forms.unnoted, quantity);
        if let Some(noted) = forms.noted.filter(|noted| *noted != forms.unnoted) {
            remaining = self.drain(noted, remaining);
        }

        if remaining > 0 {
            return Err(InventoryError::MissingItems {
                item: forms.unnoted,
                missing: remaining,
            });
        }
        Ok(())
    }

    fn drain(&mut self, item: ItemId, mut remaining: u64) -> u64 {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if remaining == 0 {
                break;
            }
            let Some(stack) = slot.as_mut() else {
                continue;
            };
            if stack.item_id != item {
                continue;
            }

            let taken = remaining.min(stack.quantity as u64) as u32;
            stack.quantity -= taken;
            remaining -= taken as u64;
            trace!("Took {} x {} from slot {}", taken, item, index);

            if stack.quantity == 0 {
                *slot = None;
            }
        }
        remaining
    }

    /// Add `quantity` units of a stackable (noted) item.
    ///
    /// Merges into the first stack of the same item, otherwise claims the
    /// lowest empty slot.
    pub fn give(&mut self, item: ItemId, quantity: u64) -> Result<(), InventoryError> {
        if quantity == 0 {
            return Ok(());
        }
        let max_stack = self.max_stack;
        let overflow = InventoryError::QuantityOverflow {
            item,
            max: max_stack,
        };

        if let Some(stack) = self.slots.iter_mut().flatten().find(|s| s.item_id == item) {
            let total = (stack.quantity as u64)
                .checked_add(quantity)
                .filter(|total| *total <= max_stack as u64)
                .ok_or(overflow)?;
            stack.quantity = total as u32;
            return Ok(());
        }

        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.is_none())
            .ok_or(InventoryError::InventoryFull(item))?;

        if quantity > max_stack as u64 {
            return Err(overflow);
        }
        *slot = Some(ItemStack::new(item, quantity as u32));
        trace!("Placed {} x {} in slot {}", quantity, item, index);
        Ok(())
    }
}
