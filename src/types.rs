use serde::{Deserialize, Serialize};
use std::fmt;

/// Game item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        ItemId(id)
    }
}

/// Represents the contents of an occupied inventory slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item_id: ItemId,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(item_id: impl Into<ItemId>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
        }
    }
}

/// A single inventory position; `None` is an empty slot
pub type InventorySlot = Option<ItemStack>;

/// Terminal result of executing a plan against an inventory snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanOutcome {
    Success,
    MissingItems,
    InventoryFull,
    QuantityOverflow,
}

impl PlanOutcome {
    /// Status line shown to the player
    pub fn message(&self) -> &'static str {
        match self {
            PlanOutcome::Success => "Potion decant completed successfully",
            PlanOutcome::InventoryFull => "Your inventory is too full to hold all items",
            PlanOutcome::MissingItems => "Your inventory is missing containers or coins",
            PlanOutcome::QuantityOverflow => "Cannot decant potions because of an integer overflow",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PlanOutcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            PlanOutcome::Success.message(),
            "Potion decant completed successfully"
        );
        assert_eq!(
            PlanOutcome::MissingItems.message(),
            "Your inventory is missing containers or coins"
        );
        assert!(PlanOutcome::Success.is_success());
        assert!(!PlanOutcome::InventoryFull.is_success());
    }

    #[test]
    fn test_item_stack_from_raw_id() {
        let stack = ItemStack::new(2428, 5);
        assert_eq!(stack.item_id, ItemId(2428));
        assert_eq!(stack.quantity, 5);
    }
}
