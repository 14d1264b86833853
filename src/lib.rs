//! Potion decanter
//!
//! Regroups the potion doses scattered across a player's inventory into the
//! fewest containers of a chosen dose size. Containers freed by decanting are
//! reused first, then spare empty containers, and only then are new ones
//! bought. Every plan is checked against a copy of the inventory before it is
//! committed.

pub mod commands;
pub mod config;
pub mod decant;
pub mod inventory;
pub mod items;
pub mod logging;
pub mod potions;
pub mod types;
pub mod utils;

pub use decant::{DecantError, DecantReport, Decanter, Plan, PlanExecutor};
pub use inventory::{InventorySnapshot, SharedInventory};
pub use types::{InventorySlot, ItemId, ItemStack, PlanOutcome};
