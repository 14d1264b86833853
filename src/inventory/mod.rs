pub mod live;
pub mod snapshot;

pub use live::{InventorySource, SharedInventory};
pub use snapshot::{InventoryError, InventorySnapshot, DEFAULT_MAX_STACK};
