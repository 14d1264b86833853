pub mod definitions;
pub mod prices;

pub use definitions::{ItemDefinition, ItemDefinitionTable, ItemDefinitions};
pub use prices::{PriceLookup, PriceTable};
