use std::collections::HashMap;

use crate::config::types::ContainerPrice;
use crate::types::ItemId;

/// Price lookup for items the decanter may need to sell to the player
pub trait PriceLookup {
    fn price_of(&self, item: ItemId) -> Option<u64>;
}

/// Static price list, usually built from `config.toml`
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    prices: HashMap<ItemId, u64>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(entries: &[ContainerPrice]) -> Self {
        let prices = entries
            .iter()
            .map(|entry| (ItemId(entry.item_id), entry.price))
            .collect();
        Self { prices }
    }

    pub fn set_price(&mut self, item: ItemId, price: u64) {
        self.prices.insert(item, price);
    }
}

impl PriceLookup for PriceTable {
    fn price_of(&self, item: ItemId) -> Option<u64> {
        self.prices.get(&item).copied()
    }
}
