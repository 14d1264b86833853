use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::ItemId;

/// Take/give deltas that, applied together, perform one decant
///
/// Quantities accumulate as saturating `u64`; they are only narrowed to slot
/// quantities when the plan is executed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Plan {
    take: BTreeMap<ItemId, u64>,
    give: BTreeMap<ItemId, u64>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_take(&mut self, item: ItemId, quantity: u64) {
        Self::add(&mut self.take, item, quantity);
    }

    pub fn add_give(&mut self, item: ItemId, quantity: u64) {
        Self::add(&mut self.give, item, quantity);
    }

    fn add(map: &mut BTreeMap<ItemId, u64>, item: ItemId, quantity: u64) {
        if quantity == 0 {
            return;
        }
        let entry = map.entry(item).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    pub fn take(&self) -> &BTreeMap<ItemId, u64> {
        &self.take
    }

    pub fn give(&self) -> &BTreeMap<ItemId, u64> {
        &self.give
    }

    pub fn taken(&self, item: ItemId) -> u64 {
        self.take.get(&item).copied().unwrap_or(0)
    }

    pub fn given(&self, item: ItemId) -> u64 {
        self.give.get(&item).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.take.is_empty() && self.give.is_empty()
    }

    /// Cancel out quantities that are both taken and given under the same id
    pub fn net(&mut self) {
        for (item, given) in self.give.iter_mut() {
            let Some(taken) = self.take.get_mut(item) else {
                continue;
            };
            let common = (*taken).min(*given);
            *taken -= common;
            *given -= common;
        }
        self.take.retain(|_, quantity| *quantity > 0);
        self.give.retain(|_, quantity| *quantity > 0);
    }
}
