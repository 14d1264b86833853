pub mod executor;
pub mod plan;
pub mod planner;
pub mod report;

pub use executor::PlanExecutor;
pub use plan::Plan;
pub use planner::{DecantError, DecantPlanner, PricingSettings};
pub use report::DecantReport;

use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Config;
use crate::inventory::InventorySnapshot;
use crate::items::PriceLookup;
use crate::potions::Classifier;
use crate::types::ItemId;

/// Plans a decant and checks it against the inventory in one call
pub struct Decanter {
    classifier: Classifier,
    planner: DecantPlanner,
    executor: PlanExecutor,
}

impl Decanter {
    pub fn new(
        classifier: Classifier,
        prices: Arc<dyn PriceLookup + Send + Sync>,
        pricing: PricingSettings,
    ) -> Self {
        Self {
            planner: DecantPlanner::new(classifier.clone(), prices, pricing),
            executor: PlanExecutor::new(classifier.clone()),
            classifier,
        }
    }

    pub fn from_config(
        config: &Config,
        classifier: Classifier,
        prices: Arc<dyn PriceLookup + Send + Sync>,
    ) -> Self {
        let pricing = PricingSettings {
            coins: ItemId(config.coins_item_id),
            fallback_container_price: config.fallback_container_price,
            container_markup: config.container_markup,
        };
        Self::new(classifier, prices, pricing)
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn planner(&self) -> &DecantPlanner {
        &self.planner
    }

    pub fn executor(&self) -> &PlanExecutor {
        &self.executor
    }

    /// Plan a decant into `target`-dose potions and validate it against `snapshot`.
    ///
    /// The snapshot is only read; committing a successful plan is up to the caller.
    pub fn decant(&self, target: i32, snapshot: &InventorySnapshot) -> Result<DecantReport, DecantError> {
        let plan = self.planner.plan(target, snapshot)?;
        debug!(
            plan = %serde_json::to_string(&plan).unwrap_or_default(),
            "Planned decant"
        );

        let outcome = self.executor.evaluate(&plan, snapshot);
        info!("Decant into {}-doses finished: {:?}", target, outcome);

        Ok(DecantReport::new(target, plan, outcome, &self.classifier))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Small potion catalog shared by the decant tests

    use std::sync::Arc;

    use crate::inventory::{InventorySnapshot, DEFAULT_MAX_STACK};
    use crate::items::{ItemDefinitionTable, PriceLookup};
    use crate::potions::{Classifier, PotionCatalog, PotionFamily};
    use crate::types::{InventorySlot, ItemStack};

    pub use crate::items::PriceTable;
    pub use crate::types::ItemId;

    pub const TONIC: [ItemId; 4] = [ItemId(1), ItemId(2), ItemId(3), ItemId(4)];
    pub const BREW: [ItemId; 3] = [ItemId(11), ItemId(12), ItemId(13)];
    pub const TEA: [ItemId; 2] = [ItemId(21), ItemId(22)];
    pub const VIAL: ItemId = ItemId(100);
    pub const CUP: ItemId = ItemId(200);
    pub const COINS: ItemId = ItemId(995);
    pub const DEFAULT_MAX: u32 = DEFAULT_MAX_STACK;

    /// Noted ids are offset by 1000
    pub fn noted(item: ItemId) -> ItemId {
        ItemId(item.0 + 1000)
    }

    pub fn classifier() -> Classifier {
        let catalog = PotionCatalog::new(vec![
            PotionFamily::new("Tonic", TONIC, VIAL),
            PotionFamily::new("Brew", BREW, VIAL),
            PotionFamily::new("Tea", TEA, CUP),
        ])
        .unwrap();

        let mut items = ItemDefinitionTable::new();
        items.insert_item(COINS.0, "Coins", None);
        items.insert_item(VIAL.0, "Vial", Some(noted(VIAL).0));
        items.insert_item(CUP.0, "Cup", Some(noted(CUP).0));
        for (name, doses) in [("Tonic", &TONIC[..]), ("Brew", &BREW[..]), ("Tea", &TEA[..])] {
            for (index, item) in doses.iter().enumerate() {
                let label = format!("{}({})", name, index + 1);
                items.insert_item(item.0, &label, Some(noted(*item).0));
            }
        }

        Classifier::new(Arc::new(catalog), Arc::new(items))
    }

    pub fn prices() -> Arc<dyn PriceLookup + Send + Sync> {
        Arc::new(PriceTable::new())
    }

    pub fn inventory(stacks: &[(ItemId, u32)]) -> InventorySnapshot {
        inventory_with(stacks, 28, DEFAULT_MAX)
    }

    pub fn inventory_with(stacks: &[(ItemId, u32)], capacity: usize, max_stack: u32) -> InventorySnapshot {
        let mut slots: Vec<InventorySlot> = stacks
            .iter()
            .map(|(item, quantity)| Some(ItemStack::new(*item, *quantity)))
            .collect();
        slots.resize(capacity, None);
        InventorySnapshot::new(slots, max_stack)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::items::ItemDefinitionTable;
    use crate::potions::{PotionCatalog, PotionFamily};
    use crate::types::PlanOutcome;

    fn decanter() -> Decanter {
        Decanter::new(classifier(), prices(), PricingSettings::default())
    }

    #[test]
    fn test_end_to_end_four_dose_into_three() {
        let inv = inventory(&[(TONIC[3], 5), (COINS, 100)]);
        let report = decanter().decant(3, &inv).unwrap();

        assert_eq!(report.outcome, PlanOutcome::Success);
        assert_eq!(report.plan.taken(TONIC[3]), 5);
        assert_eq!(report.plan.taken(COINS), 2 * (5 + 2));
        assert_eq!(report.plan.given(noted(TONIC[2])), 6);
        assert_eq!(report.plan.given(noted(TONIC[1])), 1);
        assert_eq!(report.plan.given(noted(VIAL)), 0);
        assert_eq!(
            report.lines,
            vec![
                "----- Decanting potions into 3-doses -----",
                "Take 5 x Tonic(4)",
                "Take 14 x Coins",
                "Give 1 x Tonic(2)",
                "Give 6 x Tonic(3)",
                "Potion decant completed successfully",
            ]
        );
    }

    #[test]
    fn test_missing_coins() {
        let inv = inventory(&[(TONIC[3], 5), (COINS, 13)]);
        let report = decanter().decant(3, &inv).unwrap();
        assert_eq!(report.outcome, PlanOutcome::MissingItems);
    }

    #[test]
    fn test_already_decanted_is_a_no_op() {
        let inv = inventory(&[(noted(TONIC[2]), 5)]);
        let report = decanter().decant(3, &inv).unwrap();

        assert!(report.plan.is_empty());
        assert_eq!(report.outcome, PlanOutcome::Success);
    }

    #[test]
    fn test_sourcing_prefers_spares_over_buying() {
        let inv = inventory(&[(TONIC[3], 2), (VIAL, 3)]);
        let report = decanter().decant(2, &inv).unwrap();

        assert_eq!(report.outcome, PlanOutcome::Success);
        assert_eq!(report.plan.taken(VIAL), 2);
        assert_eq!(report.plan.taken(COINS), 0);
    }

    #[test]
    fn test_overflow_is_reported() {
        // Three returned vials on top of 9 noted ones exceed a 10-item stack
        let inv = inventory_with(&[(noted(VIAL), 9), (TONIC[0], 4)], 28, 10);
        let report = decanter().decant(4, &inv).unwrap();

        assert_eq!(report.plan.given(noted(VIAL)), 3);
        assert_eq!(report.outcome, PlanOutcome::QuantityOverflow);
        assert_eq!(inv.quantity_of(noted(VIAL)), 9);
        assert_eq!(inv.quantity_of(TONIC[0]), 4);
    }

    #[test]
    fn test_inventory_full_is_reported() {
        // One freed slot, two different potion notes to give
        let inv = inventory_with(&[(COINS, 100), (ItemId(500), 1), (TONIC[3], 1)], 3, DEFAULT_MAX);
        let report = decanter().decant(3, &inv).unwrap();

        assert_eq!(report.outcome, PlanOutcome::InventoryFull);
        assert_eq!(report.lines.len(), 2);
    }

    #[test]
    fn test_invalid_target() {
        let inv = inventory(&[(TONIC[3], 5)]);
        assert_eq!(decanter().decant(0, &inv).unwrap_err(), DecantError::InvalidTarget(0));
    }

    #[test]
    fn test_missing_note_is_an_item_data_error() {
        let mut items = ItemDefinitionTable::new();
        items.insert_item(TONIC[3].0, "Tonic(4)", None);
        items.insert_item(TONIC[2].0, "Tonic(3)", None);
        let catalog = PotionCatalog::new(vec![PotionFamily::new("Tonic", TONIC, VIAL)]).unwrap();
        let classifier = Classifier::new(Arc::new(catalog), Arc::new(items));
        let decanter = Decanter::new(classifier, prices(), PricingSettings::default());

        let result = decanter.decant(3, &inventory(&[(TONIC[3], 3)]));
        assert!(matches!(result, Err(DecantError::ItemData(_))));
    }

    #[test]
    fn test_from_config_pricing() {
        let mut config = Config::default();
        config.fallback_container_price = 10;
        config.container_markup = 0;
        let decanter = Decanter::from_config(&config, classifier(), prices());
        assert_eq!(decanter.planner().container_price(VIAL), 10);
    }
}
