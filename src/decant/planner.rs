//! Decant planner
//!
//! Turns the potions in an inventory snapshot into a take/give plan:
//! - Tallies doses per potion family and the containers freed by decanting
//! - Counts spare empty containers already in the inventory
//! - Regroups each family's doses into containers of the target size, with
//!   one extra container for any leftover doses
//! - Sources containers from freed ones first, then spares, then buys the rest
//! - Hands unused freed containers back to the player as notes

use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::decant::plan::Plan;
use crate::inventory::InventorySnapshot;
use crate::items::PriceLookup;
use crate::potions::{ClassifyError, Classifier, FamilyId};
use crate::types::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecantError {
    #[error("Target doses must be at least 1, got {0}")]
    InvalidTarget(i32),
    #[error("Item data error: {0}")]
    ItemData(#[from] ClassifyError),
}

/// Currency and pricing used when containers have to be bought
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingSettings {
    pub coins: ItemId,
    /// Unit price for containers without a known price
    pub fallback_container_price: u64,
    /// Added to every purchased container's unit price
    pub container_markup: u64,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            coins: ItemId(995),
            fallback_container_price: 5,
            container_markup: 2,
        }
    }
}

/// Empty containers available to the plan, keyed by container id
#[derive(Debug, Default)]
struct ContainerPool {
    /// Freed by decanting
    base: BTreeMap<ItemId, u64>,
    /// Already in the inventory
    extra: BTreeMap<ItemId, u64>,
}

/// Dose and container counts gathered from one snapshot
#[derive(Debug, Default)]
struct Tally {
    doses: BTreeMap<FamilyId, u64>,
    containers: ContainerPool,
}

pub struct DecantPlanner {
    classifier: Classifier,
    prices: Arc<dyn PriceLookup + Send + Sync>,
    pricing: PricingSettings,
}

impl DecantPlanner {
    pub fn new(
        classifier: Classifier,
        prices: Arc<dyn PriceLookup + Send + Sync>,
        pricing: PricingSettings,
    ) -> Self {
        Self {
            classifier,
            prices,
            pricing,
        }
    }

    /// Unit price charged for one new container
    pub fn container_price(&self, container: ItemId) -> u64 {
        self.prices
            .price_of(container)
            .unwrap_or(self.pricing.fallback_container_price)
            .saturating_add(self.pricing.container_markup)
    }

    /// Build the plan that decants every potion in `snapshot` into `target`-dose containers
    pub fn plan(&self, target: i32, snapshot: &InventorySnapshot) -> Result<Plan, DecantError> {
        if target <= 0 {
            return Err(DecantError::InvalidTarget(target));
        }
        let target = target as u32;

        let mut plan = Plan::new();
        let mut tally = self.tally(snapshot, &mut plan);

        for (family_id, doses) in &tally.doses {
            self.allocate(*family_id, *doses, target, &mut tally.containers, &mut plan)?;
        }

        for (container, remaining) in &tally.containers.base {
            if *remaining > 0 {
                debug!("Returning {} unused x {}", remaining, container);
                plan.add_give(self.classifier.noted_id_of(*container)?, *remaining);
            }
        }

        plan.net();
        Ok(plan)
    }

    fn tally(&self, snapshot: &InventorySnapshot, plan: &mut Plan) -> Tally {
        let catalog = self.classifier.catalog();
        let mut tally = Tally::default();

        let mut others = Vec::new();
        for stack in snapshot.stacks() {
            let def = match self.classifier.family_of(stack.item_id) {
                Ok(Some(def)) => def,
                Ok(None) => {
                    others.push(stack);
                    continue;
                }
                Err(e) => {
                    warn!("Skipping inventory item: {}", e);
                    continue;
                }
            };
            let family = catalog.family(def.family);
            let quantity = stack.quantity as u64;

            *tally.doses.entry(def.family).or_insert(0) += quantity * def.doses as u64;
            *tally.containers.base.entry(family.container).or_insert(0) += quantity;
            plan.add_take(stack.item_id, quantity);
        }

        // Spare containers only matter for families being decanted
        for stack in others {
            let unnoted = self.classifier.forms_of(stack.item_id).unnoted;
            if catalog.is_container(unnoted) && tally.containers.base.contains_key(&unnoted) {
                *tally.containers.extra.entry(unnoted).or_insert(0) += stack.quantity as u64;
            }
        }

        debug!(
            "Tally: {} families, base containers {:?}, spare containers {:?}",
            tally.doses.len(),
            tally.containers.base,
            tally.containers.extra
        );
        tally
    }

    fn allocate(
        &self,
        family_id: FamilyId,
        doses: u64,
        target: u32,
        containers: &mut ContainerPool,
        plan: &mut Plan,
    ) -> Result<(), DecantError> {
        if doses == 0 {
            return Ok(());
        }
        let family = self.classifier.catalog().family(family_id);

        let per_container = target.min(family.max_doses());
        let full = doses / per_container as u64;
        let leftover = (doses % per_container as u64) as u32;

        for (doses_each, count) in [(per_container, full), (leftover, u64::from(leftover > 0))] {
            if count == 0 {
                continue;
            }
            if let Some(item) = family.variant(doses_each) {
                plan.add_give(self.classifier.noted_id_of(item)?, count);
            }
        }

        let container = family.container;
        let mut required = full + u64::from(leftover > 0);

        let base = containers.base.entry(container).or_insert(0);
        let from_base = (*base).min(required);
        *base -= from_base;
        required -= from_base;

        let extra = containers.extra.entry(container).or_insert(0);
        let from_extra = (*extra).min(required);
        *extra -= from_extra;
        required -= from_extra;
        plan.add_take(container, from_extra);

        if required > 0 {
            let cost = required.saturating_mul(self.container_price(container));
            plan.add_take(self.pricing.coins, cost);
        }

        debug!(
            "{}: {} doses -> {} x {}-dose + leftover {}; containers base={} spare={} bought={}",
            family.name, doses, full, per_container, leftover, from_base, from_extra, required
        );
        Ok(())
    }
}
