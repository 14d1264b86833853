//! Potion catalog
//!
//! Static table of potion families. Each family lists its dose variants in
//! ascending order (index 0 holds one dose) and the empty container left
//! behind once a potion is drunk or decanted.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;

use crate::types::ItemId;

pub const VIAL: ItemId = ItemId(229);
pub const EMPTY_CUP: ItemId = ItemId(1980);

/// (family name, dose variant ids, container id)
const BUILTIN_FAMILIES: &[(&str, &[u32], ItemId)] = &[
    ("Attack potion", &[125, 123, 121, 2428], VIAL),
    ("Strength potion", &[119, 117, 115, 113], VIAL),
    ("Defence potion", &[137, 135, 133, 2432], VIAL),
    ("Restore potion", &[131, 129, 127, 2430], VIAL),
    ("Prayer potion", &[143, 141, 139, 2434], VIAL),
    ("Super attack", &[149, 147, 145, 2436], VIAL),
    ("Super strength", &[161, 159, 157, 2440], VIAL),
    ("Super defence", &[167, 165, 163, 2442], VIAL),
    ("Ranging potion", &[173, 171, 169, 2444], VIAL),
    ("Antipoison", &[179, 177, 175, 2446], VIAL),
    ("Energy potion", &[3014, 3012, 3010, 3008], VIAL),
    ("Super restore", &[3030, 3028, 3026, 3024], VIAL),
    ("Magic potion", &[3046, 3044, 3042, 3040], VIAL),
    ("Saradomin brew", &[6691, 6689, 6687, 6685], VIAL),
    ("Guthix rest", &[4423, 4421, 4419, 4417], EMPTY_CUP),
    ("Stamina potion", &[12631, 12629, 12627, 12625], VIAL),
];

static BUILTIN_CATALOG: Lazy<Arc<PotionCatalog>> = Lazy::new(|| {
    let families = BUILTIN_FAMILIES
        .iter()
        .map(|(name, doses, container)| {
            PotionFamily::new(*name, doses.iter().copied().map(ItemId), *container)
        })
        .collect();
    Arc::new(PotionCatalog::new(families).expect("built-in potion catalog is consistent"))
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Potion family '{0}' has no dose variants")]
    NoVariants(String),
    #[error("Item {item} is listed by both '{first}' and '{second}'")]
    DuplicateItem {
        item: ItemId,
        first: String,
        second: String,
    },
    #[error("Potion family '{0}' is defined twice")]
    DuplicateFamily(String),
}

/// Index of a family inside its catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FamilyId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotionFamily {
    pub name: String,
    /// Dose variants, index 0 = 1 dose
    pub dose_items: Vec<ItemId>,
    pub container: ItemId,
}

impl PotionFamily {
    pub fn new(
        name: impl Into<String>,
        dose_items: impl IntoIterator<Item = ItemId>,
        container: ItemId,
    ) -> Self {
        Self {
            name: name.into(),
            dose_items: dose_items.into_iter().collect(),
            container,
        }
    }

    /// Highest dose count a single container of this family can hold
    pub fn max_doses(&self) -> u32 {
        self.dose_items.len() as u32
    }

    /// Item id of the variant holding `doses` doses (1-indexed)
    pub fn variant(&self, doses: u32) -> Option<ItemId> {
        let index = (doses as usize).checked_sub(1)?;
        self.dose_items.get(index).copied()
    }
}

/// A single dose variant of a family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotionDefinition {
    pub family: FamilyId,
    pub doses: u32,
    pub item_id: ItemId,
}

/// Immutable catalog with lookups in both directions
#[derive(Debug)]
pub struct PotionCatalog {
    families: Vec<PotionFamily>,
    by_item: HashMap<ItemId, PotionDefinition>,
    containers: HashSet<ItemId>,
}

impl PotionCatalog {
    pub fn new(families: Vec<PotionFamily>) -> Result<Self, CatalogError> {
        let mut by_item: HashMap<ItemId, PotionDefinition> = HashMap::new();
        let mut containers = HashSet::new();
        let mut names: HashMap<&str, FamilyId> = HashMap::new();

        for (index, family) in families.iter().enumerate() {
            let id = FamilyId(index);
            if family.dose_items.is_empty() {
                return Err(CatalogError::NoVariants(family.name.clone()));
            }
            if names.insert(family.name.as_str(), id).is_some() {
                return Err(CatalogError::DuplicateFamily(family.name.clone()));
            }

            for (dose_index, item_id) in family.dose_items.iter().enumerate() {
                let definition = PotionDefinition {
                    family: id,
                    doses: dose_index as u32 + 1,
                    item_id: *item_id,
                };
                if let Some(existing) = by_item.insert(*item_id, definition) {
                    return Err(CatalogError::DuplicateItem {
                        item: *item_id,
                        first: families[existing.family.0].name.clone(),
                        second: family.name.clone(),
                    });
                }
            }

            containers.insert(family.container);
        }

        Ok(Self {
            families,
            by_item,
            containers,
        })
    }

    /// Shared catalog of the standard potions
    pub fn builtin() -> Arc<PotionCatalog> {
        Arc::clone(&BUILTIN_CATALOG)
    }

    pub fn families(&self) -> &[PotionFamily] {
        &self.families
    }

    pub fn family(&self, id: FamilyId) -> &PotionFamily {
        &self.families[id.0]
    }

    /// Look up the dose variant an unnoted item id belongs to
    pub fn definition(&self, item: ItemId) -> Option<&PotionDefinition> {
        self.by_item.get(&item)
    }

    /// True if `item` is the empty container of at least one family
    pub fn is_container(&self, item: ItemId) -> bool {
        self.containers.contains(&item)
    }
}
