use std::sync::Arc;
use thiserror::Error;

use crate::items::ItemDefinitions;
use crate::potions::catalog::{PotionCatalog, PotionDefinition};
use crate::types::ItemId;
use crate::utils::remove_color_tags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("Item {0} has no noted form")]
    NoNotedForm(ItemId),
    #[error("Noted item {0} has no unnoted form")]
    NoUnnotedForm(ItemId),
}

/// Both forms of an item, as searched by the inventory simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemForms {
    pub unnoted: ItemId,
    pub noted: Option<ItemId>,
}

/// Resolves item ids against the potion catalog and item definitions
#[derive(Clone)]
pub struct Classifier {
    catalog: Arc<PotionCatalog>,
    items: Arc<dyn ItemDefinitions + Send + Sync>,
}

impl Classifier {
    pub fn new(catalog: Arc<PotionCatalog>, items: Arc<dyn ItemDefinitions + Send + Sync>) -> Self {
        Self { catalog, items }
    }

    pub fn catalog(&self) -> &PotionCatalog {
        &self.catalog
    }

    /// Potion variant for any form of `item`; `None` if it is not a potion
    pub fn family_of(&self, item: ItemId) -> Result<Option<&PotionDefinition>, ClassifyError> {
        let unnoted = self.unnoted_id_of(item)?;
        Ok(self.catalog.definition(unnoted))
    }

    pub fn noted_id_of(&self, item: ItemId) -> Result<ItemId, ClassifyError> {
        if self.items.is_noted(item) {
            return Ok(item);
        }
        self.items
            .linked_note_id(item)
            .ok_or(ClassifyError::NoNotedForm(item))
    }

    pub fn unnoted_id_of(&self, item: ItemId) -> Result<ItemId, ClassifyError> {
        if !self.items.is_noted(item) {
            return Ok(item);
        }
        self.items
            .linked_note_id(item)
            .ok_or(ClassifyError::NoUnnotedForm(item))
    }

    /// Both forms of `item`; items without a noted form (coins) only have one
    pub fn forms_of(&self, item: ItemId) -> ItemForms {
        let unnoted = self.unnoted_id_of(item).unwrap_or(item);
        ItemForms {
            unnoted,
            noted: self.noted_id_of(unnoted).ok(),
        }
    }

    pub fn display_name(&self, item: ItemId) -> String {
        self.items
            .display_name(item)
            .map(|name| remove_color_tags(&name))
            .unwrap_or_else(|| format!("Item #{}", item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemDefinitionTable;

    fn classifier() -> Classifier {
        let items = ItemDefinitionTable::builtin().unwrap();
        Classifier::new(PotionCatalog::builtin(), Arc::new(items))
    }

    #[test]
    fn test_noted_and_unnoted_ids() {
        let classifier = classifier();
        assert_eq!(classifier.noted_id_of(ItemId(2428)), Ok(ItemId(2429)));
        assert_eq!(classifier.noted_id_of(ItemId(2429)), Ok(ItemId(2429)));
        assert_eq!(classifier.unnoted_id_of(ItemId(2429)), Ok(ItemId(2428)));
        assert_eq!(classifier.unnoted_id_of(ItemId(2428)), Ok(ItemId(2428)));
    }

    #[test]
    fn test_missing_noted_form_is_an_error() {
        let classifier = classifier();
        assert_eq!(
            classifier.noted_id_of(ItemId(995)),
            Err(ClassifyError::NoNotedForm(ItemId(995)))
        );
    }

    #[test]
    fn test_item_without_note() {
        let mut table = ItemDefinitionTable::new();
        table.insert_item(11, "Untradeable", None);
        let classifier = Classifier::new(PotionCatalog::builtin(), Arc::new(table));
        assert_eq!(classifier.unnoted_id_of(ItemId(11)), Ok(ItemId(11)));
        assert_eq!(
            classifier.noted_id_of(ItemId(11)),
            Err(ClassifyError::NoNotedForm(ItemId(11)))
        );
    }

    #[test]
    fn test_family_of_resolves_noted_potions() {
        let classifier = classifier();
        let def = classifier.family_of(ItemId(2429)).unwrap().unwrap();
        assert_eq!(def.item_id, ItemId(2428));
        assert_eq!(def.doses, 4);
        assert_eq!(classifier.family_of(ItemId(229)), Ok(None));
    }

    /// Item data where every id is a note with no link back
    struct OrphanNotes;

    impl ItemDefinitions for OrphanNotes {
        fn is_noted(&self, _item: ItemId) -> bool {
            true
        }

        fn linked_note_id(&self, _item: ItemId) -> Option<ItemId> {
            None
        }

        fn display_name(&self, _item: ItemId) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_family_of_reports_missing_unnoted_form() {
        let classifier = Classifier::new(PotionCatalog::builtin(), Arc::new(OrphanNotes));
        assert_eq!(
            classifier.family_of(ItemId(2429)),
            Err(ClassifyError::NoUnnotedForm(ItemId(2429)))
        );
    }

    #[test]
    fn test_forms_of() {
        let classifier = classifier();
        assert_eq!(
            classifier.forms_of(ItemId(230)),
            ItemForms {
                unnoted: ItemId(229),
                noted: Some(ItemId(230))
            }
        );
        assert_eq!(
            classifier.forms_of(ItemId(995)),
            ItemForms {
                unnoted: ItemId(995),
                noted: None
            }
        );
    }

    #[test]
    fn test_display_name_fallback() {
        let classifier = classifier();
        assert_eq!(classifier.display_name(ItemId(2429)), "Attack potion(4)");
        assert_eq!(classifier.display_name(ItemId(9_999_999)), "Item #9999999");

        let mut table = ItemDefinitionTable::new();
        table.insert_item(5, "<col=ff9040>Tagged</col>", None);
        let classifier = Classifier::new(PotionCatalog::builtin(), Arc::new(table));
        assert_eq!(classifier.display_name(ItemId(5)), "Tagged");
    }
}
