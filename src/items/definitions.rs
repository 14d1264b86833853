//! Item definition lookup
//!
//! Provides the item metadata the decanter relies on: whether an item id is
//! the noted form, which id is its linked counterpart, and its display name.
//! The default table is embedded from `data/items.toml`; a replacement table
//! can be loaded from disk.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::types::ItemId;

const BUILTIN_ITEM_DATA: &str = include_str!("../../data/items.toml");

/// Read-only item metadata capability
pub trait ItemDefinitions {
    /// True if `item` is the noted (banknote) form
    fn is_noted(&self, item: ItemId) -> bool;

    /// The counterpart id: noted form for an unnoted item, and vice versa
    fn linked_note_id(&self, item: ItemId) -> Option<ItemId>;

    fn display_name(&self, item: ItemId) -> Option<String>;
}

/// Metadata for a single item id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub noted: bool,
    pub linked_note_id: Option<ItemId>,
}

#[derive(Debug, Deserialize)]
struct ItemDataFile {
    #[serde(default)]
    items: Vec<ItemRecord>,
}

/// One physical item and, optionally, the id of its noted form
#[derive(Debug, Deserialize)]
struct ItemRecord {
    id: u32,
    name: String,
    #[serde(default)]
    noted_id: Option<u32>,
}

/// In-memory item definition table
#[derive(Debug, Clone, Default)]
pub struct ItemDefinitionTable {
    definitions: HashMap<ItemId, ItemDefinition>,
}

impl ItemDefinitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the table embedded in the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_ITEM_DATA).context("Failed to parse built-in item data")
    }

    /// Load a table from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read item data file {:?}", path))?;
        let table = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse item data file {:?}", path))?;
        info!("Loaded {} item definitions from {:?}", table.len(), path);
        Ok(table)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ItemDataFile = toml::from_str(contents)?;
        let mut table = Self::new();
        for record in file.items {
            table.insert_item(record.id, &record.name, record.noted_id);
        }
        debug!("Parsed {} item definitions", table.len());
        Ok(table)
    }

    /// Register an unnoted item and, if given, its noted counterpart
    pub fn insert_item(&mut self, id: u32, name: &str, noted_id: Option<u32>) {
        let id = ItemId(id);
        let noted_id = noted_id.map(ItemId);
        self.definitions.insert(
            id,
            ItemDefinition {
                id,
                name: name.to_string(),
                noted: false,
                linked_note_id: noted_id,
            },
        );
        if let Some(noted) = noted_id {
            self.definitions.insert(
                noted,
                ItemDefinition {
                    id: noted,
                    name: name.to_string(),
                    noted: true,
                    linked_note_id: Some(id),
                },
            );
        }
    }

    pub fn get(&self, item: ItemId) -> Option<&ItemDefinition> {
        self.definitions.get(&item)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ItemDefinitions for ItemDefinitionTable {
    fn is_noted(&self, item: ItemId) -> bool {
        self.get(item).map(|d| d.noted).unwrap_or(false)
    }

    fn linked_note_id(&self, item: ItemId) -> Option<ItemId> {
        self.get(item).and_then(|d| d.linked_note_id)
    }

    fn display_name(&self, item: ItemId) -> Option<String> {
        self.get(item).map(|d| d.name.clone())
    }
}
