use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::inventory::DEFAULT_MAX_STACK;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_inventory_capacity")]
    pub inventory_capacity: usize,

    #[serde(default = "default_max_stack")]
    pub max_stack: u32,

    #[serde(default = "default_coins_item_id")]
    pub coins_item_id: u32,

    #[serde(default = "default_fallback_container_price")]
    pub fallback_container_price: u64,

    #[serde(default = "default_container_markup")]
    pub container_markup: u64,

    #[serde(default)]
    pub item_data_path: Option<PathBuf>,

    #[serde(default = "default_container_prices")]
    pub container_prices: Vec<ContainerPrice>,

    #[serde(default)]
    pub starting_inventory: Vec<StartingSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerPrice {
    pub item_id: u32,
    pub price: u64,
}

/// A stack placed in the in-memory inventory at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingSlot {
    pub slot: usize,
    pub item_id: u32,
    pub quantity: u32,
}

// Default values
fn default_inventory_capacity() -> usize {
    28
}

fn default_max_stack() -> u32 {
    DEFAULT_MAX_STACK
}

fn default_coins_item_id() -> u32 {
    995
}

fn default_fallback_container_price() -> u64 {
    5
}

fn default_container_markup() -> u64 {
    2
}

fn default_container_prices() -> Vec<ContainerPrice> {
    vec![
        // Vial
        ContainerPrice { item_id: 229, price: 2 },
        // Empty cup
        ContainerPrice { item_id: 1980, price: 35 },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_capacity: default_inventory_capacity(),
            max_stack: default_max_stack(),
            coins_item_id: default_coins_item_id(),
            fallback_container_price: default_fallback_container_price(),
            container_markup: default_container_markup(),
            item_data_path: None,
            container_prices: default_container_prices(),
            starting_inventory: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.inventory_capacity, 28);
        assert_eq!(config.max_stack, 2_147_483_647);
        assert_eq!(config.coins_item_id, 995);
        assert_eq!(config.fallback_container_price, 5);
        assert_eq!(config.container_markup, 2);
        assert_eq!(config.container_prices.len(), 2);
        assert!(config.starting_inventory.is_empty());
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str(
            r#"
            inventory_capacity = 10
            container_markup = 0

            [[starting_inventory]]
            slot = 3
            item_id = 2428
            quantity = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.inventory_capacity, 10);
        assert_eq!(config.container_markup, 0);
        assert_eq!(
            config.starting_inventory,
            vec![StartingSlot {
                slot: 3,
                item_id: 2428,
                quantity: 5
            }]
        );
    }
}
