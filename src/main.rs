use anyhow::{Context, Result};
use potion_decanter::{
    commands::CommandHandler,
    config::ConfigLoader,
    decant::Decanter,
    items::{ItemDefinitionTable, PriceTable},
    logging::{init_logger, print_chat},
    potions::{Classifier, PotionCatalog},
    inventory::SharedInventory,
};
use std::sync::Arc;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logger()?;
    info!("Starting Potion Decanter v{}", VERSION);

    // Load or create configuration
    let config_loader = ConfigLoader::new();
    let config = config_loader.load()?;

    let items = match &config.item_data_path {
        Some(path) => ItemDefinitionTable::load(&config_loader.resolve(path))?,
        None => ItemDefinitionTable::builtin()?,
    };
    let catalog = PotionCatalog::builtin();
    info!(
        "Loaded {} potion families and {} item definitions",
        catalog.families().len(),
        items.len()
    );

    let classifier = Classifier::new(catalog, Arc::new(items));
    let prices = Arc::new(PriceTable::from_config(&config.container_prices));
    let decanter = Decanter::from_config(&config, classifier, prices);

    let inventory = SharedInventory::seeded(
        config.inventory_capacity,
        config.max_stack,
        &config.starting_inventory,
    )
    .context("Invalid starting inventory in config")?;
    info!(
        "Inventory: {} slots, {} seeded stacks",
        config.inventory_capacity,
        config.starting_inventory.len()
    );

    let handler = CommandHandler::new(decanter, inventory);

    info!("Console interface ready - type commands and press Enter:");
    for line in handler.handle("::help") {
        info!("  {}", line);
    }

    // Commands are handled one at a time, in the order they are typed
    let reader = BufReader::new(stdin());
    let mut lines = reader.lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                debug!("Console input: {}", input);
                for message in handler.handle(input) {
                    print_chat(&message);
                }
            }
            Ok(None) => {
                info!("Console closed, shutting down");
                break;
            }
            Err(e) => {
                warn!("Failed to read console input: {}", e);
                break;
            }
        }
    }

    Ok(())
}
