use tracing::{error, info, info_span, warn};
use uuid::Uuid;

use crate::commands::parser::{parse_command, parse_target_doses, Command};
use crate::decant::Decanter;
use crate::inventory::{InventorySource, SharedInventory};

/// Dispatches console commands against the shared inventory
pub struct CommandHandler {
    decanter: Decanter,
    inventory: SharedInventory,
}

impl CommandHandler {
    pub fn new(decanter: Decanter, inventory: SharedInventory) -> Self {
        Self {
            decanter,
            inventory,
        }
    }

    pub fn inventory(&self) -> &SharedInventory {
        &self.inventory
    }

    /// Handle one console line and return the messages to show the player
    pub fn handle(&self, input: &str) -> Vec<String> {
        let Some(Command { name, args }) = parse_command(input) else {
            return vec!["Commands start with '::', type ::help for a list".to_string()];
        };

        match name.as_str() {
            "decant" => self.handle_decant(&args),
            "inventory" | "inv" => self.describe_inventory(),
            "help" => help_lines(),
            other => vec![format!("Unknown command: {}", other)],
        }
    }

    fn handle_decant(&self, args: &[String]) -> Vec<String> {
        let target = match parse_target_doses(args) {
            Ok(target) => target,
            Err(e) => {
                warn!("Rejected decant command {:?}: {:?}", args, e);
                return vec![e.to_string()];
            }
        };

        let request_id = Uuid::new_v4();
        let span = info_span!("decant", %request_id, doses = target);
        let _guard = span.enter();

        let snapshot = self.inventory.snapshot();
        let report = match self.decanter.decant(target, &snapshot) {
            Ok(report) => report,
            Err(e) => {
                error!("Decant failed: {}", e);
                return vec![format!("Cannot decant potions: {}", e)];
            }
        };

        if report.outcome.is_success() && !report.plan.is_empty() {
            if let Err(e) = self.inventory.apply(&report.plan, self.decanter.executor()) {
                error!("Inventory changed before the decant could be applied: {}", e);
                return vec![e.outcome().message().to_string()];
            }
            info!("Decant committed");
        }

        report.lines
    }

    fn describe_inventory(&self) -> Vec<String> {
        let classifier = self.decanter.classifier();
        let slots = self.inventory.inventory_slots();
        let mut lines: Vec<String> = slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.map(|stack| {
                    format!(
                        "Slot {}: {} x {}",
                        index,
                        stack.quantity,
                        classifier.display_name(stack.item_id)
                    )
                })
            })
            .collect();

        let free = slots.iter().filter(|slot| slot.is_none()).count();
        lines.push(format!("{} of {} slots free", free, slots.len()));
        lines
    }
}

fn help_lines() -> Vec<String> {
    vec![
        "::decant <doses> - Decant all potions into <doses>-dose potions".to_string(),
        "::inventory - Show the inventory".to_string(),
        "::help - Show this list".to_string(),
    ]
}
