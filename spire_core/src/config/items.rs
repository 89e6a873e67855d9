//! Starting inventory loading

use crate::character::InventoryItem;
use super::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemsConfig {
    items: Vec<InventoryItem>,
}

/// Load items from a TOML string
pub fn parse_items(content: &str) -> Result<Vec<InventoryItem>, ConfigError> {
    let config: ItemsConfig = super::parse_toml(content)?;
    Ok(config.items)
}

/// Items granted to every hero when the adventure starts
pub fn default_starting_items() -> Vec<InventoryItem> {
    let toml = include_str!("../../config/items.toml");
    parse_items(toml).unwrap_or_default()
}
