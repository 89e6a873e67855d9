//! InventoryItem - Items carried by a character

use crate::types::ItemKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An item in a character's inventory
///
/// Items are never mutated after they are granted. `stat_bonus` is descriptive:
/// nothing applies it to combat stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Stat name -> delta
    #[serde(default)]
    pub stat_bonus: Option<BTreeMap<String, i32>>,
    #[serde(default)]
    pub description: String,
}

impl InventoryItem {
    /// Human readable list of bonuses, e.g. "+2 attack_power"
    pub fn bonus_summary(&self) -> String {
        match &self.stat_bonus {
            Some(bonus) if !bonus.is_empty() => bonus
                .iter()
                .map(|(stat, value)| format!("{:+} {}", value, stat))
                .collect::<Vec<_>>()
                .join(", "),
            _ => "No bonus".to_string(),
        }
    }
}
