//! CharacterTemplate - Config-side description of a hero or enemy

use super::{Attributes, Character};
use serde::{Deserialize, Serialize};

/// Character definition as written in config files
///
/// Templates omit runtime state (current HP, experience, stat points, inventory);
/// [`CharacterTemplate::instantiate`] produces a full-health [`Character`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub stats: Option<Attributes>,
    pub max_hp: u32,
    pub attack_power: u32,
    pub defense: u32,
    #[serde(default = "default_level")]
    pub level: u32,
    /// 0 for characters that never level (enemies)
    #[serde(default)]
    pub exp_to_next_level: u32,
}

fn default_level() -> u32 {
    1
}

impl CharacterTemplate {
    /// Build a fresh character at full health
    pub fn instantiate(&self, is_player: bool) -> Character {
        Character {
            id: self.id.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            max_hp: self.max_hp,
            current_hp: self.max_hp,
            attack_power: self.attack_power,
            defense: self.defense,
            stats: self.stats,
            level: self.level,
            experience: 0,
            exp_to_next_level: self.exp_to_next_level,
            stat_points: 0,
            inventory: Vec::new(),
            is_player,
        }
    }
}
