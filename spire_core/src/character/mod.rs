//! Character - A combat participant (player or enemy)

mod inventory;
mod template;

pub use inventory::InventoryItem;
pub use template::CharacterTemplate;

use serde::{Deserialize, Serialize};

/// Flavor attributes. Not consumed by any damage formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: u32,
    pub agility: u32,
    pub magic: u32,
}

impl Attributes {
    pub fn new(strength: u32, agility: u32, magic: u32) -> Self {
        Attributes {
            strength,
            agility,
            magic,
        }
    }
}

/// A player or enemy taking part in combat
///
/// `current_hp` is kept within `0..=max_hp` by every operation in this crate,
/// except stat allocation which raises both values together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    // === Identity (presentation only) ===
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,

    // === Combat stats ===
    pub max_hp: u32,
    pub current_hp: u32,
    pub attack_power: u32,
    pub defense: u32,
    #[serde(default)]
    pub stats: Option<Attributes>,

    // === Progression ===
    pub level: u32,
    pub experience: u32,
    pub exp_to_next_level: u32,
    #[serde(default)]
    pub stat_points: u32,

    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    pub is_player: bool,
}

impl Character {
    /// Create a level 1 character at full health with no progression
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_hp: u32) -> Self {
        Character {
            id: id.into(),
            name: name.into(),
            role: None,
            description: None,
            image: None,
            max_hp,
            current_hp: max_hp,
            attack_power: 0,
            defense: 0,
            stats: None,
            level: 1,
            experience: 0,
            exp_to_next_level: 0,
            stat_points: 0,
            inventory: Vec::new(),
            is_player: false,
        }
    }

    /// The "Hero" player used by the default combat template
    pub fn default_hero() -> Self {
        Character {
            role: Some("Adventurer".to_string()),
            description: Some("A brave soul.".to_string()),
            image: Some("/mechanic.png".to_string()),
            attack_power: 10,
            defense: 5,
            stats: Some(Attributes::new(5, 5, 5)),
            exp_to_next_level: 100,
            is_player: true,
            ..Character::new("hero", "Hero", 100)
        }
    }

    /// The "Clockwork Sentinel" enemy used by the default combat template
    pub fn default_enemy() -> Self {
        Character {
            role: Some("Guardian".to_string()),
            description: Some("A mechanical guardian.".to_string()),
            image: Some("/enemy-sentinel.png".to_string()),
            attack_power: 12,
            defense: 8,
            stats: Some(Attributes::new(8, 2, 0)),
            ..Character::new("enemy", "Clockwork Sentinel", 120)
        }
    }

    pub fn with_attack_power(mut self, attack_power: u32) -> Self {
        self.attack_power = attack_power;
        self
    }

    pub fn with_defense(mut self, defense: u32) -> Self {
        self.defense = defense;
        self
    }

    pub fn with_inventory(mut self, inventory: Vec<InventoryItem>) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Restore current HP to max
    pub fn heal_full(&mut self) {
        self.current_hp = self.max_hp;
    }

    /// Apply damage, clamping HP at 0. Returns the HP actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = self.current_hp.saturating_sub(amount);
        before - self.current_hp
    }

    /// Current HP as a percentage of max HP
    pub fn hp_percent(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        (self.current_hp as f64 / self.max_hp as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// Experience progress toward the next level as a percentage
    pub fn exp_percent(&self) -> f64 {
        if self.exp_to_next_level == 0 {
            return 0.0;
        }
        (self.experience as f64 / self.exp_to_next_level as f64 * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_damage_clamps_at_zero() {
        let mut enemy = Character::default_enemy();
        let removed = enemy.take_damage(500);

        assert_eq!(removed, 120);
        assert_eq!(enemy.current_hp, 0);
        assert!(!enemy.is_alive());
    }

    #[test]
    fn test_default_template_values() {
        let hero = Character::default_hero();
        assert!(hero.is_player);
        assert_eq!(hero.max_hp, 100);
        assert_eq!(hero.current_hp, 100);
        assert_eq!(hero.attack_power, 10);
        assert_eq!(hero.defense, 5);
        assert_eq!(hero.exp_to_next_level, 100);

        let enemy = Character::default_enemy();
        assert!(!enemy.is_player);
        assert_eq!(enemy.max_hp, 120);
        assert_eq!(enemy.defense, 8);
        assert_eq!(enemy.attack_power, 12);
        assert_eq!(enemy.exp_to_next_level, 0);
    }

    #[test]
    fn test_hp_percent() {
        let mut hero = Character::default_hero();
        hero.current_hp = 25;
        assert!((hero.hp_percent() - 25.0).abs() < f64::EPSILON);

        let empty = Character::new("x", "X", 0);
        assert!((empty.hp_percent() - 0.0).abs() < f64::EPSILON);
    }
}
