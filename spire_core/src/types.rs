//! Core enums shared by the combat engine and progression model

use serde::{Deserialize, Serialize};
use std::fmt;

/// One side of an encounter. Used both for whose turn it is and for the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The side that acts after this one
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Enemy => "Enemy",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle of a single encounter. `Victory` and `Defeat` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatStatus {
    #[default]
    Active,
    Victory,
    Defeat,
}

impl CombatStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, CombatStatus::Active)
    }

    /// Whether the encounter has been decided
    pub fn is_over(&self) -> bool {
        !self.is_active()
    }
}

/// Flavor tag on a combat action. Does not change the damage formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Physical,
    Aetherial,
}

/// Inventory item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Weapon,
    Armor,
    Consumable,
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "Weapon",
            ItemKind::Armor => "Armor",
            ItemKind::Consumable => "Consumable",
        }
    }
}

/// Stats that can receive stat points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    AttackPower,
    Defense,
    MaxHp,
}

impl StatKind {
    /// All allocatable stats, in character-sheet order
    pub fn all() -> &'static [StatKind] {
        &[StatKind::AttackPower, StatKind::Defense, StatKind::MaxHp]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatKind::AttackPower => "Attack Power",
            StatKind::Defense => "Defense",
            StatKind::MaxHp => "Max HP",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.opponent(), Side::Player);
    }

    #[test]
    fn test_status_terminal() {
        assert!(!CombatStatus::Active.is_over());
        assert!(CombatStatus::Victory.is_over());
        assert!(CombatStatus::Defeat.is_over());
    }

    #[test]
    fn test_stat_kind_parses_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            stat: StatKind,
        }
        let parsed: Wrapper = toml::from_str("stat = \"max_hp\"").unwrap();
        assert_eq!(parsed.stat, StatKind::MaxHp);
    }
}
