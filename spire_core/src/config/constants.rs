//! Game constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable game constants
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub combat: CombatConstants,
    #[serde(default)]
    pub progression: ProgressionConstants,
    #[serde(default)]
    pub world: WorldConstants,
}

impl GameConstants {
    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.combat.min_damage == 0 {
            return Err(ConfigError::ValidationError(
                "combat.min_damage must be at least 1".to_string(),
            ));
        }
        // A growth factor below 1 can shrink the threshold to 0 and stall the level-up loop
        if !(self.progression.exp_growth >= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "progression.exp_growth must be >= 1.0, got {}",
                self.progression.exp_growth
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Floor applied to every hit
    #[serde(default = "default_min_damage")]
    pub min_damage: u32,
    /// Name of the only move enemies have
    #[serde(default = "default_enemy_move_name")]
    pub enemy_move_name: String,
    /// Flat damage added to the enemy's attack power
    #[serde(default = "default_enemy_move_bonus")]
    pub enemy_move_bonus: u32,
    /// Caller-side pause before the enemy acts
    #[serde(default = "default_delay_ms")]
    pub enemy_turn_delay_ms: u64,
    /// Experience awarded once per won encounter
    #[serde(default = "default_victory_experience")]
    pub victory_experience: u32,
}

impl CombatConstants {
    pub fn enemy_turn_delay(&self) -> Duration {
        Duration::from_millis(self.enemy_turn_delay_ms)
    }
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            min_damage: default_min_damage(),
            enemy_move_name: default_enemy_move_name(),
            enemy_move_bonus: default_enemy_move_bonus(),
            enemy_turn_delay_ms: default_delay_ms(),
            victory_experience: default_victory_experience(),
        }
    }
}

fn default_min_damage() -> u32 {
    1
}
fn default_enemy_move_name() -> String {
    "Steam Barrage".to_string()
}
fn default_enemy_move_bonus() -> u32 {
    10
}
fn default_delay_ms() -> u64 {
    1500
}
fn default_victory_experience() -> u32 {
    50
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConstants {
    /// Multiplier applied to the level threshold on each level-up (floored)
    #[serde(default = "default_exp_growth")]
    pub exp_growth: f64,
    #[serde(default = "default_stat_points_per_level")]
    pub stat_points_per_level: u32,
    #[serde(default = "default_max_hp_per_level")]
    pub max_hp_per_level: u32,
    #[serde(default = "default_attack_power_per_level")]
    pub attack_power_per_level: u32,
    #[serde(default = "default_max_hp_per_point")]
    pub max_hp_per_point: u32,
    #[serde(default = "default_one")]
    pub attack_power_per_point: u32,
    #[serde(default = "default_one")]
    pub defense_per_point: u32,
}

impl Default for ProgressionConstants {
    fn default() -> Self {
        ProgressionConstants {
            exp_growth: default_exp_growth(),
            stat_points_per_level: default_stat_points_per_level(),
            max_hp_per_level: default_max_hp_per_level(),
            attack_power_per_level: default_attack_power_per_level(),
            max_hp_per_point: default_max_hp_per_point(),
            attack_power_per_point: default_one(),
            defense_per_point: default_one(),
        }
    }
}

fn default_exp_growth() -> f64 {
    1.5
}
fn default_stat_points_per_level() -> u32 {
    3
}
fn default_max_hp_per_level() -> u32 {
    10
}
fn default_attack_power_per_level() -> u32 {
    2
}
fn default_max_hp_per_point() -> u32 {
    5
}
fn default_one() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConstants {
    /// Island every hero starts on, also the fallback enemy roster
    #[serde(default = "default_home_island")]
    pub home_island: String,
    /// Caller-side travel time between islands
    #[serde(default = "default_delay_ms")]
    pub travel_delay_ms: u64,
}

impl WorldConstants {
    pub fn travel_delay(&self) -> Duration {
        Duration::from_millis(self.travel_delay_ms)
    }
}

impl Default for WorldConstants {
    fn default() -> Self {
        WorldConstants {
            home_island: default_home_island(),
            travel_delay_ms: default_delay_ms(),
        }
    }
}

fn default_home_island() -> String {
    "Aetherium Spire - Home".to_string()
}

/// Get default constants from the embedded config
pub fn default_constants() -> GameConstants {
    let toml = include_str!("../../config/constants.toml");
    super::parse_toml(toml).unwrap_or_default()
}
