//! Configuration loading from TOML files

mod actions;
mod constants;
mod heroes;
mod islands;
mod items;

pub use actions::{default_actions, parse_action_catalog};
pub use constants::{
    default_constants, CombatConstants, GameConstants, ProgressionConstants, WorldConstants,
};
pub use heroes::{default_heroes, parse_heroes};
pub use islands::{default_islands, parse_islands};
pub use items::{default_starting_items, parse_items};

use crate::action::Action;
use crate::character::{CharacterTemplate, InventoryItem};
use crate::world::World;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Everything a session needs: tunables, action bar, heroes, map and starting kit
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub constants: GameConstants,
    pub actions: Vec<Action>,
    pub heroes: Vec<CharacterTemplate>,
    pub world: World,
    pub starting_items: Vec<InventoryItem>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let constants = default_constants();
        let world = World::new(default_islands(), constants.world.home_island.clone());
        GameConfig {
            constants,
            actions: default_actions(),
            heroes: default_heroes(),
            world,
            starting_items: default_starting_items(),
        }
    }
}

impl GameConfig {
    /// Load a config directory. Files that are absent fall back to the embedded defaults.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let defaults = GameConfig::default();

        let constants = match read_optional(&dir.join("constants.toml"))? {
            Some(content) => parse_toml::<GameConstants>(&content)?,
            None => defaults.constants,
        };
        constants.validate()?;

        let actions = match read_optional(&dir.join("actions.toml"))? {
            Some(content) => parse_action_catalog(&content)?,
            None => defaults.actions,
        };
        if actions.is_empty() {
            return Err(ConfigError::ValidationError(
                "action catalog is empty".to_string(),
            ));
        }

        let heroes = match read_optional(&dir.join("heroes.toml"))? {
            Some(content) => parse_heroes(&content)?,
            None => defaults.heroes,
        };

        let islands = match read_optional(&dir.join("islands.toml"))? {
            Some(content) => parse_islands(&content)?,
            None => defaults.world.islands().to_vec(),
        };
        let world = World::new(islands, constants.world.home_island.clone());
        if world.island(world.home_island()).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "home island '{}' is not defined",
                world.home_island()
            )));
        }

        let starting_items = match read_optional(&dir.join("items.toml"))? {
            Some(content) => parse_items(&content)?,
            None => defaults.starting_items,
        };

        tracing::info!(
            dir = %dir.display(),
            actions = actions.len(),
            heroes = heroes.len(),
            islands = world.islands().len(),
            "loaded game config"
        );

        Ok(GameConfig {
            constants,
            actions,
            heroes,
            world,
            starting_items,
        })
    }

    /// Find a hero template by id
    pub fn hero(&self, id: &str) -> Option<&CharacterTemplate> {
        self.heroes.iter().find(|h| h.id == id)
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    Ok(Some(fs::read_to_string(path)?))
}
