//! Island and enemy roster loading

use crate::world::Island;
use super::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IslandsConfig {
    islands: Vec<Island>,
}

/// Load islands from a TOML string
pub fn parse_islands(content: &str) -> Result<Vec<Island>, ConfigError> {
    let config: IslandsConfig = super::parse_toml(content)?;
    Ok(config.islands)
}

/// Get the default map
pub fn default_islands() -> Vec<Island> {
    let toml = include_str!("../../config/islands.toml");
    parse_islands(toml).unwrap_or_default()
}
