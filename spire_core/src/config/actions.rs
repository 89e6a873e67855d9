//! Action catalog loading

use crate::action::Action;
use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Container for the action catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ActionsConfig {
    actions: Vec<Action>,
}

/// Load the action catalog from a TOML string
pub fn parse_action_catalog(content: &str) -> Result<Vec<Action>, ConfigError> {
    let config: ActionsConfig = super::parse_toml(content)?;
    Ok(config.actions)
}

/// Get the default action catalog, in action-bar order
pub fn default_actions() -> Vec<Action> {
    let toml = include_str!("../../config/actions.toml");
    parse_action_catalog(toml).unwrap_or_else(|_| vec![Action::clockwork_strike()])
}
