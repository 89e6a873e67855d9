//! CombatState - Everything the UI needs to render one encounter

use crate::character::Character;
use crate::types::{CombatStatus, Side};
use serde::{Deserialize, Serialize};

/// Log line of the default template
pub const TEMPLATE_LOG_LINE: &str = "Combat Started!";

/// State of a single encounter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    pub player: Character,
    pub enemy: Character,
    pub current_turn: Side,
    /// Append-only, oldest first
    pub combat_log: Vec<String>,
    pub combat_status: CombatStatus,
    pub winner: Option<Side>,
}

impl CombatState {
    /// The built-in demo encounter: Hero against a Clockwork Sentinel.
    ///
    /// Resetting always returns here, not to the caller's last player.
    pub fn template() -> Self {
        CombatState {
            player: Character::default_hero(),
            enemy: Character::default_enemy(),
            current_turn: Side::Player,
            combat_log: vec![TEMPLATE_LOG_LINE.to_string()],
            combat_status: CombatStatus::Active,
            winner: None,
        }
    }

    /// Whether the given side may act right now
    pub fn can_act(&self, side: Side) -> bool {
        self.current_turn == side && self.combat_status.is_active()
    }

    pub fn is_over(&self) -> bool {
        self.combat_status.is_over()
    }

    /// Most recent log line
    pub fn last_log(&self) -> Option<&str> {
        self.combat_log.last().map(String::as_str)
    }

    /// Serialize a read-only snapshot for export
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for CombatState {
    fn default() -> Self {
        CombatState::template()
    }
}
