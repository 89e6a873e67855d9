//! GameState - Map position and the persistent player record

use crate::character::Character;
use crate::config::ProgressionConstants;
use crate::progression::{apply_experience_with_constants, spend_stat_point_with_constants, LevelUpOutcome};
use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// Outcome of a travel request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelOutcome {
    /// Travel started; the caller completes it with [`GameState::arrive`]
    Departed,
    AlreadyHere,
    AlreadyTraveling,
}

/// Out-of-combat state: where the hero is and their canonical character record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub current_island: String,
    /// Destination while travel is in progress
    pub destination: Option<String>,
    /// Persistent player record, used as the player for every encounter start
    pub player: Option<Character>,
}

impl GameState {
    pub fn new(home_island: impl Into<String>) -> Self {
        GameState {
            current_island: home_island.into(),
            destination: None,
            player: None,
        }
    }

    pub fn is_traveling(&self) -> bool {
        self.destination.is_some()
    }

    pub fn set_player(&mut self, character: Character) {
        self.player = Some(character);
    }

    /// Begin travelling to an island
    pub fn travel_to(&mut self, island: &str) -> TravelOutcome {
        if self.is_traveling() {
            return TravelOutcome::AlreadyTraveling;
        }
        if self.current_island == island {
            return TravelOutcome::AlreadyHere;
        }
        self.destination = Some(island.to_string());
        TravelOutcome::Departed
    }

    /// Finish travel in progress. Returns the island arrived at.
    pub fn arrive(&mut self) -> Option<&str> {
        let destination = self.destination.take()?;
        self.current_island = destination;
        Some(&self.current_island)
    }

    /// Apply experience to the persistent record. `None` when no hero is selected.
    pub fn gain_experience(
        &mut self,
        amount: u32,
        constants: &ProgressionConstants,
    ) -> Option<LevelUpOutcome> {
        let player = self.player.as_ref()?;
        let outcome = apply_experience_with_constants(player, amount, constants);
        self.player = Some(outcome.character.clone());
        Some(outcome)
    }

    /// Spend a stat point on the persistent record. Returns whether a point was spent.
    pub fn spend_stat_point(&mut self, stat: StatKind, constants: &ProgressionConstants) -> bool {
        let Some(player) = self.player.as_ref() else {
            return false;
        };
        if player.stat_points == 0 {
            return false;
        }
        self.player = Some(spend_stat_point_with_constants(player, stat, constants));
        true
    }
}
