//! CombatEngine - Owns the encounter and applies commands to it

use super::reducer::{reduce_with_constants, CombatCommand};
use super::state::CombatState;
use crate::action::Action;
use crate::character::Character;
use crate::config::CombatConstants;
use crate::types::Side;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Token identifying one encounter. Minted on every start and every reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct EncounterId(pub u64);

impl EncounterId {
    fn next(self) -> Self {
        EncounterId(self.0 + 1)
    }
}

impl fmt::Display for EncounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Request for the caller to run the enemy turn after `delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTurnTicket {
    pub encounter: EncounterId,
    pub delay: Duration,
}

/// Combat engine error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    #[error("Enemy turn scheduled for encounter {presented} but encounter {current} is running")]
    StaleEncounter {
        presented: EncounterId,
        current: EncounterId,
    },
}

/// Single owner of the running encounter
///
/// All transitions go through the pure reducer; the engine adds the encounter
/// token that lets it reject enemy turns scheduled for a previous encounter.
#[derive(Debug, Clone)]
pub struct CombatEngine {
    state: CombatState,
    encounter: EncounterId,
    constants: CombatConstants,
}

impl Default for CombatEngine {
    fn default() -> Self {
        CombatEngine::new()
    }
}

impl CombatEngine {
    /// Engine holding the default template encounter
    pub fn new() -> Self {
        CombatEngine::with_constants(CombatConstants::default())
    }

    pub fn with_constants(constants: CombatConstants) -> Self {
        CombatEngine {
            state: CombatState::template(),
            encounter: EncounterId::default(),
            constants,
        }
    }

    /// Read-only view for rendering
    pub fn state(&self) -> &CombatState {
        &self.state
    }

    pub fn encounter(&self) -> EncounterId {
        self.encounter
    }

    pub fn constants(&self) -> &CombatConstants {
        &self.constants
    }

    /// Start a new encounter, replacing whatever was running
    pub fn start_combat(&mut self, player: Character, enemy: Option<Character>) -> EncounterId {
        self.encounter = self.encounter.next();
        self.apply(&CombatCommand::SetPlayer { player, enemy });
        info!(
            encounter = %self.encounter,
            player = %self.state.player.name,
            enemy = %self.state.enemy.name,
            "encounter started"
        );
        self.encounter
    }

    /// Submit a player move. Ignored when it is not the player's turn.
    pub fn submit_action(&mut self, action: &Action) {
        if !self.state.can_act(Side::Player) {
            debug!(action = %action.name, "player action ignored");
            return;
        }
        self.apply(&CombatCommand::PlayerAction {
            action: action.clone(),
        });
    }

    /// Run the enemy turn scheduled for `encounter`
    ///
    /// Tickets from an earlier encounter are rejected without touching state.
    pub fn resolve_enemy_turn(&mut self, encounter: EncounterId) -> Result<(), CombatError> {
        if encounter != self.encounter {
            warn!(presented = %encounter, current = %self.encounter, "stale enemy turn rejected");
            return Err(CombatError::StaleEncounter {
                presented: encounter,
                current: self.encounter,
            });
        }
        self.apply(&CombatCommand::EnemyAction);
        Ok(())
    }

    /// Restore the default template encounter
    pub fn reset_encounter(&mut self) -> EncounterId {
        self.encounter = self.encounter.next();
        self.apply(&CombatCommand::ResetCombat);
        info!(encounter = %self.encounter, "encounter reset to template");
        self.encounter
    }

    /// The enemy turn the caller must schedule, if any
    pub fn pending_enemy_turn(&self) -> Option<EnemyTurnTicket> {
        self.state.can_act(Side::Enemy).then(|| EnemyTurnTicket {
            encounter: self.encounter,
            delay: self.constants.enemy_turn_delay(),
        })
    }

    fn apply(&mut self, command: &CombatCommand) {
        let before = self.state.combat_status;
        self.state = reduce_with_constants(&self.state, command, &self.constants);

        if let Some(line) = self.state.last_log() {
            debug!(encounter = %self.encounter, "{}", line);
        }
        if before != self.state.combat_status && self.state.is_over() {
            info!(
                encounter = %self.encounter,
                status = ?self.state.combat_status,
                "encounter decided"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActionKind, CombatStatus};

    fn strike() -> Action {
        Action::new("Test Attack", 10, ActionKind::Physical)
    }

    fn strong_hero() -> Character {
        Character::default_hero().with_attack_power(50)
    }

    #[test]
    fn test_engine_starts_on_template() {
        let engine = CombatEngine::new();
        assert_eq!(engine.state(), &CombatState::template());
        assert_eq!(engine.encounter(), EncounterId(0));
        assert!(engine.pending_enemy_turn().is_none());
    }

    #[test]
    fn test_start_mints_new_encounter() {
        let mut engine = CombatEngine::new();
        let first = engine.start_combat(strong_hero(), None);
        let second = engine.start_combat(strong_hero(), None);
        assert!(second > first);
    }

    #[test]
    fn test_turn_cycle_through_ticket() {
        let mut engine = CombatEngine::new();
        engine.start_combat(strong_hero(), None);
        engine.submit_action(&strike());

        let ticket = engine.pending_enemy_turn().unwrap();
        assert_eq!(ticket.encounter, engine.encounter());
        assert_eq!(ticket.delay, Duration::from_millis(1500));

        engine.resolve_enemy_turn(ticket.encounter).unwrap();
        assert_eq!(engine.state().current_turn, Side::Player);
        assert!(engine.pending_enemy_turn().is_none());
    }

    #[test]
    fn test_stale_ticket_rejected_after_reset() {
        let mut engine = CombatEngine::new();
        engine.start_combat(strong_hero(), None);
        engine.submit_action(&strike());
        let ticket = engine.pending_enemy_turn().unwrap();

        engine.reset_encounter();
        let before = engine.state().clone();

        let err = engine.resolve_enemy_turn(ticket.encounter).unwrap_err();
        assert!(matches!(err, CombatError::StaleEncounter { .. }));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_stale_ticket_rejected_after_new_encounter() {
        let mut engine = CombatEngine::new();
        engine.start_combat(strong_hero(), None);
        engine.submit_action(&strike());
        let ticket = engine.pending_enemy_turn().unwrap();

        engine.start_combat(strong_hero(), None);
        engine.submit_action(&strike());
        let hp_before = engine.state().player.current_hp;

        assert!(engine.resolve_enemy_turn(ticket.encounter).is_err());
        assert_eq!(engine.state().player.current_hp, hp_before);
    }

    #[test]
    fn test_out_of_turn_enemy_ticket_is_noop() {
        let mut engine = CombatEngine::new();
        engine.start_combat(strong_hero(), None);
        let before = engine.state().clone();

        engine.resolve_enemy_turn(engine.encounter()).unwrap();
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_reset_after_victory_is_template() {
        let mut engine = CombatEngine::new();
        let one_shot = Character::default_hero().with_attack_power(500);
        engine.start_combat(one_shot, None);
        engine.submit_action(&strike());
        assert_eq!(engine.state().combat_status, CombatStatus::Victory);

        engine.reset_encounter();
        assert_eq!(engine.state(), &CombatState::template());
    }
}
