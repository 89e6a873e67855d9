//! Combat reducer - Pure state transitions over CombatState

use super::damage::{enemy_damage, player_damage};
use super::state::CombatState;
use crate::action::Action;
use crate::character::Character;
use crate::config::CombatConstants;
use crate::types::{CombatStatus, Side};
use serde::{Deserialize, Serialize};

/// Log line appended when the player loses
pub const DEFEAT_LOG_LINE: &str = "DEFEAT. The Aether Fades.";

/// A discrete input to the combat state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CombatCommand {
    /// Start a new encounter. Without an enemy, a full-health default enemy is used.
    SetPlayer {
        player: Character,
        enemy: Option<Character>,
    },
    PlayerAction { action: Action },
    EnemyAction,
    ResetCombat,
}

/// Apply a command using the default combat constants
pub fn reduce(state: &CombatState, command: &CombatCommand) -> CombatState {
    reduce_with_constants(state, command, &CombatConstants::default())
}

/// Apply a command to a combat state (immutable API)
///
/// Invalid commands (acting out of turn, acting after the encounter is decided)
/// return the state unchanged. The function never fails.
///
/// Victory and enemy log lines name the actual enemy rather than a fixed
/// "The Sentinel" / "Clockwork Sentinel"; keep it that way for custom rosters.
pub fn reduce_with_constants(
    state: &CombatState,
    command: &CombatCommand,
    constants: &CombatConstants,
) -> CombatState {
    match command {
        CombatCommand::SetPlayer { player, enemy } => start_encounter(player, enemy.as_ref()),
        CombatCommand::PlayerAction { action } => resolve_player_action(state, action, constants),
        CombatCommand::EnemyAction => resolve_enemy_action(state, constants),
        CombatCommand::ResetCombat => CombatState::template(),
    }
}

/// Builds a fresh state; nothing (winner included) carries over from the previous encounter
fn start_encounter(player: &Character, enemy: Option<&Character>) -> CombatState {
    let enemy = match enemy {
        Some(enemy) => enemy.clone(),
        None => {
            let mut enemy = Character::default_enemy();
            enemy.heal_full();
            enemy
        }
    };

    CombatState {
        player: player.clone(),
        combat_log: vec![format!("Combat Started! {} blocks your path.", enemy.name)],
        enemy,
        current_turn: Side::Player,
        combat_status: CombatStatus::Active,
        winner: None,
    }
}

fn resolve_player_action(
    state: &CombatState,
    action: &Action,
    constants: &CombatConstants,
) -> CombatState {
    if !state.can_act(Side::Player) {
        return state.clone();
    }

    let mut next = state.clone();
    let damage = player_damage(action, &next.player, &next.enemy, constants);
    next.enemy.take_damage(damage);
    next.combat_log
        .push(format!("You used {} dealing {} damage!", action.name, damage));

    if !next.enemy.is_alive() {
        next.combat_log
            .push(format!("VICTORY! {} is Disabled.", next.enemy.name));
        next.combat_status = CombatStatus::Victory;
        next.winner = Some(Side::Player);
    } else {
        next.current_turn = Side::Enemy;
    }
    next
}

fn resolve_enemy_action(state: &CombatState, constants: &CombatConstants) -> CombatState {
    if !state.can_act(Side::Enemy) {
        return state.clone();
    }

    let mut next = state.clone();
    let damage = enemy_damage(&next.enemy, &next.player, constants);
    next.player.take_damage(damage);
    next.combat_log.push(format!(
        "{} used {} for {} damage.",
        next.enemy.name, constants.enemy_move_name, damage
    ));

    if !next.player.is_alive() {
        next.combat_log.push(DEFEAT_LOG_LINE.to_string());
        next.combat_status = CombatStatus::Defeat;
        next.winner = Some(Side::Enemy);
    } else {
        next.current_turn = Side::Player;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_actions;
    use crate::types::ActionKind;
    use proptest::prelude::*;

    fn test_player() -> Character {
        Character {
            id: "test-hero".to_string(),
            name: "Test Hero".to_string(),
            max_hp: 1000,
            current_hp: 1000,
            attack_power: 50,
            defense: 5,
            ..Character::default_hero()
        }
    }

    fn test_attack() -> Action {
        Action::new("Test Attack", 10, ActionKind::Physical).with_description("Test")
    }

    fn started(player: Character) -> CombatState {
        reduce(
            &CombatState::template(),
            &CombatCommand::SetPlayer {
                player,
                enemy: None,
            },
        )
    }

    #[test]
    fn test_start_encounter() {
        let state = started(test_player());

        assert_eq!(state.combat_status, CombatStatus::Active);
        assert_eq!(state.player.id, "test-hero");
        assert_eq!(state.current_turn, Side::Player);
        assert_eq!(state.enemy.current_hp, 120);
        assert_eq!(
            state.combat_log,
            vec!["Combat Started! Clockwork Sentinel blocks your path.".to_string()]
        );
    }

    #[test]
    fn test_start_overwrites_finished_encounter() {
        let mut finished = started(test_player());
        finished.combat_status = CombatStatus::Defeat;
        finished.winner = Some(Side::Enemy);
        finished.current_turn = Side::Enemy;
        finished.combat_log.push("old line".to_string());

        let custom_enemy = Character::new("wisp", "Aether Wisp", 60);
        let state = reduce(
            &finished,
            &CombatCommand::SetPlayer {
                player: test_player(),
                enemy: Some(custom_enemy),
            },
        );

        assert_eq!(state.combat_status, CombatStatus::Active);
        assert_eq!(state.winner, None);
        assert_eq!(state.current_turn, Side::Player);
        assert_eq!(state.enemy.name, "Aether Wisp");
        assert_eq!(state.combat_log.len(), 1);
    }

    #[test]
    fn test_player_hit_scenario() {
        let state = started(test_player());
        let state = reduce(&state, &CombatCommand::PlayerAction { action: test_attack() });

        assert_eq!(state.enemy.current_hp, 68);
        assert_eq!(state.current_turn, Side::Enemy);
        assert_eq!(state.last_log(), Some("You used Test Attack dealing 52 damage!"));
    }

    #[test]
    fn test_enemy_hit_scenario() {
        let state = started(test_player());
        let state = reduce(&state, &CombatCommand::PlayerAction { action: test_attack() });
        let state = reduce(&state, &CombatCommand::EnemyAction);

        assert_eq!(state.player.current_hp, 983);
        assert_eq!(state.current_turn, Side::Player);
        assert_eq!(
            state.last_log(),
            Some("Clockwork Sentinel used Steam Barrage for 17 damage.")
        );
    }

    #[test]
    fn test_victory() {
        let mut state = started(test_player());
        let mut turns = 0;
        while state.combat_status.is_active() && turns < 20 {
            state = reduce(&state, &CombatCommand::PlayerAction { action: test_attack() });
            if state.combat_status.is_active() {
                state = reduce(&state, &CombatCommand::EnemyAction);
            }
            turns += 1;
        }

        assert_eq!(state.combat_status, CombatStatus::Victory);
        assert_eq!(state.winner, Some(Side::Player));
        assert_eq!(state.enemy.current_hp, 0);
        // Turn does not pass to the enemy after the killing blow
        assert_eq!(state.current_turn, Side::Player);
        assert_eq!(state.last_log(), Some("VICTORY! Clockwork Sentinel is Disabled."));
    }

    #[test]
    fn test_defeat_scenario() {
        let weak = Character {
            max_hp: 10,
            current_hp: 10,
            defense: 0,
            ..test_player()
        };
        let mut state = started(weak);
        state.current_turn = Side::Enemy;

        let state = reduce(&state, &CombatCommand::EnemyAction);

        assert_eq!(state.player.current_hp, 0);
        assert_eq!(state.combat_status, CombatStatus::Defeat);
        assert_eq!(state.winner, Some(Side::Enemy));
        assert_eq!(
            state.combat_log[state.combat_log.len() - 2],
            "Clockwork Sentinel used Steam Barrage for 22 damage."
        );
        assert_eq!(state.last_log(), Some(DEFEAT_LOG_LINE));
    }

    #[test]
    fn test_out_of_turn_is_noop() {
        let state = started(test_player());
        assert_eq!(reduce(&state, &CombatCommand::EnemyAction), state);

        let enemy_turn = reduce(&state, &CombatCommand::PlayerAction { action: test_attack() });
        assert_eq!(
            reduce(&enemy_turn, &CombatCommand::PlayerAction { action: test_attack() }),
            enemy_turn
        );
    }

    #[test]
    fn test_reset_returns_template_not_caller_player() {
        // Resetting discards the caller's player: the encounter restarts as the
        // built-in demo, even after "Try Again"
        let state = started(test_player());
        let state = reduce(&state, &CombatCommand::PlayerAction { action: test_attack() });
        let reset = reduce(&state, &CombatCommand::ResetCombat);

        assert_eq!(reset, CombatState::template());
        assert_ne!(reset.player.id, "test-hero");
    }

    #[test]
    fn test_reducer_is_deterministic() {
        let state = started(test_player());
        let command = CombatCommand::PlayerAction { action: test_attack() };
        assert_eq!(reduce(&state, &command), reduce(&state, &command));
    }

    #[test]
    fn test_custom_constants() {
        let constants = CombatConstants {
            enemy_move_name: "Gear Grind".to_string(),
            enemy_move_bonus: 0,
            ..CombatConstants::default()
        };
        let mut state = started(test_player());
        state.current_turn = Side::Enemy;

        let state = reduce_with_constants(&state, &CombatCommand::EnemyAction, &constants);
        assert_eq!(
            state.last_log(),
            Some("Clockwork Sentinel used Gear Grind for 7 damage.")
        );
    }

    fn arb_action() -> impl Strategy<Value = Action> {
        prop::sample::select(default_actions())
    }

    proptest! {
        #[test]
        fn prop_player_action_never_below_zero(
            action in arb_action(),
            atk in 0u32..200,
            enemy_hp in 1u32..300,
            enemy_def in 0u32..100,
        ) {
            let mut state = started(test_player().with_attack_power(atk));
            state.enemy.max_hp = enemy_hp;
            state.enemy.current_hp = enemy_hp;
            state.enemy.defense = enemy_def;

            let next = reduce(&state, &CombatCommand::PlayerAction { action: action.clone() });
            let expected = 1i64.max(action.damage as i64 + atk as i64 - enemy_def as i64) as u32;

            prop_assert_eq!(next.enemy.current_hp, enemy_hp.saturating_sub(expected));
            prop_assert_eq!(next.enemy.current_hp == 0, next.combat_status == CombatStatus::Victory);
        }

        #[test]
        fn prop_enemy_action_formula(atk in 0u32..200, hp in 1u32..300, def in 0u32..100) {
            let mut state = started(test_player());
            state.current_turn = Side::Enemy;
            state.enemy.attack_power = atk;
            state.player.current_hp = hp;
            state.player.max_hp = hp;
            state.player.defense = def;

            let next = reduce(&state, &CombatCommand::EnemyAction);
            let expected = 1i64.max(atk as i64 + 10 - def as i64) as u32;

            prop_assert_eq!(next.player.current_hp, hp.saturating_sub(expected));
            prop_assert_eq!(next.player.current_hp == 0, next.combat_status == CombatStatus::Defeat);
        }

        #[test]
        fn prop_terminal_states_absorb_actions(action in arb_action(), victory in any::<bool>(), turn_player in any::<bool>()) {
            let mut state = started(test_player());
            state.combat_status = if victory { CombatStatus::Victory } else { CombatStatus::Defeat };
            state.current_turn = if turn_player { Side::Player } else { Side::Enemy };

            prop_assert_eq!(&reduce(&state, &CombatCommand::PlayerAction { action }), &state);
            prop_assert_eq!(&reduce(&state, &CombatCommand::EnemyAction), &state);
        }
    }
}
