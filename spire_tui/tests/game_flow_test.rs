//! Integration test: Pick hero -> Fight -> Level up -> Spend points -> Travel
//!
//! Drives the same flow the terminal front-end does, through the public
//! spire_core API only.

use rand::rngs::StdRng;
use rand::SeedableRng;
use spire_core::combat::{reduce, DEFEAT_LOG_LINE};
use spire_core::{
    apply_experience, Action, ActionKind, Character, CombatCommand, CombatState, CombatStatus,
    GameConfig, Session, SessionCommand, SessionError, SessionEvent, Side, StatKind,
};

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

fn test_hero() -> Character {
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

/// Run the session's encounter to the end with one action, resolving enemy
/// turns as soon as they are scheduled
fn fight(session: &mut Session, action: &Action, rng: &mut StdRng) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    for _ in 0..100 {
        if session.combat().state().is_over() {
            break;
        }
        let command = match session.combat().pending_enemy_turn() {
            Some(ticket) => SessionCommand::EnemyTurn(ticket.encounter),
            None => SessionCommand::PlayerAction(action.clone()),
        };
        events.extend(session.dispatch_with_rng(command, rng).unwrap());
    }
    events
}

#[test]
fn test_reducer_workflow() {
    separator("Combat");

    let mut state = reduce(
        &CombatState::template(),
        &CombatCommand::SetPlayer {
            player: test_hero(),
            enemy: None,
        },
    );
    assert_eq!(state.combat_status, CombatStatus::Active);
    assert_eq!(state.player.id, "test-hero");
    assert_eq!(state.current_turn, Side::Player);

    state = reduce(&state, &CombatCommand::PlayerAction { action: test_attack() });
    println!("  {}", state.last_log().unwrap());
    assert_eq!(state.enemy.current_hp, 68);
    assert_eq!(state.current_turn, Side::Enemy);

    state = reduce(&state, &CombatCommand::EnemyAction);
    println!("  {}", state.last_log().unwrap());
    assert_eq!(state.player.current_hp, 983);
    assert_eq!(state.current_turn, Side::Player);

    let mut turns = 0;
    while state.enemy.current_hp > 0 && turns < 20 {
        state = reduce(&state, &CombatCommand::PlayerAction { action: test_attack() });
        if state.combat_status.is_active() {
            state = reduce(&state, &CombatCommand::EnemyAction);
        }
        turns += 1;
    }
    assert_eq!(state.combat_status, CombatStatus::Victory);
    assert_eq!(state.enemy.current_hp, 0);

    separator("Progression");

    let outcome = apply_experience(&test_hero(), 50);
    assert_eq!(outcome.character.experience, 50);
    assert_eq!(outcome.character.level, 1);
    assert!(!outcome.leveled_up);

    let outcome = apply_experience(&outcome.character, 60);
    assert_eq!(outcome.character.level, 2);
    assert_eq!(outcome.character.experience, 10);
    assert_eq!(outcome.character.stat_points, 3);
    assert!(outcome.leveled_up);

    separator("Defeat");

    let weak = Character {
        max_hp: 10,
        current_hp: 10,
        defense: 0,
        ..test_hero()
    };
    let mut state = reduce(
        &CombatState::template(),
        &CombatCommand::SetPlayer {
            player: weak,
            enemy: None,
        },
    );
    for _ in 0..10 {
        state.current_turn = Side::Enemy;
        state = reduce(&state, &CombatCommand::EnemyAction);
        if state.combat_status == CombatStatus::Defeat {
            break;
        }
    }
    assert_eq!(state.combat_status, CombatStatus::Defeat);
    assert_eq!(state.player.current_hp, 0);
    assert_eq!(state.last_log(), Some(DEFEAT_LOG_LINE));
}

#[test]
fn test_session_journey() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut session = Session::new(GameConfig::default());
    let overcharge = session.config().actions[2].clone();
    assert_eq!(overcharge.name, "Overcharge");

    separator("Hero selection");

    session
        .dispatch_with_rng(SessionCommand::SelectHero("mechanic".to_string()), &mut rng)
        .unwrap();
    assert_eq!(session.game().current_island, "Aetherium Spire - Home");

    separator("Two training fights");

    let mut events = Vec::new();
    for _ in 0..2 {
        session
            .dispatch_with_rng(SessionCommand::EngageEnemy, &mut rng)
            .unwrap();
        assert_eq!(session.combat().state().enemy.name, "Training Automaton");
        events.extend(fight(&mut session, &overcharge, &mut rng));
        assert_eq!(session.combat().state().combat_status, CombatStatus::Victory);
        session
            .dispatch_with_rng(SessionCommand::ResetCombat, &mut rng)
            .unwrap();
    }
    println!("  events: {:?}", events);

    let rewards: u32 = events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::VictoryRewarded { experience } => Some(*experience),
            _ => None,
        })
        .sum();
    assert_eq!(rewards, 100);

    let hero = session.game().player.clone().unwrap();
    assert_eq!(hero.level, 2);
    assert_eq!(hero.experience, 0);
    assert_eq!(hero.exp_to_next_level, 150);
    assert_eq!(hero.max_hp, 120);
    assert_eq!(hero.attack_power, 14);
    assert_eq!(hero.stat_points, 3);

    separator("Stat allocation");

    for _ in 0..4 {
        session
            .dispatch_with_rng(SessionCommand::SpendStatPoint(StatKind::AttackPower), &mut rng)
            .unwrap();
    }
    let hero = session.game().player.clone().unwrap();
    assert_eq!(hero.attack_power, 17);
    assert_eq!(hero.stat_points, 0);

    separator("Travel");

    session
        .dispatch_with_rng(SessionCommand::Travel("Clockwork Citadel".to_string()), &mut rng)
        .unwrap();
    assert!(session.game().is_traveling());
    // Until arrival the hero is still at the island being left
    session
        .dispatch_with_rng(SessionCommand::EngageEnemy, &mut rng)
        .unwrap();
    assert_eq!(session.combat().state().enemy.name, "Training Automaton");

    session
        .dispatch_with_rng(SessionCommand::Arrive, &mut rng)
        .unwrap();
    session
        .dispatch_with_rng(SessionCommand::EngageEnemy, &mut rng)
        .unwrap();
    let enemy = session.combat().state().enemy.name.clone();
    assert!(enemy == "Clockwork Sentinel" || enemy == "Steam Golem");
    assert_eq!(session.combat().state().player.attack_power, 17);

    separator("Snapshot");

    let json = session.combat().state().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["combat_status"], "active");
    assert_eq!(value["current_turn"], "player");
    assert_eq!(value["enemy"]["name"], enemy.as_str());
}

#[test]
fn test_stale_enemy_turn_after_give_up() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = Session::new(GameConfig::default());
    session
        .dispatch_with_rng(SessionCommand::SelectHero("alchemist".to_string()), &mut rng)
        .unwrap();
    session
        .dispatch_with_rng(SessionCommand::EngageEnemy, &mut rng)
        .unwrap();

    let quick_shot = session.config().actions[3].clone();
    session
        .dispatch_with_rng(SessionCommand::PlayerAction(quick_shot), &mut rng)
        .unwrap();
    let ticket = session.combat().pending_enemy_turn().unwrap();

    // Leaving combat before the delay passes
    session
        .dispatch_with_rng(SessionCommand::ResetCombat, &mut rng)
        .unwrap();
    let result = session.dispatch_with_rng(SessionCommand::EnemyTurn(ticket.encounter), &mut rng);

    assert!(matches!(result, Err(SessionError::Combat(_))));
    assert_eq!(session.combat().state(), &CombatState::template());
}
