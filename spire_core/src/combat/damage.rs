//! Damage formulas

use crate::action::Action;
use crate::character::Character;
use crate::config::CombatConstants;

/// Damage dealt by a player action
///
/// ```text
/// damage = max(min_damage, action.damage + player.attack_power - enemy.defense)
/// ```
pub fn player_damage(
    action: &Action,
    player: &Character,
    enemy: &Character,
    constants: &CombatConstants,
) -> u32 {
    action
        .damage
        .saturating_add(player.attack_power)
        .saturating_sub(enemy.defense)
        .max(constants.min_damage)
}

/// Damage dealt by the enemy's only move
///
/// ```text
/// damage = max(min_damage, enemy.attack_power + enemy_move_bonus - player.defense)
/// ```
pub fn enemy_damage(enemy: &Character, player: &Character, constants: &CombatConstants) -> u32 {
    enemy
        .attack_power
        .saturating_add(constants.enemy_move_bonus)
        .saturating_sub(player.defense)
        .max(constants.min_damage)
}
