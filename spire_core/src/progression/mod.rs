//! Progression - Experience, level-up cascades and stat point allocation
//!
//! Both operations are pure: they take a character by reference and return an
//! updated copy.

use crate::character::Character;
use crate::config::ProgressionConstants;
use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// Result of awarding experience
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpOutcome {
    pub character: Character,
    /// Whether at least one level was gained
    pub leveled_up: bool,
    pub levels_gained: u32,
}

/// Award experience using the default progression constants
pub fn apply_experience(character: &Character, amount: u32) -> LevelUpOutcome {
    apply_experience_with_constants(character, amount, &ProgressionConstants::default())
}

/// Award experience, processing every level-up the new total crosses
///
/// Each level gained:
/// - subtracts the current threshold from experience
/// - multiplies the threshold by `exp_growth` (floored)
/// - grants stat points, max HP and attack power
/// - fully heals the character
///
/// Characters with a threshold of 0 (enemies) accumulate experience but never level.
pub fn apply_experience_with_constants(
    character: &Character,
    amount: u32,
    constants: &ProgressionConstants,
) -> LevelUpOutcome {
    let mut updated = character.clone();
    updated.experience = updated.experience.saturating_add(amount);

    let mut levels_gained: u32 = 0;
    while updated.exp_to_next_level > 0 && updated.experience >= updated.exp_to_next_level {
        let threshold = updated.exp_to_next_level;
        let next = (threshold as f64 * constants.exp_growth).floor() as u32;
        // A threshold that no longer grows costs the same for every remaining level
        let levels = if next == threshold {
            updated.experience / threshold
        } else {
            1
        };

        updated.experience -= levels * threshold;
        updated.exp_to_next_level = next;
        grant_levels(&mut updated, levels, constants);
        levels_gained = levels_gained.saturating_add(levels);
    }

    LevelUpOutcome {
        character: updated,
        leveled_up: levels_gained > 0,
        levels_gained,
    }
}

/// Per-level rewards, saturating at the counter limits
fn grant_levels(character: &mut Character, levels: u32, constants: &ProgressionConstants) {
    character.level = character.level.saturating_add(levels);
    character.stat_points = character
        .stat_points
        .saturating_add(constants.stat_points_per_level.saturating_mul(levels));
    character.max_hp = character
        .max_hp
        .saturating_add(constants.max_hp_per_level.saturating_mul(levels));
    character.attack_power = character
        .attack_power
        .saturating_add(constants.attack_power_per_level.saturating_mul(levels));
    character.heal_full();
}

/// Spend one stat point using the default progression constants
pub fn spend_stat_point(character: &Character, stat: StatKind) -> Character {
    spend_stat_point_with_constants(character, stat, &ProgressionConstants::default())
}

/// Spend one stat point on a stat. No-op without points.
///
/// `MaxHp` raises max and current HP by the same amount and does not reclamp;
/// the two values must move in lockstep for `current_hp <= max_hp` to hold.
pub fn spend_stat_point_with_constants(
    character: &Character,
    stat: StatKind,
    constants: &ProgressionConstants,
) -> Character {
    let mut updated = character.clone();
    if updated.stat_points == 0 {
        return updated;
    }

    updated.stat_points -= 1;
    match stat {
        StatKind::AttackPower => {
            updated.attack_power = updated.attack_power.saturating_add(constants.attack_power_per_point)
        }
        StatKind::Defense => {
            updated.defense = updated.defense.saturating_add(constants.defense_per_point)
        }
        StatKind::MaxHp => {
            updated.max_hp = updated.max_hp.saturating_add(constants.max_hp_per_point);
            updated.current_hp = updated.current_hp.saturating_add(constants.max_hp_per_point);
        }
    }
    updated
}
