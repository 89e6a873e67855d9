//! Combat resolution - The turn-based encounter state machine

mod damage;
mod engine;
mod reducer;
mod state;

pub use damage::{enemy_damage, player_damage};
pub use engine::{CombatEngine, CombatError, EncounterId, EnemyTurnTicket};
pub use reducer::{reduce, reduce_with_constants, CombatCommand, DEFEAT_LOG_LINE};
pub use state::{CombatState, TEMPLATE_LOG_LINE};
