//! spire_core - Combat resolution and progression for the Aetherium Spires
//!
//! This library provides:
//! - CombatState + reducer: Pure turn-based encounter transitions
//! - CombatEngine: Encounter owner with stale-turn protection
//! - Progression: Experience cascades and stat point allocation
//! - World: Islands, enemy rosters and the persistent player record
//! - Session: Top-level controller wiring the above together

pub mod action;
pub mod character;
pub mod combat;
pub mod config;
pub mod prelude;
pub mod progression;
pub mod session;
pub mod types;
pub mod world;

// Re-export core types for convenience
pub use action::Action;
pub use character::{Attributes, Character, CharacterTemplate, InventoryItem};
pub use combat::{CombatCommand, CombatEngine, CombatError, CombatState, EncounterId, EnemyTurnTicket};
pub use config::{default_actions, ConfigError, GameConfig, GameConstants};
pub use progression::{apply_experience, spend_stat_point, LevelUpOutcome};
pub use session::{Session, SessionCommand, SessionError, SessionEvent};
pub use types::{ActionKind, CombatStatus, ItemKind, Side, StatKind};
pub use world::{GameState, Island, World};
