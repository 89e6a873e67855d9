//! Prelude module for convenient imports
//!
//! ```rust
//! use spire_core::prelude::*;
//! ```

// Core types
pub use crate::character::{Character, InventoryItem};
pub use crate::types::{ActionKind, CombatStatus, ItemKind, Side, StatKind};

// Combat
pub use crate::action::Action;
pub use crate::combat::{CombatEngine, CombatState, EncounterId, EnemyTurnTicket};

// Progression
pub use crate::progression::{apply_experience, spend_stat_point, LevelUpOutcome};

// Session
pub use crate::session::{Session, SessionCommand, SessionEvent};

// Config
pub use crate::config::{default_actions, GameConfig};
