//! World - Islands, enemy rosters and out-of-combat game state

mod island;
mod state;

pub use island::{Island, World, UNKNOWN_FLAVOR};
pub use state::{GameState, TravelOutcome};
