//! Session - Top-level controller owning game and combat state
//!
//! The front-end sends [`SessionCommand`]s and reads state back through
//! [`Session::game`] and [`Session::combat`]. The session is also where the
//! victory reward is paid, exactly once per encounter.

use crate::action::Action;
use crate::combat::{CombatEngine, CombatError, EncounterId};
use crate::config::GameConfig;
use crate::progression::LevelUpOutcome;
use crate::types::{CombatStatus, StatKind};
use crate::world::{GameState, TravelOutcome};
use rand::Rng;
use thiserror::Error;
use tracing::{info, warn};

/// Session error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No hero has been selected")]
    NoHeroSelected,
    #[error("Unknown hero: {0}")]
    UnknownHero(String),
    #[error("Unknown island: {0}")]
    UnknownIsland(String),
    #[error(transparent)]
    Combat(#[from] CombatError),
}

/// Commands accepted by the session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Pick a hero and grant the starting inventory
    SelectHero(String),
    Travel(String),
    /// Complete travel in progress
    Arrive,
    /// Start combat against a random enemy of the current island
    EngageEnemy,
    PlayerAction(Action),
    /// Run a scheduled enemy turn
    EnemyTurn(EncounterId),
    ResetCombat,
    SpendStatPoint(StatKind),
}

/// Something the front-end may want to react to
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    HeroSelected { name: String },
    Departed { destination: String },
    Arrived { island: String },
    CombatStarted { encounter: EncounterId, enemy: String },
    VictoryRewarded { experience: u32 },
    LeveledUp { level: u32, levels_gained: u32 },
    StatPointSpent { stat: StatKind },
}

pub struct Session {
    config: GameConfig,
    game: GameState,
    combat: CombatEngine,
    /// Last encounter whose reward has been paid
    rewarded: Option<EncounterId>,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let game = GameState::new(config.world.home_island());
        let combat = CombatEngine::with_constants(config.constants.combat.clone());
        Session {
            config,
            game,
            combat,
            rewarded: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn combat(&self) -> &CombatEngine {
        &self.combat
    }

    /// Apply a command using the thread RNG for enemy selection
    pub fn dispatch(&mut self, command: SessionCommand) -> Result<Vec<SessionEvent>, SessionError> {
        let mut rng = rand::thread_rng();
        self.dispatch_with_rng(command, &mut rng)
    }

    /// Apply a command with a provided RNG (for deterministic testing)
    pub fn dispatch_with_rng(
        &mut self,
        command: SessionCommand,
        rng: &mut impl Rng,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        let mut events = Vec::new();

        match command {
            SessionCommand::SelectHero(id) => {
                let template = self
                    .config
                    .hero(&id)
                    .ok_or_else(|| SessionError::UnknownHero(id.clone()))?;
                let hero = template
                    .instantiate(true)
                    .with_inventory(self.config.starting_items.clone());
                info!(hero = %hero.name, "hero selected");
                events.push(SessionEvent::HeroSelected {
                    name: hero.name.clone(),
                });
                self.game.set_player(hero);
            }
            SessionCommand::Travel(island) => {
                if self.config.world.island(&island).is_none() {
                    return Err(SessionError::UnknownIsland(island));
                }
                if self.game.travel_to(&island) == TravelOutcome::Departed {
                    info!(from = %self.game.current_island, to = %island, "travel started");
                    events.push(SessionEvent::Departed {
                        destination: island,
                    });
                }
            }
            SessionCommand::Arrive => {
                if let Some(island) = self.game.arrive() {
                    info!(island = %island, "arrived");
                    events.push(SessionEvent::Arrived {
                        island: island.to_string(),
                    });
                }
            }
            SessionCommand::EngageEnemy => {
                let player = self
                    .game
                    .player
                    .clone()
                    .ok_or(SessionError::NoHeroSelected)?;
                let enemy = self
                    .config
                    .world
                    .pick_enemy_with_rng(&self.game.current_island, rng);
                let encounter = self.combat.start_combat(player, enemy);
                events.push(SessionEvent::CombatStarted {
                    encounter,
                    enemy: self.combat.state().enemy.name.clone(),
                });
            }
            SessionCommand::PlayerAction(action) => {
                self.combat.submit_action(&action);
                self.pay_victory_reward(&mut events);
            }
            SessionCommand::EnemyTurn(encounter) => {
                self.combat.resolve_enemy_turn(encounter)?;
            }
            SessionCommand::ResetCombat => {
                self.combat.reset_encounter();
            }
            SessionCommand::SpendStatPoint(stat) => {
                if self
                    .game
                    .spend_stat_point(stat, &self.config.constants.progression)
                {
                    events.push(SessionEvent::StatPointSpent { stat });
                }
            }
        }

        Ok(events)
    }

    /// Pay the victory reward into the persistent record once per encounter
    fn pay_victory_reward(&mut self, events: &mut Vec<SessionEvent>) {
        let encounter = self.combat.encounter();
        if self.combat.state().combat_status != CombatStatus::Victory
            || self.rewarded == Some(encounter)
        {
            return;
        }
        self.rewarded = Some(encounter);

        let experience = self.config.constants.combat.victory_experience;
        let Some(outcome) = self
            .game
            .gain_experience(experience, &self.config.constants.progression)
        else {
            warn!(encounter = %encounter, "victory without a persistent player record");
            return;
        };

        info!(encounter = %encounter, experience, "victory reward paid");
        events.push(SessionEvent::VictoryRewarded { experience });
        self.push_level_up(outcome, events);
    }

    fn push_level_up(&self, outcome: LevelUpOutcome, events: &mut Vec<SessionEvent>) {
        if outcome.leveled_up {
            info!(level = outcome.character.level, "level up");
            events.push(SessionEvent::LeveledUp {
                level: outcome.character.level,
                levels_gained: outcome.levels_gained,
            });
        }
    }
}
