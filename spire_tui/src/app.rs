//! Application state

use spire_core::prelude::*;
use spire_core::SessionError;
use std::time::Instant;
use tracing::{info, warn};

/// Inventory grid size; empty slots are drawn as placeholders
pub const INVENTORY_SLOTS: usize = 12;

/// Notices kept for the footer
const MAX_NOTICES: usize = 50;

/// Main screens, one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    CharacterSelect,
    Map,
    Combat,
}

/// Panels drawn on top of the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    CharacterSheet,
    Inventory,
    Help,
}

/// Enemy turn waiting for its delay to pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEnemyTurn {
    pub encounter: EncounterId,
    pub due: Instant,
}

pub struct App {
    pub session: Session,
    pub screen: Screen,
    pub overlay: Option<Overlay>,
    pub selected_hero: usize,
    pub selected_island: usize,
    pub selected_action: usize,
    pub selected_item: usize,
    pub selected_stat: usize,
    pub notices: Vec<String>,
    pub should_quit: bool,
    pub enemy_turn: Option<ScheduledEnemyTurn>,
    pub arrival_due: Option<Instant>,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        App {
            session: Session::new(config),
            screen: Screen::CharacterSelect,
            overlay: None,
            selected_hero: 0,
            selected_island: 0,
            selected_action: 0,
            selected_item: 0,
            selected_stat: 0,
            notices: vec!["Select your champion and ascend the floating realms.".to_string()],
            should_quit: false,
            enemy_turn: None,
            arrival_due: None,
        }
    }

    pub fn player(&self) -> Option<&Character> {
        self.session.game().player.as_ref()
    }

    pub fn combat(&self) -> &CombatState {
        self.session.combat().state()
    }

    pub fn actions(&self) -> &[Action] {
        &self.session.config().actions
    }

    pub fn is_traveling(&self) -> bool {
        self.session.game().is_traveling()
    }

    // === Navigation ===

    pub fn on_up(&mut self) {
        match (self.overlay, self.screen) {
            (Some(Overlay::CharacterSheet), _) => {
                self.selected_stat = self.selected_stat.saturating_sub(1);
            }
            (Some(Overlay::Inventory), _) => {
                self.selected_item = self.selected_item.saturating_sub(1);
            }
            (Some(Overlay::Help), _) => {}
            (None, Screen::CharacterSelect) => {
                self.selected_hero = self.selected_hero.saturating_sub(1);
            }
            (None, Screen::Map) => {
                self.selected_island = self.selected_island.saturating_sub(1);
            }
            (None, Screen::Combat) => {
                self.selected_action = self.selected_action.saturating_sub(1);
            }
        }
    }

    pub fn on_down(&mut self) {
        match (self.overlay, self.screen) {
            (Some(Overlay::CharacterSheet), _) => {
                self.selected_stat = (self.selected_stat + 1).min(StatKind::all().len() - 1);
            }
            (Some(Overlay::Inventory), _) => {
                let count = self.player().map(|p| p.inventory.len()).unwrap_or(0);
                self.selected_item = (self.selected_item + 1).min(count.saturating_sub(1));
            }
            (Some(Overlay::Help), _) => {}
            (None, Screen::CharacterSelect) => {
                let count = self.session.config().heroes.len();
                self.selected_hero = (self.selected_hero + 1).min(count.saturating_sub(1));
            }
            (None, Screen::Map) => {
                let count = self.session.config().world.islands().len();
                self.selected_island = (self.selected_island + 1).min(count.saturating_sub(1));
            }
            (None, Screen::Combat) => {
                let count = self.actions().len();
                self.selected_action = (self.selected_action + 1).min(count.saturating_sub(1));
            }
        }
    }

    pub fn on_left(&mut self) {
        self.on_up();
    }

    pub fn on_right(&mut self) {
        self.on_down();
    }

    pub fn on_enter(&mut self, now: Instant) {
        match (self.overlay, self.screen) {
            (Some(Overlay::CharacterSheet), _) => {
                let stat = StatKind::all()[self.selected_stat];
                self.spend_stat_point(stat, now);
            }
            (Some(Overlay::Inventory), _) => self.equip_selected(),
            (Some(Overlay::Help), _) => self.overlay = None,
            (None, Screen::CharacterSelect) => self.start_adventure(now),
            (None, Screen::Map) => self.travel_to_selected(now),
            (None, Screen::Combat) => {
                if self.combat().combat_status == CombatStatus::Victory {
                    self.return_to_map(now);
                } else {
                    self.use_action(self.selected_action, now);
                }
            }
        }
    }

    /// Number key: action slot in combat, stat slot on the character sheet
    pub fn on_number(&mut self, index: usize, now: Instant) {
        match (self.overlay, self.screen) {
            (Some(Overlay::CharacterSheet), _) => {
                if let Some(stat) = StatKind::all().get(index) {
                    self.selected_stat = index;
                    self.spend_stat_point(*stat, now);
                }
            }
            (None, Screen::Combat) => {
                if index < self.actions().len() {
                    self.selected_action = index;
                    self.use_action(index, now);
                }
            }
            _ => {}
        }
    }

    pub fn on_escape(&mut self) {
        if self.overlay.is_some() {
            self.overlay = None;
        }
    }

    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        if self.overlay == Some(overlay) {
            self.overlay = None;
            return;
        }
        if overlay != Overlay::Help && self.player().is_none() {
            self.notice("Choose a hero first.");
            return;
        }
        self.overlay = Some(overlay);
        self.selected_item = 0;
        self.selected_stat = 0;
    }

    pub fn toggle_help(&mut self) {
        self.toggle_overlay(Overlay::Help);
    }

    // === Screen actions ===

    fn start_adventure(&mut self, now: Instant) {
        let Some(hero) = self.session.config().heroes.get(self.selected_hero) else {
            return;
        };
        let id = hero.id.clone();
        if self.dispatch(SessionCommand::SelectHero(id), now) {
            self.screen = Screen::Map;
        }
    }

    fn travel_to_selected(&mut self, now: Instant) {
        let Some(island) = self.session.config().world.islands().get(self.selected_island) else {
            return;
        };
        let name = island.name.clone();
        if self.is_traveling() {
            self.notice("The airship is already underway.");
            return;
        }
        if name == self.session.game().current_island {
            self.notice(format!("You are already at {}.", name));
            return;
        }
        self.dispatch(SessionCommand::Travel(name), now);
    }

    /// Start combat against a random enemy of the current island
    pub fn engage_enemy(&mut self, now: Instant) {
        if self.screen != Screen::Map || self.overlay.is_some() {
            return;
        }
        if self.is_traveling() {
            self.notice("Cannot engage while travelling.");
            return;
        }
        if self.dispatch(SessionCommand::EngageEnemy, now) {
            self.selected_action = 0;
            self.screen = Screen::Combat;
        }
    }

    pub fn back_to_character_select(&mut self) {
        if self.screen == Screen::Map && self.overlay.is_none() {
            self.screen = Screen::CharacterSelect;
        }
    }

    fn use_action(&mut self, index: usize, now: Instant) {
        let Some(action) = self.actions().get(index).cloned() else {
            return;
        };
        if !self.combat().can_act(Side::Player) {
            return;
        }
        self.dispatch(SessionCommand::PlayerAction(action), now);
    }

    /// "Try Again" after a defeat. Restarts on the built-in demo encounter.
    pub fn try_again(&mut self, now: Instant) {
        if self.screen == Screen::Combat && self.combat().combat_status == CombatStatus::Defeat {
            self.dispatch(SessionCommand::ResetCombat, now);
        }
    }

    /// "Give Up" after a defeat
    pub fn give_up(&mut self, now: Instant) {
        if self.screen == Screen::Combat && self.combat().combat_status == CombatStatus::Defeat {
            self.return_to_map(now);
        }
    }

    fn return_to_map(&mut self, now: Instant) {
        self.dispatch(SessionCommand::ResetCombat, now);
        self.screen = Screen::Map;
    }

    fn spend_stat_point(&mut self, stat: StatKind, now: Instant) {
        if self.player().map(|p| p.stat_points).unwrap_or(0) == 0 {
            self.notice("No stat points to spend.");
            return;
        }
        self.dispatch(SessionCommand::SpendStatPoint(stat), now);
    }

    fn equip_selected(&mut self) {
        let Some(item) = self
            .player()
            .and_then(|p| p.inventory.get(self.selected_item))
        else {
            return;
        };
        let message = format!("{} cannot be equipped yet.", item.name);
        self.notice(message);
    }

    /// Write the current combat state to the log as JSON
    pub fn export_snapshot(&mut self) {
        match self.combat().to_json() {
            Ok(json) => {
                info!(snapshot = %json, "combat snapshot");
                self.notice("Combat snapshot written to the log.");
            }
            Err(err) => warn!(error = %err, "failed to serialize combat snapshot"),
        }
    }

    // === Timers ===

    /// Fire any caller-side timers that are due
    pub fn tick(&mut self, now: Instant) {
        if self.arrival_due.is_some_and(|due| now >= due) {
            self.arrival_due = None;
            self.dispatch(SessionCommand::Arrive, now);
        }

        if let Some(scheduled) = self.enemy_turn {
            if now >= scheduled.due {
                self.enemy_turn = None;
                self.dispatch(SessionCommand::EnemyTurn(scheduled.encounter), now);
            }
        }
    }

    /// Send a command and react to its events. Returns false on error.
    fn dispatch(&mut self, command: SessionCommand, now: Instant) -> bool {
        let ok = match self.session.dispatch(command) {
            Ok(events) => {
                for event in events {
                    self.on_event(event, now);
                }
                true
            }
            Err(SessionError::Combat(err)) => {
                warn!(error = %err, "dropped enemy turn");
                false
            }
            Err(err) => {
                warn!(error = %err, "command rejected");
                self.notice(err.to_string());
                false
            }
        };
        self.sync_enemy_turn(now);
        ok
    }

    /// Keep the scheduled enemy turn in line with the engine
    ///
    /// A reset or a new encounter drops any pending turn from the old one.
    fn sync_enemy_turn(&mut self, now: Instant) {
        match self.session.combat().pending_enemy_turn() {
            Some(ticket) => {
                if self.enemy_turn.map(|s| s.encounter) != Some(ticket.encounter) {
                    self.enemy_turn = Some(ScheduledEnemyTurn {
                        encounter: ticket.encounter,
                        due: now + ticket.delay,
                    });
                }
            }
            None => self.enemy_turn = None,
        }
    }

    fn on_event(&mut self, event: SessionEvent, now: Instant) {
        match event {
            SessionEvent::HeroSelected { name } => {
                self.notice(format!("{} sets out from the Spire.", name));
            }
            SessionEvent::Departed { destination } => {
                self.arrival_due = Some(now + self.session.config().constants.world.travel_delay());
                self.notice(format!("Setting course for {}...", destination));
            }
            SessionEvent::Arrived { island } => {
                self.notice(format!("Arrived at {}.", island));
            }
            SessionEvent::CombatStarted { enemy, .. } => {
                self.notice(format!("{} blocks your path!", enemy));
            }
            SessionEvent::VictoryRewarded { experience } => {
                self.notice(format!("Gained {} experience.", experience));
            }
            SessionEvent::LeveledUp { level, .. } => {
                self.notice(format!("Level Up! Now level {}.", level));
            }
            SessionEvent::StatPointSpent { stat } => {
                self.notice(format!("{} increased.", stat.name()));
            }
        }
    }

    fn notice(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
        if self.notices.len() > MAX_NOTICES {
            self.notices.remove(0);
        }
    }

    pub fn last_notice(&self) -> Option<&str> {
        self.notices.last().map(String::as_str)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
