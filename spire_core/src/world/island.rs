//! Islands and their enemy rosters

use crate::character::{Character, CharacterTemplate};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Flavor line for islands without one
pub const UNKNOWN_FLAVOR: &str = "A mysterious land shrouded in fog.";

/// A floating island on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Island {
    pub id: String,
    pub name: String,
    /// Horizontal position, percent of map width
    pub x: u8,
    /// Vertical position, percent of map height
    pub y: u8,
    #[serde(default)]
    pub flavor: Option<String>,
    #[serde(default)]
    pub enemies: Vec<CharacterTemplate>,
}

impl Island {
    pub fn flavor(&self) -> &str {
        self.flavor.as_deref().unwrap_or(UNKNOWN_FLAVOR)
    }
}

/// The map: every island plus which one is home
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    islands: Vec<Island>,
    home_island: String,
}

impl World {
    pub fn new(islands: Vec<Island>, home_island: impl Into<String>) -> Self {
        World {
            islands,
            home_island: home_island.into(),
        }
    }

    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    pub fn home_island(&self) -> &str {
        &self.home_island
    }

    pub fn island(&self, name: &str) -> Option<&Island> {
        self.islands.iter().find(|i| i.name == name)
    }

    /// Flavor text for an island by name
    pub fn flavor(&self, name: &str) -> &str {
        self.island(name).map(Island::flavor).unwrap_or(UNKNOWN_FLAVOR)
    }

    /// Roster for an island, falling back to the home roster when it has none
    pub fn roster(&self, name: &str) -> &[CharacterTemplate] {
        match self.island(name) {
            Some(island) if !island.enemies.is_empty() => &island.enemies,
            _ => self
                .island(&self.home_island)
                .map(|home| home.enemies.as_slice())
                .unwrap_or(&[]),
        }
    }

    /// Pick a random full-health enemy for an island
    pub fn pick_enemy(&self, island: &str) -> Option<Character> {
        let mut rng = rand::thread_rng();
        self.pick_enemy_with_rng(island, &mut rng)
    }

    /// Pick an enemy with a provided RNG (for deterministic testing)
    pub fn pick_enemy_with_rng(&self, island: &str, rng: &mut impl Rng) -> Option<Character> {
        let roster = self.roster(island);
        if roster.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..roster.len());
        Some(roster[index].instantiate(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_islands;
    use rand::SeedableRng;

    fn world() -> World {
        World::new(default_islands(), "Aetherium Spire - Home")
    }

    #[test]
    fn test_flavor_lookup() {
        let world = world();
        assert!(world.flavor("Clockwork Citadel").starts_with("An impenetrable fortress"));
        assert_eq!(world.flavor("Nowhere"), UNKNOWN_FLAVOR);
    }

    #[test]
    fn test_unknown_island_uses_home_roster() {
        let world = world();
        let roster = world.roster("Nowhere");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, "training-automaton");
    }

    #[test]
    fn test_pick_enemy_from_island_roster() {
        let world = world();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let enemy = world
                .pick_enemy_with_rng("Sky-Pirate's Den", &mut rng)
                .unwrap();
            assert!(enemy.id == "pirate-grunt" || enemy.id == "captain-vance");
            assert_eq!(enemy.current_hp, enemy.max_hp);
            assert!(!enemy.is_player);
        }
    }

    #[test]
    fn test_pick_enemy_empty_world() {
        let world = World::new(Vec::new(), "Home");
        assert!(world.pick_enemy("Home").is_none());
    }
}
