//! Selectable hero loading

use crate::character::CharacterTemplate;
use super::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HeroesConfig {
    heroes: Vec<CharacterTemplate>,
}

/// Load hero templates from a TOML string
pub fn parse_heroes(content: &str) -> Result<Vec<CharacterTemplate>, ConfigError> {
    let config: HeroesConfig = super::parse_toml(content)?;
    if let Some(hero) = config.heroes.iter().find(|h| h.exp_to_next_level == 0) {
        return Err(ConfigError::ValidationError(format!(
            "hero '{}' needs a positive exp_to_next_level",
            hero.id
        )));
    }
    Ok(config.heroes)
}

/// Get the default hero roster
pub fn default_heroes() -> Vec<CharacterTemplate> {
    let toml = include_str!("../../config/heroes.toml");
    parse_heroes(toml).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_heroes() {
        let heroes = default_heroes();
        let ids: Vec<&str> = heroes.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["mechanic", "skypirate", "alchemist"]);

        let kael = &heroes[1];
        assert_eq!(kael.max_hp, 90);
        assert_eq!(kael.attack_power, 15);
        assert_eq!(kael.defense, 4);
        assert_eq!(kael.exp_to_next_level, 100);
    }

    #[test]
    fn test_hero_without_threshold_rejected() {
        let toml = r#"
[[heroes]]
id = "stuck"
name = "Stuck"
max_hp = 10
attack_power = 1
defense = 1
"#;
        assert!(matches!(
            parse_heroes(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
