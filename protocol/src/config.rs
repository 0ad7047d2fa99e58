use sapper_core::{DifficultyTable, GameSession};
use serde::{Deserialize, Serialize};

use crate::*;

/// Host configuration, usually read from a TOML file. Every section may be omitted.
///
/// ```toml
/// [presets.beginner]
/// size = 9
/// mines = 10
///
/// [settings]
/// difficulty = "Professional"
/// mode = "Timed"
/// clues_enabled = false
///
/// [thresholds]
/// wins = 5
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub presets: DifficultyTable,
    pub settings: Settings,
    pub thresholds: AchievementThresholds,
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config
            .presets
            .validate()
            .map_err(|(difficulty, source)| ConfigError::Preset { difficulty, source })?;
        log::debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    /// Starts a session for the configured difficulty.
    pub fn new_session(&self, seed: u64) -> Result<GameSession> {
        let difficulty = self.settings.difficulty;
        GameSession::for_difficulty(difficulty, &self.presets, seed)
            .map_err(|source| ConfigError::Preset { difficulty, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sapper_core::{Difficulty, GameConfig, GameError};

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn partial_sections_override_defaults() {
        let config = Config::from_toml_str(
            r#"
            [presets.professional]
            size = 20
            mines = 60

            [settings]
            difficulty = "Professional"
            mode = "Timed"

            [thresholds]
            wins = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.presets.beginner, DifficultyTable::BEGINNER);
        assert_eq!(config.presets.professional, GameConfig::new_unchecked(20, 60));
        assert_eq!(config.settings.mode, GameMode::Timed);
        assert!(config.settings.clues_enabled);
        assert_eq!(config.thresholds.wins, 3);
        assert_eq!(config.thresholds.marked_mines, 50);

        let session = config.new_session(1).unwrap();
        assert_eq!(session.difficulty(), Some(Difficulty::Professional));
        assert_eq!(session.config().size, 20);
    }

    #[test]
    fn invalid_preset_is_reported() {
        let err = Config::from_toml_str(
            r#"
            [presets.beginner]
            size = 3
            mines = 9
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Preset {
                difficulty: Difficulty::Beginner,
                source: GameError::InvalidParameters
            }
        ));
    }

    #[test]
    fn malformed_toml_is_reported() {
        assert!(matches!(
            Config::from_toml_str("[settings\n"),
            Err(ConfigError::Toml(_))
        ));
    }
}
