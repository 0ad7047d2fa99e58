use sapper_core::{Difficulty, GameError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Could not read snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid {difficulty} preset: {source}")]
    Preset {
        difficulty: Difficulty,
        source: GameError,
    },
}

pub type Result<T> = core::result::Result<T, ConfigError>;
