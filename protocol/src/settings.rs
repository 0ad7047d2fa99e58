use sapper_core::{Difficulty, Phase};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// No timer, clues allowed
    #[default]
    Casual,
    /// Timed run that counts toward achievements and the leaderboard
    Timed,
}

/// Choices the player makes before starting a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub mode: GameMode,
    pub clues_enabled: bool,
}

impl Settings {
    /// Clues are offered in casual games that have started and not yet ended.
    pub fn clue_available(&self, phase: Phase) -> bool {
        self.clues_enabled && self.mode == GameMode::Casual && phase.is_in_progress()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Beginner,
            mode: GameMode::Casual,
            clues_enabled: true,
        }
    }
}
