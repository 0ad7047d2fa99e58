use sapper_core::{Difficulty, FlagEvent, GameSession, Phase};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Achievement {
    WinCount,
    MarkedMines,
    /// Won at least one timed game on every difficulty
    CompleteAllLevels,
}

/// Targets for the counter-based achievements.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementThresholds {
    pub wins: u32,
    pub marked_mines: u32,
}

impl Default for AchievementThresholds {
    fn default() -> Self {
        Self {
            wins: 10,
            marked_mines: 50,
        }
    }
}

/// Player progress. Only timed games move the counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievements {
    pub wins: u32,
    pub marked_mines: u32,
    pub beginner_completed: bool,
    pub professional_completed: bool,
}

impl Achievements {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns whether the counters changed.
    pub fn record_flag(&mut self, mode: GameMode, event: FlagEvent) -> bool {
        if mode != GameMode::Timed || !event.marked_mine() {
            return false;
        }
        self.marked_mines = self.marked_mines.saturating_add(1);
        true
    }

    /// Returns whether the counters changed.
    pub fn record_win(&mut self, mode: GameMode, difficulty: Option<Difficulty>) -> bool {
        if mode != GameMode::Timed {
            return false;
        }
        self.wins = self.wins.saturating_add(1);
        match difficulty {
            Some(Difficulty::Beginner) => self.beginner_completed = true,
            Some(Difficulty::Professional) => self.professional_completed = true,
            None => {}
        }
        log::info!("Recorded win #{} on {:?}", self.wins, difficulty);
        true
    }

    /// Records the win of `session` if it has just been won.
    pub fn record_session(&mut self, mode: GameMode, session: &GameSession) -> bool {
        session.phase() == Phase::Won && self.record_win(mode, session.difficulty())
    }

    pub fn is_completed(&self, difficulty: Difficulty) -> bool {
        match difficulty {
            Difficulty::Beginner => self.beginner_completed,
            Difficulty::Professional => self.professional_completed,
        }
    }

    pub fn unlocked(&self, thresholds: &AchievementThresholds) -> Vec<Achievement> {
        let mut unlocked = Vec::new();
        if self.wins >= thresholds.wins {
            unlocked.push(Achievement::WinCount);
        }
        if self.marked_mines >= thresholds.marked_mines {
            unlocked.push(Achievement::MarkedMines);
        }
        if Difficulty::ALL.iter().all(|&difficulty| self.is_completed(difficulty)) {
            unlocked.push(Achievement::CompleteAllLevels);
        }
        unlocked
    }
}
