use sapper_core::{Difficulty, GameSession, Phase};
use serde::{Deserialize, Serialize};

use crate::*;

const UNKNOWN_PLAYER: &str = "Unknown";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub elapsed_seconds: u32,
    pub difficulty: Difficulty,
}

impl LeaderboardEntry {
    pub fn new(player_name: &str, elapsed_seconds: u32, difficulty: Difficulty) -> Self {
        let player_name = match player_name.trim() {
            "" => UNKNOWN_PLAYER,
            name => name,
        };
        Self {
            player_name: player_name.to_owned(),
            elapsed_seconds,
            difficulty,
        }
    }

    /// Builds the row for a won timed game on one of the preset difficulties.
    pub fn for_session(
        session: &GameSession,
        mode: GameMode,
        player_name: &str,
        elapsed_seconds: u32,
    ) -> Option<Self> {
        if mode != GameMode::Timed || session.phase() != Phase::Won {
            return None;
        }
        let difficulty = session.difficulty()?;
        Some(Self::new(player_name, elapsed_seconds, difficulty))
    }
}

/// Finished timed games, ranked per difficulty by elapsed time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn insert(&mut self, entry: LeaderboardEntry) {
        log::debug!(
            "Leaderboard entry {} in {}s on {}",
            entry.player_name,
            entry.elapsed_seconds,
            entry.difficulty
        );
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries for `difficulty`, fastest first, with 1-based positions. Ties keep insertion order.
    pub fn ranking(&self, difficulty: Difficulty) -> Vec<(usize, &LeaderboardEntry)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .filter(|entry| entry.difficulty == difficulty)
            .collect();
        entries.sort_by_key(|entry| entry.elapsed_seconds);
        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| (index + 1, entry))
            .collect()
    }
}
