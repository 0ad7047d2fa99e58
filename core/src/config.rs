use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Dimensions of a square board and the number of mines hidden in it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Builds a config, rejecting empty boards and boards without a single safe cell.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(size, mines).validate()
    }

    pub fn validate(self) -> Result<Self> {
        if self.size == 0 || self.mines == 0 || self.mines >= self.total_cells() {
            return Err(GameError::InvalidParameters);
        }
        Ok(self)
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Professional,
}

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Beginner, Difficulty::Professional];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Beginner => "Beginner",
            Self::Professional => "Professional",
        })
    }
}

/// Board parameters for every [`Difficulty`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyTable {
    pub beginner: GameConfig,
    pub professional: GameConfig,
}

impl DifficultyTable {
    pub const BEGINNER: GameConfig = GameConfig::new_unchecked(9, 10);
    pub const PROFESSIONAL: GameConfig = GameConfig::new_unchecked(16, 40);

    pub const fn config(&self, difficulty: Difficulty) -> GameConfig {
        match difficulty {
            Difficulty::Beginner => self.beginner,
            Difficulty::Professional => self.professional,
        }
    }

    /// Checks every preset, reporting the first one that cannot build a board.
    pub fn validate(self) -> core::result::Result<Self, (Difficulty, GameError)> {
        for difficulty in Difficulty::ALL {
            self.config(difficulty)
                .validate()
                .map_err(|err| (difficulty, err))?;
        }
        Ok(self)
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            beginner: Self::BEGINNER,
            professional: Self::PROFESSIONAL,
        }
    }
}
