use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of revealing a single cell on the [`Board`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    AlreadyRevealed,
    BlockedByFlag,
    Opened { is_mine: bool, adjacent_mines: u8 },
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Opened { .. })
    }
}

/// Result of toggling a flag on the [`Board`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagOutcome {
    BlockedByReveal,
    Toggled { state: CellState, is_mine: bool },
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Toggled { .. })
    }
}

/// Square grid of cells with lazily placed mines.
///
/// Mines stay unplaced until [`Board::place_mines`] is called with the first revealed cell, after which
/// the layout is fixed until [`Board::reset`]. Each reveal opens exactly one cell, there is no
/// cascading into zero-count neighbors.
#[derive(Clone, Debug)]
pub struct Board {
    config: GameConfig,
    cells: Array2<CellState>,
    mine_layout: Option<MineLayout>,
    clues: Vec<Coord2>,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    rng: SmallRng,
}

impl Board {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            cells: Array2::default((config.size, config.size).to_nd_index()),
            mine_layout: None,
            clues: Vec::new(),
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    pub fn create(size: Coord, mine_count: CellCount, seed: u64) -> Result<Self> {
        Self::new(GameConfig::new_unchecked(size, mine_count), seed)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.config.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.config.size && coords.1 < self.config.size {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<CellState> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn cells(&self) -> &Array2<CellState> {
        &self.cells
    }

    pub fn mines_placed(&self) -> bool {
        self.mine_layout.is_some()
    }

    pub fn mine_layout(&self) -> Option<&MineLayout> {
        self.mine_layout.as_ref()
    }

    /// Mine positions in row-major order, empty until mines are placed.
    pub fn mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_layout.iter().flat_map(MineLayout::iter_mines)
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_layout
            .as_ref()
            .is_some_and(|layout| layout.contains_mine(coords))
    }

    /// Places mines uniformly at random, never on `exclude`.
    pub fn place_mines(&mut self, exclude: Coord2) -> Result<()> {
        let seed: u64 = self.rng.random();
        self.place_mines_with(exclude, RandomMineGenerator::new(seed))
    }

    pub fn place_mines_with(&mut self, exclude: Coord2, generator: impl MineGenerator) -> Result<()> {
        let exclude = self.validate_coords(exclude)?;
        if self.mine_layout.is_some() {
            return Err(GameError::AlreadyPlaced);
        }

        let layout = generator.generate(self.config, exclude)?;
        self.clues = layout.mines();
        self.mine_layout = Some(layout);
        Ok(())
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self
            .mine_layout
            .as_ref()
            .map_or(0, |layout| layout.adjacent_mine_count(coords)))
    }

    /// Mines must be placed first, otherwise the revealed cell could later receive a mine.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        let Some(layout) = self.mine_layout.as_ref() else {
            log::warn!("Rejected reveal at {:?} before mines were placed", coords);
            return Err(GameError::InvalidTransition);
        };
        let is_mine = layout.contains_mine(coords);
        let adjacent_mines = layout.adjacent_mine_count(coords);

        Ok(match self.cells[coords.to_nd_index()] {
            CellState::Revealed => RevealOutcome::AlreadyRevealed,
            CellState::Flagged => RevealOutcome::BlockedByFlag,
            CellState::Hidden => {
                self.cells[coords.to_nd_index()] = CellState::Revealed;
                self.revealed_count += 1;
                let outcome = RevealOutcome::Opened {
                    is_mine,
                    adjacent_mines,
                };
                log::trace!("Revealed {:?}: {:?}", coords, outcome);
                outcome
            }
        })
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.validate_coords(coords)?;

        let state = match self.cells[coords.to_nd_index()] {
            CellState::Revealed => return Ok(FlagOutcome::BlockedByReveal),
            CellState::Hidden => {
                self.flagged_count += 1;
                CellState::Flagged
            }
            CellState::Flagged => {
                self.flagged_count -= 1;
                CellState::Hidden
            }
        };
        self.cells[coords.to_nd_index()] = state;
        log::trace!("Toggled flag at {:?} to {:?}", coords, state);

        Ok(FlagOutcome::Toggled {
            state,
            is_mine: self.contains_mine(coords),
        })
    }

    pub fn count_revealed(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    /// Mines not yet accounted for by a flag, negative when the player over-flags.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines) - i32::from(self.flagged_count.0)
    }

    /// Every safe cell is revealed. Flags play no part in this.
    pub fn is_complete(&self) -> bool {
        self.revealed_count.0.saturating_add(self.config.mines) == self.config.total_cells()
    }

    pub fn clues_left(&self) -> usize {
        self.clues.len()
    }

    /// Hands out one not-yet-shown mine position. The mine layout itself is untouched.
    pub fn take_random_clue(&mut self) -> Option<Coord2> {
        if self.clues.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..self.clues.len());
        Some(self.clues.swap_remove(index))
    }

    pub fn reset(&mut self) {
        self.cells.fill(CellState::Hidden);
        self.mine_layout = None;
        self.clues.clear();
        self.revealed_count = Saturating(0);
        self.flagged_count = Saturating(0);
    }
}
