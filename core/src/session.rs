use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - AwaitingFirstMove -> InProgress
/// - AwaitingFirstMove -> Won (the first reveal already opens every safe cell)
/// - InProgress -> Won
/// - InProgress -> Lost
/// - any -> AwaitingFirstMove (restart)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No mines yet, they are placed by the first reveal
    #[default]
    AwaitingFirstMove,
    InProgress,
    Won,
    Lost,
}

impl Phase {
    pub const fn is_awaiting_first_move(self) -> bool {
        matches!(self, Self::AwaitingFirstMove)
    }

    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Game ended and only a restart is accepted
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What a reveal changed, for the caller to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealEvent {
    AlreadyRevealed,
    BlockedByFlag,
    Opened { coords: Coord2, adjacent_mines: u8 },
    Won { coords: Coord2, adjacent_mines: u8 },
    /// Carries every mine so the caller can uncover the whole layout
    HitMine { coords: Coord2, mines: Vec<Coord2> },
}

impl RevealEvent {
    pub const fn has_update(&self) -> bool {
        !matches!(self, Self::AlreadyRevealed | Self::BlockedByFlag)
    }

    pub const fn adjacent_mines(&self) -> Option<u8> {
        match self {
            Self::Opened { adjacent_mines, .. } | Self::Won { adjacent_mines, .. } => {
                Some(*adjacent_mines)
            }
            _ => None,
        }
    }
}

/// What a flag toggle changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagEvent {
    BlockedByReveal,
    /// `marked_mine` is set when the flag landed on a mine
    Flagged { coords: Coord2, marked_mine: bool },
    Unflagged { coords: Coord2 },
}

impl FlagEvent {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::BlockedByReveal)
    }

    pub const fn marked_mine(self) -> bool {
        matches!(
            self,
            Self::Flagged {
                marked_mine: true,
                ..
            }
        )
    }
}

/// One game from the first reveal to a win or a loss.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    phase: Phase,
    difficulty: Option<Difficulty>,
    marked_mines: BTreeSet<Coord2>,
    triggered_mine: Option<Coord2>,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Ok(Self {
            board: Board::new(config, seed)?,
            phase: Phase::default(),
            difficulty: None,
            marked_mines: BTreeSet::new(),
            triggered_mine: None,
        })
    }

    pub fn for_difficulty(difficulty: Difficulty, table: &DifficultyTable, seed: u64) -> Result<Self> {
        let mut session = Self::new(table.config(difficulty), seed)?;
        session.difficulty = Some(difficulty);
        Ok(session)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    /// `None` for boards built from a custom config.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Cells currently flagged that hold a mine.
    pub fn marked_mines(&self) -> &BTreeSet<Coord2> {
        &self.marked_mines
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealEvent> {
        let coords = self.board.validate_coords(coords)?;

        match self.phase {
            Phase::AwaitingFirstMove => {
                self.board.place_mines(coords)?;
                self.set_phase(Phase::InProgress);
                self.open(coords)
            }
            Phase::InProgress => self.open(coords),
            Phase::Won | Phase::Lost => Err(self.reject("reveal")),
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagEvent> {
        let coords = self.board.validate_coords(coords)?;
        if !self.phase.is_in_progress() {
            return Err(self.reject("toggle_flag"));
        }

        Ok(match self.board.toggle_flag(coords)? {
            FlagOutcome::BlockedByReveal => FlagEvent::BlockedByReveal,
            FlagOutcome::Toggled {
                state: CellState::Flagged,
                is_mine,
            } => {
                if is_mine {
                    self.marked_mines.insert(coords);
                }
                FlagEvent::Flagged {
                    coords,
                    marked_mine: is_mine,
                }
            }
            FlagOutcome::Toggled { .. } => {
                self.marked_mines.remove(&coords);
                FlagEvent::Unflagged { coords }
            }
        })
    }

    /// Shows one mine that has not been hinted yet. Only available mid-game.
    pub fn request_clue(&mut self) -> Option<Coord2> {
        if !self.phase.is_in_progress() {
            log::debug!("Clue requested in {:?}, ignored", self.phase);
            return None;
        }
        self.board.take_random_clue()
    }

    pub fn restart(&mut self) {
        self.board.reset();
        self.marked_mines.clear();
        self.triggered_mine = None;
        self.set_phase(Phase::AwaitingFirstMove);
    }

    fn open(&mut self, coords: Coord2) -> Result<RevealEvent> {
        Ok(match self.board.reveal(coords)? {
            RevealOutcome::AlreadyRevealed => RevealEvent::AlreadyRevealed,
            RevealOutcome::BlockedByFlag => RevealEvent::BlockedByFlag,
            RevealOutcome::Opened { is_mine: true, .. } => {
                self.triggered_mine = Some(coords);
                self.set_phase(Phase::Lost);
                RevealEvent::HitMine {
                    coords,
                    mines: self.board.mines().collect(),
                }
            }
            RevealOutcome::Opened {
                is_mine: false,
                adjacent_mines,
            } => {
                if self.board.is_complete() {
                    self.set_phase(Phase::Won);
                    RevealEvent::Won {
                        coords,
                        adjacent_mines,
                    }
                } else {
                    RevealEvent::Opened {
                        coords,
                        adjacent_mines,
                    }
                }
            }
        })
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::debug!("Game phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    fn reject(&self, operation: &str) -> GameError {
        log::warn!("Rejected {} in phase {:?}", operation, self.phase);
        GameError::InvalidTransition
    }
}
