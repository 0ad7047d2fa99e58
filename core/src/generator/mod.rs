use crate::*;
pub use random::*;

mod random;

/// Produces the mine layout for a board, keeping `exclude` free of mines.
pub trait MineGenerator {
    fn generate(self, config: GameConfig, exclude: Coord2) -> Result<MineLayout>;
}

/// A prepared layout is accepted as-is when it fits the board and leaves `exclude` safe.
impl MineGenerator for MineLayout {
    fn generate(self, config: GameConfig, exclude: Coord2) -> Result<MineLayout> {
        if self.game_config() != config || self.contains_mine(exclude) {
            log::warn!(
                "Rejected fixed layout {:?} for board {:?} excluding {:?}",
                self.game_config(),
                config,
                exclude
            );
            return Err(GameError::InvalidParameters);
        }
        Ok(self)
    }
}
