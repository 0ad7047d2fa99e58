use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size or mine count is out of range")]
    InvalidParameters,
    #[error("Coordinates are outside of the board")]
    OutOfBounds,
    #[error("Mines were already placed on this board")]
    AlreadyPlaced,
    #[error("Operation is not allowed in the current game phase")]
    InvalidTransition,
}

pub type Result<T> = core::result::Result<T, GameError>;
