use thiserror::Error;

use super::types::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Position {0} is outside the 3x3 board")]
    InvalidPosition(Position),

    #[error("Cell index {0} is outside the board (expected 0-8)")]
    InvalidIndex(usize),

    #[error("Cell {0} is already marked")]
    IllegalMove(Position),

    #[error("Invalid board notation: {0}")]
    InvalidNotation(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
